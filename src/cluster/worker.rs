//! Background clustering where newer requests supersede older ones

use crate::cluster::{Clustering, KMeans, PositionMap};
use crate::graph::Graph;
use crossbeam::channel::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// One clustering job: a graph snapshot and the positions to use with it
#[derive(Debug, Clone)]
pub struct ClusteringRequest {
    pub graph: Arc<Graph>,
    pub k: usize,
    pub positions: Arc<PositionMap>,
}

/// Runs k-means on a dedicated thread.
///
/// Every [`submit`](Self::submit) bumps the generation. Queued requests that
/// have been superseded are skipped, and results from older generations are
/// dropped on arrival, so callers only ever see the newest result.
pub struct ClusteringWorker {
    requests: Option<Sender<(u64, ClusteringRequest)>>,
    results: Receiver<(u64, Clustering)>,
    generation: u64,
    current: Option<Clustering>,
    handle: Option<JoinHandle<()>>,
}

impl ClusteringWorker {
    /// Spawn the worker thread
    pub fn spawn(engine: KMeans) -> Self {
        let (request_tx, request_rx) = channel::unbounded::<(u64, ClusteringRequest)>();
        let (result_tx, result_rx) = channel::unbounded();

        let handle = thread::spawn(move || {
            while let Ok(mut job) = request_rx.recv() {
                // Only the newest queued request is worth computing
                for newer in request_rx.try_iter() {
                    job = newer;
                }

                let (generation, request) = job;
                log::debug!("Clustering generation {} with k = {}", generation, request.k);

                let outcome = engine.run(&request.graph, request.k, request.positions.as_ref());
                if result_tx.send((generation, outcome)).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(request_tx),
            results: result_rx,
            generation: 0,
            current: None,
            handle: Some(handle),
        }
    }

    /// Queue a request, superseding any earlier one. Returns its generation.
    pub fn submit(&mut self, request: ClusteringRequest) -> u64 {
        self.generation += 1;
        self.current = None;

        if let Some(tx) = &self.requests {
            if tx.send((self.generation, request)).is_err() {
                log::warn!("Clustering worker has stopped, request {} dropped", self.generation);
            }
        }

        self.generation
    }

    /// Generation of the most recent request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Result of the newest request, if it has arrived
    pub fn latest(&mut self) -> Option<&Clustering> {
        let arrived: Vec<(u64, Clustering)> = self.results.try_iter().collect();
        for (generation, outcome) in arrived {
            self.accept(generation, outcome);
        }
        self.current.as_ref()
    }

    /// Block until the newest request's result arrives.
    ///
    /// Returns `None` when nothing was submitted or the worker stopped.
    pub fn wait_latest(&mut self) -> Option<&Clustering> {
        if self.generation == 0 {
            return None;
        }

        while self.current.is_none() {
            let (generation, outcome) = self.results.recv().ok()?;
            self.accept(generation, outcome);
        }
        self.current.as_ref()
    }

    fn accept(&mut self, generation: u64, outcome: Clustering) {
        if generation == self.generation {
            self.current = Some(outcome);
        } else {
            log::debug!(
                "Discarding stale clustering result {} (current {})",
                generation,
                self.generation
            );
        }
    }
}

impl Drop for ClusteringWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Clustering worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Category, Node, Position};
    use chrono::NaiveDate;

    fn request(count: usize, k: usize) -> ClusteringRequest {
        let nodes: Vec<Node> = (0..count)
            .map(|i| Node {
                id: format!("n{i}"),
                name: format!("Researcher {i}"),
                category: Category::Chemistry,
                publication_count: 0,
                h_index: 0,
                institution: String::new(),
                keywords: Vec::new(),
                join_date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            })
            .collect();
        let positions: PositionMap = (0..count)
            .map(|i| (format!("n{i}"), Position::new(i as f64, (i * i) as f64)))
            .collect();

        ClusteringRequest {
            graph: Arc::new(Graph::from_parts(nodes, Vec::new()).unwrap()),
            k,
            positions: Arc::new(positions),
        }
    }

    #[test]
    fn nothing_submitted() {
        let mut worker = ClusteringWorker::spawn(KMeans::default());
        assert!(worker.latest().is_none());
        assert!(worker.wait_latest().is_none());
    }

    #[test]
    fn returns_result_of_newest_request() {
        let mut worker = ClusteringWorker::spawn(KMeans::default().with_seed(9));
        worker.submit(request(50, 4));
        worker.submit(request(30, 3));
        let generation = worker.submit(request(6, 1));
        assert_eq!(generation, 3);

        let outcome = worker.wait_latest().unwrap();
        assert_eq!(outcome.clusters.len(), 1);
        assert_eq!(outcome.clusters[0].size, 6);
        assert_eq!(worker.generation(), 3);
    }

    #[test]
    fn resubmitting_clears_previous_result() {
        let mut worker = ClusteringWorker::spawn(KMeans::default().with_seed(2));
        worker.submit(request(5, 5));
        assert_eq!(worker.wait_latest().unwrap().clusters.len(), 5);

        worker.submit(request(4, 2));
        let outcome = worker.wait_latest().unwrap();
        assert_eq!(outcome.clusters.iter().map(|c| c.size).sum::<usize>(), 4);
    }
}
