//! Spatial k-means over layout positions

use crate::cluster::{Cluster, PositionProvider};
use crate::config::Config;
use crate::graph::{Category, Graph, Node, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of one k-means run
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Non-empty clusters, by centroid index
    pub clusters: Vec<Cluster>,

    /// Assignment passes performed
    pub iterations: usize,

    /// Whether a fixed point was reached before the iteration cap
    pub converged: bool,
}

impl Clustering {
    fn empty() -> Self {
        Self {
            clusters: Vec::new(),
            iterations: 0,
            converged: true,
        }
    }
}

/// Lloyd's k-means in 2D Euclidean space.
///
/// Centroids are seeded from distinct positioned nodes chosen at random, so
/// unseeded runs may settle on different local optima. Every call is
/// independent; nothing is kept between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeans {
    max_iterations: usize,
    seed: Option<u64>,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl KMeans {
    /// Engine with the given iteration cap; a cap of 0 still runs one pass
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            seed: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            max_iterations: config.max_iterations,
            seed: config.seed,
        }
    }

    /// Fix the initialization seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster the positioned nodes of `graph`, returning only the clusters
    pub fn cluster<P>(&self, graph: &Graph, desired_k: usize, positions: &P) -> Vec<Cluster>
    where
        P: PositionProvider + ?Sized,
    {
        self.run(graph, desired_k, positions).clusters
    }

    /// Cluster the positioned nodes of `graph` into at most `desired_k` groups.
    ///
    /// `k` is clamped to `[1, positioned node count]`. Nodes without a finite
    /// position are left out. No positioned nodes yields no clusters.
    pub fn run<P>(&self, graph: &Graph, desired_k: usize, positions: &P) -> Clustering
    where
        P: PositionProvider + ?Sized,
    {
        let points: Vec<(&Node, Position)> = graph
            .nodes()
            .iter()
            .filter_map(|node| {
                positions
                    .position(&node.id)
                    .filter(|p| p.x.is_finite() && p.y.is_finite())
                    .map(|p| (node, p))
            })
            .collect();

        if points.is_empty() {
            log::info!("No positioned nodes, skipping clustering");
            return Clustering::empty();
        }

        let n = points.len();
        let k = desired_k.clamp(1, n);
        if k != desired_k {
            log::debug!("Clamped k from {} to {} for {} positioned nodes", desired_k, k, n);
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut centroids: Vec<Position> = rand::seq::index::sample(&mut rng, n, k)
            .into_iter()
            .map(|i| points[i].1)
            .collect();

        // usize::MAX marks "not yet assigned" so the first pass always counts as a change
        let mut assignments = vec![usize::MAX; n];
        let cap = self.max_iterations.max(1);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < cap {
            iterations += 1;

            let mut moved = 0usize;
            for (slot, (_, position)) in assignments.iter_mut().zip(&points) {
                let nearest = nearest_centroid(position, &centroids);
                if *slot != nearest {
                    *slot = nearest;
                    moved += 1;
                }
            }

            log::debug!("k-means iteration {}: {} nodes reassigned", iterations, moved);

            if moved == 0 {
                converged = true;
                break;
            }

            update_centroids(&mut centroids, &assignments, &points);
        }

        let clusters = build_clusters(&centroids, &assignments, &points);

        if converged {
            log::info!(
                "k-means converged after {} iterations: {} clusters from {} nodes",
                iterations,
                clusters.len(),
                n
            );
        } else {
            log::info!(
                "k-means stopped at the {} iteration cap: {} clusters from {} nodes",
                cap,
                clusters.len(),
                n
            );
        }

        Clustering {
            clusters,
            iterations,
            converged,
        }
    }
}

/// Cluster with the default engine (100 iterations, unseeded)
pub fn cluster<P>(graph: &Graph, desired_k: usize, positions: &P) -> Vec<Cluster>
where
    P: PositionProvider + ?Sized,
{
    KMeans::default().cluster(graph, desired_k, positions)
}

/// Index of the closest centroid; ties go to the lowest index
fn nearest_centroid(position: &Position, centroids: &[Position]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = position.distance(centroid);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

/// Move each centroid to the mean of its members; empty ones stay put
fn update_centroids(centroids: &mut [Position], assignments: &[usize], points: &[(&Node, Position)]) {
    let mut sums = vec![(0.0f64, 0.0f64, 0usize); centroids.len()];
    for (&c, (_, p)) in assignments.iter().zip(points) {
        let entry = &mut sums[c];
        entry.0 += p.x;
        entry.1 += p.y;
        entry.2 += 1;
    }

    for (centroid, (sx, sy, count)) in centroids.iter_mut().zip(sums) {
        if count > 0 {
            *centroid = Position::new(sx / count as f64, sy / count as f64);
        }
    }
}

fn build_clusters(
    centroids: &[Position],
    assignments: &[usize],
    points: &[(&Node, Position)],
) -> Vec<Cluster> {
    centroids
        .iter()
        .enumerate()
        .filter_map(|(c, centroid)| {
            let members: Vec<&Node> = assignments
                .iter()
                .zip(points)
                .filter(|(&assigned, _)| assigned == c)
                .map(|(_, (node, _))| *node)
                .collect();

            let dominant_category = dominant_category(&members)?;

            Some(Cluster {
                id: c as u32,
                size: members.len(),
                members: members.iter().map(|n| n.id.clone()).collect(),
                centroid: *centroid,
                dominant_category,
            })
        })
        .collect()
}

/// Plurality category; ties go to the earlier category in [`Category::ALL`].
/// `None` for no members.
pub fn dominant_category(members: &[&Node]) -> Option<Category> {
    let mut counts = [0usize; Category::COUNT];
    for node in members {
        counts[node.category.index()] += 1;
    }

    let mut best: Option<(Category, usize)> = None;
    for category in Category::ALL {
        let count = counts[category.index()];
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}
