use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use collab_network_analyzer::cluster::metrics::summarize;
use collab_network_analyzer::cluster::{KMeans, PositionMap};
use collab_network_analyzer::graph::algorithms::{clustering_coefficient, collaborations, total_coauthored};
use collab_network_analyzer::stats::NetworkStats;
use collab_network_analyzer::{data, filter, stats, storage, Category, Cluster, Config, FilterSpec, Graph};

#[derive(Parser, Debug)]
#[clap(
    name = "collab-network-analyzer",
    about = "Filter, summarize and cluster a researcher collaboration network"
)]
struct Cli {
    /// Path to a dataset JSON file (defaults to the built-in sample)
    #[clap(long)]
    input: Option<String>,

    /// Path to a JSON map of node id -> [x, y] layout positions
    #[clap(long)]
    positions: Option<String>,

    /// Comma-separated categories to keep (default: all)
    #[clap(long, value_delimiter = ',')]
    categories: Vec<Category>,

    /// Minimum collaboration strength
    #[clap(long, default_value = "1")]
    strength_min: u8,

    /// Maximum collaboration strength
    #[clap(long, default_value = "10")]
    strength_max: u8,

    /// Minimum publication count
    #[clap(long, default_value = "0")]
    min_publications: u32,

    /// Minimum h-index
    #[clap(long, default_value = "0")]
    min_h_index: u32,

    /// Start of the date window (YYYY-MM-DD)
    #[clap(long, default_value = "2010-01-01")]
    date_from: NaiveDate,

    /// End of the date window (YYYY-MM-DD)
    #[clap(long, default_value = "2025-12-31")]
    date_to: NaiveDate,

    /// Free-text query over name, institution and keywords
    #[clap(long, default_value = "")]
    query: String,

    /// Number of k-means clusters
    #[clap(long, default_value = "5")]
    clusters: usize,

    /// Seed for reproducible clustering
    #[clap(long)]
    seed: Option<u64>,

    /// Iteration cap for k-means
    #[clap(long, default_value = "100")]
    max_iterations: usize,

    /// Length of the top researchers list
    #[clap(long, default_value = "5")]
    top: usize,

    /// Show collaboration details for this node id
    #[clap(long)]
    node: Option<String>,

    /// Output directory for results
    #[clap(long)]
    output_dir: Option<String>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config {
        cluster_count: args.clusters,
        max_iterations: args.max_iterations,
        top_researchers: args.top,
        seed: args.seed,
        ..Config::default()
    };

    // 1. Load data
    let graph = match &args.input {
        Some(path) => data::load_dataset(path).with_context(|| format!("loading dataset {path}"))?,
        None => {
            log::info!("No input given, using the built-in sample dataset");
            data::sample_graph()?
        }
    };

    let positions = match &args.positions {
        Some(path) => data::load_positions(path).with_context(|| format!("loading positions {path}"))?,
        None => PositionMap::new(),
    };

    // 2. Filter
    let spec = build_filter(&args)?;
    let filtered = filter::filter_graph_with(&graph, &spec, config.parallel_threshold);

    // 3. Cluster
    let engine = KMeans::from_config(&config);
    let clustering = engine.run(&filtered, config.cluster_count, &positions);

    // 4. Stats
    let network_stats =
        stats::compute_stats_with(&filtered, clustering.clusters.len(), config.top_researchers);

    report(&filtered, network_stats.as_ref(), &clustering.clusters);

    if let Some(id) = &args.node {
        report_node(&filtered, id);
    }

    // 5. Save results if requested
    if let Some(dir) = &args.output_dir {
        storage::save_results(dir, &filtered, network_stats.as_ref(), &clustering.clusters)?;
    }

    Ok(())
}

fn build_filter(args: &Cli) -> Result<FilterSpec> {
    let mut spec = FilterSpec::default()
        .with_strength_range(args.strength_min, args.strength_max)?
        .with_date_range(args.date_from, args.date_to)?
        .with_min_publications(args.min_publications)
        .with_min_h_index(args.min_h_index)
        .with_query(&args.query);

    if !args.categories.is_empty() {
        spec = spec.with_categories(args.categories.iter().copied());
    }

    Ok(spec)
}

fn report(graph: &Graph, network_stats: Option<&NetworkStats>, clusters: &[Cluster]) {
    let Some(s) = network_stats else {
        println!("No researchers match the current filters.");
        return;
    };

    println!("Researchers:    {}", s.node_count);
    println!("Collaborations: {}", s.edge_count);
    println!("Avg degree:     {}", s.avg_degree_display());
    println!("Density:        {}%", s.density_percent());
    println!("Clusters:       {}", s.clusters);

    println!("\nTop researchers by h-index:");
    for (rank, node) in s.top_researchers.iter().enumerate() {
        println!("  {}. {} ({}) h-index {}", rank + 1, node.name, node.institution, node.h_index);
    }

    println!("\nBy category:");
    for (category, count) in &s.category_breakdown {
        println!("  {:<18} {}", category.label(), count);
    }

    if clusters.is_empty() {
        println!("\nNo positioned researchers to cluster.");
        return;
    }

    println!("\nClusters:");
    for cluster in clusters {
        let summary = summarize(graph, cluster, 3);
        println!(
            "  #{} {} researchers ({:.0}%), mostly {}, centroid ({:.1}, {:.1}), density {:.2}",
            cluster.id,
            cluster.size,
            summary.share * 100.0,
            cluster.dominant_category,
            cluster.centroid.x,
            cluster.centroid.y,
            summary.density
        );
    }
}

fn report_node(graph: &Graph, id: &str) {
    let Some(node) = graph.node(id) else {
        println!("\nNode {id} is not in the filtered graph.");
        return;
    };

    println!("\n{} - {} ({})", node.name, node.institution, node.category);
    println!("  Publications: {}, h-index: {}", node.publication_count, node.h_index);
    println!("  Keywords: {}", node.keywords.join(", "));
    println!("  Clustering coefficient: {:.3}", clustering_coefficient(graph, id));
    println!("  Co-authored publications: {}", total_coauthored(graph, id));

    for c in collaborations(graph, id) {
        println!(
            "  - {} (strength {}, {} papers, {} to {})",
            c.collaborator.name,
            c.edge.strength,
            c.edge.co_authored_publications,
            c.edge.first_collaboration,
            c.edge.last_collaboration
        );
    }
}
