use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_router::catalog::StationCatalog;
use metro_router::dto::PlanResult;
use metro_router::graph::{
    BuildConfig, DEFAULT_INTERCHANGE_MINUTES, DEFAULT_MAX_MINUTES, DEFAULT_MIN_MINUTES, Graph,
    GraphBuilder, WeightPolicy,
};
use metro_router::names::{NameResolver, ResolverConfig};
use metro_router::planner::{Itinerary, Path, PlanError, RoutePlanner};

/// Find the fastest and the fewest-stops route between two metro stations.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Station table CSV (STN_NAME, STN_NO, Latitude, Longitude)
    stations: PathBuf,

    /// Origin station name (prompted for if omitted)
    #[arg(long)]
    from: Option<String>,

    /// Destination station name (prompted for if omitted)
    #[arg(long)]
    to: Option<String>,

    /// Print every available station name
    #[arg(long)]
    list: bool,

    /// Print both routes as JSON
    #[arg(long)]
    json: bool,

    /// Skip station codes that cannot be parsed instead of failing
    #[arg(long)]
    lenient: bool,

    /// Seed for sampled same-line travel times
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Shortest sampled same-line travel time (minutes)
    #[arg(long, default_value_t = DEFAULT_MIN_MINUTES)]
    min_minutes: u32,

    /// Longest sampled same-line travel time (minutes)
    #[arg(long, default_value_t = DEFAULT_MAX_MINUTES)]
    max_minutes: u32,

    /// Use this travel time for every same-line edge instead of sampling
    #[arg(long)]
    fixed_minutes: Option<u32>,

    /// Transfer cost at interchanges (minutes)
    #[arg(long, default_value_t = DEFAULT_INTERCHANGE_MINUTES)]
    interchange_minutes: u32,

    /// Number of suggestions offered for unknown names
    #[arg(long, default_value_t = 3)]
    suggestions: usize,
}

impl Args {
    fn build_config(&self) -> BuildConfig {
        let weights = match self.fixed_minutes {
            Some(minutes) => WeightPolicy::Fixed(minutes),
            None => WeightPolicy::Seeded {
                min: self.min_minutes,
                max: self.max_minutes,
                seed: self.seed,
            },
        };
        BuildConfig::new(weights, self.interchange_minutes)
    }

    fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            max_suggestions: self.suggestions,
            ..ResolverConfig::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let catalog = StationCatalog::load_csv(&args.stations, args.lenient)
        .with_context(|| format!("failed to load {}", args.stations.display()))?;
    let graph = GraphBuilder::new(args.build_config())
        .build(catalog.codes())
        .context("failed to build the network graph")?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped = catalog.skipped(),
        "Network loaded"
    );

    let resolver = NameResolver::new(&graph, args.resolver_config());
    let planner = RoutePlanner::new(&graph);

    if args.list {
        println!("Available stations:");
        for name in resolver.station_names() {
            println!("- {name}");
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let from = match &args.from {
        Some(name) => name.clone(),
        None => prompt_station(&resolver, &mut input, "Enter start station name: ")?,
    };
    let to = match &args.to {
        Some(name) => name.clone(),
        None => prompt_station(&resolver, &mut input, "Enter end station name: ")?,
    };

    let plan = match planner.plan(&resolver, &from, &to) {
        Ok(plan) => plan,
        Err(PlanError::UnresolvedStation { query, suggestions }) => {
            print_not_found(&query, &suggestions);
            bail!("unknown station {query:?}");
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        let result = PlanResult::new(&from, &to, &plan);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_route(&graph, "Fastest Route", plan.fastest.as_ref(), &plan.fastest_itinerary);
    print_route(
        &graph,
        "Fewest Stops Route",
        plan.fewest_stops.as_ref(),
        &plan.fewest_stops_itinerary,
    );

    if plan.routes_identical() {
        println!("\nFastest and fewest-stops routes are identical.");
    } else {
        println!("\nRoutes differ.");
    }

    Ok(())
}

/// Ask for a station name until one resolves, offering suggestions.
fn prompt_station(
    resolver: &NameResolver<'_>,
    input: &mut impl BufRead,
    prompt: &str,
) -> Result<String> {
    loop {
        print!("\n{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no station name given");
        }
        let name = line.trim();

        if !resolver.resolve_exact(name).is_empty() {
            return Ok(name.to_string());
        }
        print_not_found(name, &resolver.suggest_default(name));
    }
}

fn print_not_found(query: &str, suggestions: &[String]) {
    println!("\nStation '{query}' not found.");
    if suggestions.is_empty() {
        println!("No similar station names found.");
    } else {
        println!("Did you mean:");
        for suggestion in suggestions {
            println!("  - {suggestion}");
        }
    }
}

fn print_route(graph: &Graph, title: &str, path: Option<&Path>, itinerary: &Itinerary<'_>) {
    let Some(path) = path else {
        println!("\n{title}: No path found");
        return;
    };

    let stops: Vec<String> = path
        .nodes()
        .iter()
        .filter_map(|idx| graph.node(*idx))
        .map(|node| node.to_string())
        .collect();
    println!("\n{title}: {}", stops.join(" → "));
    println!("Stops: {}", path.hops());
    println!("Total Travel Time: {} min", itinerary.total_minutes);
    println!("Segment Timings:");
    for segment in &itinerary.segments {
        println!("  {} → {} = {} min", segment.from, segment.to, segment.minutes);
    }
}
