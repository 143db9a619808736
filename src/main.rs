use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use lattice_topology::topology::description;
use lattice_topology::{analyze, generate, LatticeFamily};

#[derive(Parser)]
#[command(name = "lattice-topology")]
#[command(about = "Generate lattice unit-cell topologies and their graph metrics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported lattice families with their descriptions
    List,
    /// Generate the node/edge topology for a lattice family
    Generate {
        /// Lattice family (simple-cubic, bcc, fcc, octet, kelvin, diamond)
        #[arg(short, long)]
        family: String,

        /// Number of unit cells per axis
        #[arg(short, long, default_value = "1")]
        tiling: usize,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Generate a topology and compute its graph metrics
    Analyze {
        /// Lattice family (simple-cubic, bcc, fcc, octet, kelvin, diamond)
        #[arg(short, long)]
        family: String,

        /// Number of unit cells per axis
        #[arg(short, long, default_value = "1")]
        tiling: usize,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting lattice-topology v{}", lattice_topology::VERSION);

    match cli.command {
        Commands::List => list_families(),
        Commands::Generate {
            family,
            tiling,
            pretty,
        } => generate_topology(&family, tiling, pretty),
        Commands::Analyze {
            family,
            tiling,
            pretty,
        } => analyze_topology(&family, tiling, pretty),
    }
}

fn list_families() -> Result<(), Box<dyn std::error::Error>> {
    for family in LatticeFamily::ALL {
        let d = description(family);
        println!("{family}");
        println!("  structure:    {}", d.structure);
        println!("  mechanics:    {}", d.mechanical_behavior);
        println!("  applications: {}", d.applications);
        println!(
            "  connectivity: {} (relative density {:.2}-{:.2})",
            d.nominal_connectivity, d.relative_density_range.0, d.relative_density_range.1
        );
    }
    Ok(())
}

fn generate_topology(family: &str, tiling: usize, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let family: LatticeFamily = family.parse()?;
    info!("Generating {family} topology with tiling {tiling}");
    let topology = generate(family, tiling)?;
    info!(
        "Generated {} nodes and {} edges",
        topology.nodes.len(),
        topology.edges.len()
    );
    print_json(&topology, pretty)
}

fn analyze_topology(family: &str, tiling: usize, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let family: LatticeFamily = family.parse()?;
    info!("Analyzing {family} topology with tiling {tiling}");
    let topology = generate(family, tiling)?;
    let metrics = analyze(&topology.nodes, &topology.edges)?;
    print_json(&metrics, pretty)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
