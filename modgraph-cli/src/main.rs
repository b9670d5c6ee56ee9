//! modgraph CLI - validate and plan module configurations.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modgraph_planner::observability::{TracingConfig, init_tracing};
use std::path::PathBuf;

/// modgraph - dependency-ordered execution planning for module pipelines.
#[derive(Parser)]
#[command(name = "modgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration against a module catalog
    Validate {
        /// Path to the configuration YAML file
        config: PathBuf,

        /// Path to the module catalog YAML file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Type name of the loop-control module
        #[arg(long, default_value = "Looper")]
        loop_type: String,
    },

    /// Compute the execution plan of a configuration
    Plan {
        /// Path to the configuration YAML file
        config: PathBuf,

        /// Path to the module catalog YAML file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = commands::plan::OutputFormat::Text)]
        format: commands::plan::OutputFormat,

        /// Where to write the Graphviz dump if a cycle is found
        #[arg(long, default_value = "graph.debug")]
        debug_graph: PathBuf,

        /// Type name of the loop-control module
        #[arg(long, default_value = "Looper")]
        loop_type: String,
    },

    /// Export the module graph in Graphviz format
    Graph {
        /// Path to the configuration YAML file
        config: PathBuf,

        /// Path to the module catalog YAML file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Type name of the loop-control module
        #[arg(long, default_value = "Looper")]
        loop_type: String,
    },

    /// List the module definitions of a catalog
    Catalog {
        /// Path to the module catalog YAML file
        file: PathBuf,
    },
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // MODGRAPH_LOG_LEVEL or RUST_LOG win over -v
    init_tracing(TracingConfig::from_env_or_filter(filter))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Validate {
            config,
            catalog,
            loop_type,
        } => commands::validate::run(&config, &catalog, &loop_type),
        Commands::Plan {
            config,
            catalog,
            format,
            debug_graph,
            loop_type,
        } => commands::plan::run(&config, &catalog, format, debug_graph, &loop_type),
        Commands::Graph {
            config,
            catalog,
            output,
            loop_type,
        } => commands::graph::run(&config, &catalog, output.as_deref(), &loop_type),
        Commands::Catalog { file } => commands::catalog::run(&file),
    }
}
