//! CLI entry point for the `adjgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::graph::TraversalOrder;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjgraph",
    about = "adjgraph CLI — build, inspect and traverse adjacency-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Make the graph directed
        #[arg(long)]
        directed: bool,
        /// Number of letter-named vertices to start with (at most 26)
        #[arg(long, default_value = "0")]
        vertices: usize,
    },
    /// Display the direction, counts and adjacency lists of a graph
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Append a named vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex name
        name: String,
    },
    /// Add an edge between two vertex names, creating unknown vertices
    Link {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex name
        source: String,
        /// Target vertex name
        target: String,
    },
    /// Print the breadth-first or depth-first visit order
    Traverse {
        /// Path to the graph file
        file: PathBuf,
        /// Order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
        /// Start vertex name (defaults to the first vertex)
        #[arg(long)]
        start: Option<String>,
    },
    /// Enter a graph interactively and save it
    Input {
        /// Path to the graph file to write
        file: PathBuf,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the graph file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Create {
            file,
            directed,
            vertices,
        } => commands::cmd_create(&file, directed, vertices),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddVertex { file, name } => commands::cmd_add_vertex(&file, &name, json),
        Commands::Link {
            file,
            source,
            target,
        } => commands::cmd_link(&file, &source, &target, json),
        Commands::Traverse { file, order, start } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, order, start.as_deref(), json)
        }
        Commands::Input { file } => commands::cmd_input(&file),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Format { .. } => 2,
            GraphError::IndexOutOfRange { .. } | GraphError::UnknownVertex(_) => 4,
            GraphError::NamingCapacityExceeded { .. } | GraphError::InvalidVertexName(_) => 5,
        };
        process::exit(code);
    }
}
