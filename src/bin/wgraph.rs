//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use wgraph::cli::commands;
use wgraph::graph::TraversalOrder;
use wgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wgraph CLI: traversals, shortest paths and spanning trees over edge-list files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Print algorithm statistics to stderr
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
        /// Treat each line as a one-way edge
        #[arg(long)]
        directed: bool,
    },
    /// Breadth-first visit order from a start node
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node name
        start: String,
        /// Treat each line as a one-way edge
        #[arg(long)]
        directed: bool,
    },
    /// Depth-first visit order from a start node
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node name
        start: String,
        /// Treat each line as a one-way edge
        #[arg(long)]
        directed: bool,
    },
    /// Minimum cost from a start node to every reachable node
    Dijkstra {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node name
        start: String,
        /// Also print the cheapest path to this node
        #[arg(long)]
        to: Option<String>,
        /// Treat each line as a one-way edge
        #[arg(long)]
        directed: bool,
    },
    /// Minimum spanning tree (forest if disconnected)
    Mst {
        /// Path to the edge-list file
        file: PathBuf,
        /// Treat each line as a one-way edge
        #[arg(long)]
        directed: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Info { file, directed } => commands::cmd_info(&file, directed, json),
        Commands::Bfs {
            file,
            start,
            directed,
        } => commands::cmd_traverse(
            &file,
            &start,
            TraversalOrder::BreadthFirst,
            directed,
            json,
            verbose,
        ),
        Commands::Dfs {
            file,
            start,
            directed,
        } => commands::cmd_traverse(
            &file,
            &start,
            TraversalOrder::DepthFirst,
            directed,
            json,
            verbose,
        ),
        Commands::Dijkstra {
            file,
            start,
            to,
            directed,
        } => commands::cmd_dijkstra(&file, &start, to.as_deref(), directed, json, verbose),
        Commands::Mst { file, directed } => commands::cmd_mst(&file, directed, json, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } | GraphError::InvalidWeight(_) => 2,
            GraphError::NodeNotFound(_) => 4,
        };
        process::exit(code);
    }
}
