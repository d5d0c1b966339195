//! CLI entry point for the `tgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use tricolor_graph::cli::commands;
use tricolor_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "tgraph",
    about = "tgraph: build adjacency graphs and run tri-color breadth-first search"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Also print the final state of every vertex after a search
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and link counts of an adjacency file
    Info {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Record the graph as directed
        #[arg(long)]
        directed: bool,
    },
    /// Breadth-first search from a source vertex
    Bfs {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Key of the source vertex
        source: String,
    },
    /// Predecessor chain from a source vertex to a target vertex
    Path {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Key of the source vertex
        source: String,
        /// Key of the target vertex
        target: String,
    },
    /// Outgoing neighbors of a vertex
    Neighbors {
        /// Path to the JSON adjacency file
        file: PathBuf,
        /// Key of the vertex
        key: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let result = match cli.command {
        Commands::Info { file, directed } => commands::cmd_info(&file, directed, json),
        Commands::Bfs { file, source } => commands::cmd_bfs(&file, &source, json, cli.verbose),
        Commands::Path {
            file,
            source,
            target,
        } => commands::cmd_path(&file, &source, &target, json),
        Commands::Neighbors { file, key } => commands::cmd_neighbors(&file, &key, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::InvalidInput(_) => 2,
            GraphError::UnknownVertex(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
