use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use filter_model::FilterNode;
use mongo_filter::{CompileOptions, FilterCompiler, LiteralMode};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "odata-mongo",
    version = "0.1.0",
    about = "Compile OData $filter trees into MongoDB query fragments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    // Initialize logger; stdout carries the compiled output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli.command) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Compile {
            tree,
            bind,
            max_depth,
            json,
        } => {
            let root = load_tree(&tree)?;
            let options = CompileOptions {
                literals: if bind {
                    LiteralMode::Bind
                } else {
                    LiteralMode::Inline
                },
                max_depth,
            };
            info!("Compiling filter tree {} with {:?}", tree, options);

            let compiled = FilterCompiler::new(options).compile_bound(&root)?;
            println!("{}", output::render_compiled(&compiled, json)?);
        }
        Commands::Operators { json } => {
            println!("{}", output::render_operators(json)?);
        }
    }

    Ok(())
}

fn load_tree(path: impl AsRef<Path>) -> Result<FilterNode, CliError> {
    let source = std::fs::read_to_string(path)?;
    let tree = serde_json::from_str(&source)?;
    Ok(tree)
}
