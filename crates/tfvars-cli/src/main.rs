//! `tfvars` CLI — read typed values out of Terraform variable files.
//!
//! ## Usage
//!
//! ```sh
//! # Print a single variable as a string
//! tfvars get terraform.tfvars aws_region
//!
//! # Print a list variable, one element per line
//! tfvars get terraform.tfvars availability_zones --as list
//!
//! # Print a map variable as key=value lines, or as JSON
//! tfvars get terraform.tfvars tags --as map
//! tfvars get terraform.tfvars tags --as map --json
//!
//! # Dump every variable as pretty-printed JSON
//! tfvars dump terraform.tfvars
//!
//! # Show decoder logs
//! tfvars -v dump terraform.tfvars
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tfvars",
    version,
    about = "Read typed values out of Terraform variable files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder activity to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one variable coerced to a string, list or map
    Get {
        /// Var file to read
        file: PathBuf,
        /// Variable name
        key: String,
        /// Shape to coerce the variable into
        #[arg(long = "as", value_enum, default_value_t = As::String)]
        shape: As,
        /// Print the coerced value as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every variable in the file as JSON
    Dump {
        /// Var file to read
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum As {
    String,
    List,
    Map,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Get {
            file,
            key,
            shape,
            json,
        } => {
            let vars = tfvars_core::decode_file(&file)?;
            let output = match shape {
                As::String => {
                    let value = tfvars_core::get_as_string(&vars, &key)?;
                    if json {
                        serde_json::to_string(&value)?
                    } else {
                        value
                    }
                }
                As::List => {
                    let items = tfvars_core::get_as_list(&vars, &key)?;
                    if json {
                        serde_json::to_string_pretty(&items)?
                    } else {
                        items.join("\n")
                    }
                }
                As::Map => {
                    let entries = tfvars_core::get_as_map(&vars, &key)?;
                    if json {
                        serde_json::to_string_pretty(&entries)?
                    } else {
                        entries
                            .iter()
                            .map(|(k, v)| format!("{k}={v}"))
                            .collect::<Vec<_>>()
                            .join("\n")
                    }
                }
            };
            println!("{output}");
        }
        Commands::Dump { file } => {
            let vars = tfvars_core::decode_file(&file)?;
            let pretty = serde_json::to_string_pretty(&vars)
                .with_context(|| format!("Failed to render {} as JSON", file.display()))?;
            println!("{pretty}");
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for values.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}
