//! txmerkle CLI - Command line interface for txn_merkle
//!
//! Computes merkle roots over transaction lists and verifies candidate lists
//! against a known root. Output goes to stdout as JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use txn_merkle::{check, load_transactions, MerkleTree};

#[derive(Parser)]
#[command(name = "txmerkle")]
#[command(about = "Merkle roots and verification for ordered transaction lists")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Read transactions from a file instead of the command line
    /// (JSON array for *.json, otherwise one per line)
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the merkle root of a transaction list
    Root {
        /// Transactions, in order (values may start with '-')
        #[arg(allow_hyphen_values = true)]
        transactions: Vec<String>,
    },

    /// Check a transaction list against a known merkle root
    Verify {
        /// The expected root (64 lowercase hex characters)
        #[arg(short, long)]
        root: String,
        /// Transactions, in order (values may start with '-')
        #[arg(allow_hyphen_values = true)]
        transactions: Vec<String>,
    },

    /// Show the tree built from a transaction list
    Inspect {
        /// Transactions, in order (values may start with '-')
        #[arg(allow_hyphen_values = true)]
        transactions: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Root { transactions } => {
            let txns = gather(cli.file.as_deref(), transactions)?;
            let mut tree = MerkleTree::from_transactions(&txns)?;
            tree.compute_root();
            output(
                &cli.format,
                &serde_json::json!({
                    "root": tree.root_hex(),
                    "transactions": txns.len()
                }),
            )?;
        }

        Commands::Verify { root, transactions } => {
            let txns = gather(cli.file.as_deref(), transactions)?;
            let outcome = check(&root, &txns)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "verified": outcome.verified,
                    "expected": outcome.expected,
                    "actual": outcome.actual.to_hex(),
                    "message": outcome.message()
                }),
            )?;
            if !outcome.verified {
                std::process::exit(1);
            }
        }

        Commands::Inspect { transactions } => {
            let txns = gather(cli.file.as_deref(), transactions)?;
            let mut tree = MerkleTree::from_transactions(&txns)?;
            tree.compute_root();
            let leaves: Vec<_> = tree.leaves().iter().map(|h| h.to_hex()).collect();
            output(
                &cli.format,
                &serde_json::json!({
                    "transactions": txns.len(),
                    "nodes": tree.node_count(),
                    "leaves": tree.leaf_count(),
                    "depth": tree.depth(),
                    "leaf_hashes": leaves,
                    "inorder": tree.inorder(),
                    "root": tree.root_hex()
                }),
            )?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Transactions from `--file` when given, otherwise from the command line
fn gather(file: Option<&Path>, args: Vec<String>) -> anyhow::Result<Vec<Vec<u8>>> {
    match file {
        Some(path) => {
            if !args.is_empty() {
                anyhow::bail!("Pass transactions either with --file or as arguments, not both");
            }
            Ok(load_transactions(path)?)
        }
        None => Ok(args.into_iter().map(String::into_bytes).collect()),
    }
}

fn output(format: &OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
