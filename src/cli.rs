//! Command-line interface for the type list evaluator.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tylist")]
#[command(about = "Evaluate type-level list expressions", long_about = None)]
pub struct Cli {
    /// Log filter directive, e.g. `debug` or `tylist=trace`
    #[arg(long, global = true, env = "TYLIST_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a single expression and print its value
    Eval {
        expr: String,

        /// Print lists in `Node(.., Empty)` form
        #[arg(long)]
        cons: bool,
    },
    /// Run a script of expressions, one per line
    Run { file: std::path::PathBuf },
}
