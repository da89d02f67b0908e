//! Type list evaluator CLI entry point.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use salsa::Database;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tylist::{TylistDatabase, Value, evaluate, run_script};
use tylist_core::{Term, render_cons};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::new(&cli.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ok = match cli.command {
        Command::Eval { expr, cons } => eval_expr(&expr, cons),
        Command::Run { file } => run_file(file),
    };
    if !ok {
        std::process::exit(1);
    }
}

fn eval_expr(source: &str, cons: bool) -> bool {
    TylistDatabase::default().attach(|db| {
        let resolution = evaluate(db, source);
        match resolution.value {
            Some(Value::Term(Term::List(list))) if cons => println!("{}", render_cons(db, list)),
            Some(value) => println!("{}", value.render(db)),
            None => {
                for diagnostic in &resolution.diagnostics {
                    eprintln!("{diagnostic}");
                }
                return false;
            }
        }
        true
    })
}

fn run_file(path: std::path::PathBuf) -> bool {
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            return false;
        }
    };

    TylistDatabase::default().attach(|db| {
        tracing::debug!(path = %path.display(), "running script");
        let report = run_script(db, &text);
        println!("{report}");
        report.failures() == 0
    })
}
