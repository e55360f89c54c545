use anyhow::Result;
use clap::Parser;
use puteamatai::config::Config;
use puteamatai::{arith, demo, greeting, output};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "puteamatai",
    version,
    about = "Integer arithmetic helpers and a small finance ledger demo"
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Subtract the second integer from the first
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Multiply two integers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Print a greeting
    Greet {
        #[arg(default_value = "PūteaMātai")]
        name: String,
    },

    /// Record the configured demo transactions and print a statement
    Demo {
        /// Path to config file
        #[arg(short, long, default_value = "puteamatai.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("puteamatai=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Add { a, b } => print_binary_op(cli.json, "add", a, b, arith::add(a, b)),
        Command::Subtract { a, b } => {
            print_binary_op(cli.json, "subtract", a, b, arith::subtract(a, b))
        }
        Command::Multiply { a, b } => {
            print_binary_op(cli.json, "multiply", a, b, arith::multiply(a, b))
        }
        Command::Greet { name } => {
            let text = greeting::greet(&name);
            if cli.json {
                println!("{}", json!({ "greeting": text }));
            } else {
                println!("{text}");
            }
            Ok(())
        }
        Command::Demo { config } => run_demo(cli.json, config),
    }
}

fn binary_op_json(op: &str, a: i64, b: i64, result: i64) -> serde_json::Value {
    json!({ "op": op, "a": a, "b": b, "result": result })
}

fn print_binary_op(as_json: bool, op: &str, a: i64, b: i64, result: i64) -> Result<()> {
    if as_json {
        println!("{}", binary_op_json(op, a, b, result));
    } else {
        println!("{result}");
    }
    Ok(())
}

fn run_demo(as_json: bool, config_path: PathBuf) -> Result<()> {
    let cfg = Config::load_or_default(&config_path)?;
    cfg.validate()?;

    let report = demo::run_demo(&cfg.demo)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", output::render_statement(&report)?);
    }
    Ok(())
}
