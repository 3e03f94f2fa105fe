//! Command-line interface for Punycode encoding/decoding.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// punycode - Convert domain names and labels to and from Punycode
#[derive(Parser, Debug)]
#[command(name = "punycode")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    punycode encode bücher.com\n  \
    punycode decode xn--bcher-kva.com\n  \
    punycode encode --label bücher\n  \
    echo 'mañana.es' | punycode encode")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode Unicode input into its ASCII form
    Encode(Inputs),
    /// Decode ASCII input back to Unicode
    Decode(Inputs),
}

#[derive(clap::Args, Debug)]
struct Inputs {
    /// Treat each input as a bare label (no xn-- prefix, no dot splitting)
    #[arg(long)]
    label: bool,

    /// Strings to convert; read from stdin, one per line, when omitted
    values: Vec<String>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn convert(command: &Command, input: &str) -> punycode::Result<String> {
    match command {
        Command::Encode(Inputs { label: true, .. }) => punycode::encode_label(input),
        Command::Encode(_) => punycode::encode_domain(input),
        Command::Decode(Inputs { label: true, .. }) => punycode::decode_label(input),
        Command::Decode(_) => punycode::decode_domain(input),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let inputs = match &cli.command {
        Command::Encode(inputs) | Command::Decode(inputs) => inputs,
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if !inputs.values.is_empty() {
        for value in &inputs.values {
            let converted =
                convert(&cli.command, value).with_context(|| format!("failed on '{}'", value))?;
            writeln!(stdout, "{}", converted)?;
        }
        return Ok(());
    }

    tracing::debug!("reading inputs from stdin");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("error reading input")?;
        let converted =
            convert(&cli.command, &line).with_context(|| format!("failed on '{}'", line))?;
        writeln!(stdout, "{}", converted)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
