use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dialoguer::Input;
use tracing::error;
use tracing_subscriber::EnvFilter;

use propscrub::{WalkConfig, Walker};

#[derive(Debug, Parser)]
#[command(
    name = "propscrub",
    version,
    about = "Remove blood props from variant XML files and prune what is left empty"
)]
struct Args {
    /// Folder to scan for .xml files (prompted for when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Folder that receives the scrubbed copies (prompted for when omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input = match args.input {
        Some(path) => path,
        None => prompt_path("Enter the input folder path")?,
    };
    let output = match args.output {
        Some(path) => path,
        None => prompt_path("Enter the output folder path")?,
    };

    Walker::new(WalkConfig::new(&input, &output))
        .run()
        .with_context(|| format!("failed to scrub {}", input.display()))?;
    Ok(())
}

/// Ask for a path on the terminal, or read one line when stdin is piped.
fn prompt_path(prompt: &str) -> Result<PathBuf> {
    let answer = if io::stdin().is_terminal() {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("failed to read answer to '{prompt}'"))?
    } else {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read stdin")?;
        line
    };

    let answer = answer.trim();
    if answer.is_empty() {
        bail!("no path given for '{prompt}'");
    }
    Ok(PathBuf::from(answer))
}
