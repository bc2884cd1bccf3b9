//! bass - render a synthesized bass note to a WAV file
//!
//! Run with: cargo run -- -freq 41.2 -duration 4s

mod cli;
mod duration;

use std::process::ExitCode;

use anyhow::{Context, Result};
use log::debug;

use bass::{BassPatch, BassPipeline, SynthParams, WavSink};
use cli::{Command, Options};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprint!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Version => {
            println!("Bass Synth Generator, version {}", cli::VERSION);
            ExitCode::SUCCESS
        }
        Command::Help => {
            print!("{}", cli::usage());
            ExitCode::SUCCESS
        }
        Command::Render(options) => match run(&options) {
            Ok(()) => {
                println!("Successfully generated '{}'", options.output.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(options: &Options) -> Result<()> {
    debug!("options: {options:?}");

    let params = SynthParams::new(options.sample_rate, options.duration, options.frequency)
        .context("invalid render parameters")?;
    let pipeline =
        BassPipeline::new(params, BassPatch::default()).context("invalid bass patch")?;

    let mut sink = WavSink::create(&options.output)
        .with_context(|| format!("error creating wav file {}", options.output.display()))?;
    pipeline
        .render_to(&mut sink)
        .with_context(|| format!("error writing wav file {}", options.output.display()))?;
    Ok(())
}
