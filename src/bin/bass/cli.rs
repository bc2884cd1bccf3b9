//! Command-line flags.
//!
//! Flags use the single-dash long form (`-freq 110`); `--freq 110` and
//! `-freq=110` are accepted as well.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};

use bass::config::{DEFAULT_DURATION, DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE};

use crate::duration::parse_duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_OUTPUT: &str = "bass_output.wav";

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Version,
    Help,
    Render(Options),
}

/// Render options, defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub sample_rate: u32,
    pub duration: Duration,
    pub frequency: f64,
    pub output: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION,
            frequency: DEFAULT_FREQUENCY,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

pub fn usage() -> String {
    format!(
        "Usage of bass:\n\
         \x20 -duration duration\n\
         \x20       Duration of the audio (e.g., 10s, 5m) (default 10s)\n\
         \x20 -freq float\n\
         \x20       Base frequency for the bass sound (in Hz) (default {DEFAULT_FREQUENCY})\n\
         \x20 -help\n\
         \x20       Show help information\n\
         \x20 -output path\n\
         \x20       Output WAV file (default {DEFAULT_OUTPUT})\n\
         \x20 -samplerate int\n\
         \x20       Sample rate (in Hz) (default {DEFAULT_SAMPLE_RATE})\n\
         \x20 -version\n\
         \x20       Show version information\n"
    )
}

/// Parses the arguments after the program name.
///
/// `-version` takes precedence over `-help`, which takes precedence over
/// rendering, regardless of their position.
pub fn parse<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut show_version = false;
    let mut show_help = false;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        let Some(flag) = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .filter(|f| !f.is_empty())
        else {
            bail!("unexpected argument \"{arg}\"");
        };

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        let mut value = |name: &str| -> Result<String> {
            match inline_value.clone() {
                Some(v) => Ok(v),
                None => args
                    .next()
                    .ok_or_else(|| anyhow!("flag needs an argument: -{name}")),
            }
        };

        match name {
            "version" => show_version = switch(name, inline_value.as_deref())?,
            "help" | "h" => show_help = switch(name, inline_value.as_deref())?,
            "samplerate" => {
                let raw = value(name)?;
                options.sample_rate = raw
                    .parse()
                    .with_context(|| format!("invalid value \"{raw}\" for flag -samplerate"))?;
            }
            "duration" => {
                let raw = value(name)?;
                options.duration = parse_duration(&raw)
                    .with_context(|| format!("invalid value \"{raw}\" for flag -duration"))?;
            }
            "freq" => {
                let raw = value(name)?;
                options.frequency = raw
                    .parse()
                    .with_context(|| format!("invalid value \"{raw}\" for flag -freq"))?;
            }
            "output" | "o" => options.output = PathBuf::from(value(name)?),
            other => bail!("flag provided but not defined: -{other}"),
        }
    }

    Ok(if show_version {
        Command::Version
    } else if show_help {
        Command::Help
    } else {
        Command::Render(options)
    })
}

/// A boolean flag is set by its bare name; `-flag=false` clears it.
fn switch(name: &str, inline_value: Option<&str>) -> Result<bool> {
    match inline_value {
        None => Ok(true),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(raw) => bail!("invalid boolean value \"{raw}\" for -{name}"),
    }
}
