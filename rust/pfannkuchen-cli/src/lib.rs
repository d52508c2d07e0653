//! Command-line driver for the fannkuch kernel.
//!
//! Parses the permutation size, validates it, runs the serial generator
//! and renders the two-line report.

use std::ffi::OsString;
use std::fmt;
use std::time::Instant;

use clap::Parser as ClapParser;
use pfannkuchen_core::{pfannkuchen, PermSize, Tally};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "PFANNKUCHEN_LOG";

/// Positional arguments only. `run` places an escape in front of the user's
/// arguments, so tokens such as `-x` or `--help` arrive here as values.
#[derive(ClapParser, Debug)]
#[command(
    name = "pfannkuchen",
    about = "Count pancake flips over every permutation of n elements",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Permutation size n (3 to 15)
    #[arg(allow_hyphen_values = true)]
    pub number: Option<OsString>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

impl Cli {
    /// Parse a full argument list, program name first. Every argument after
    /// the program name is taken literally.
    pub fn from_args(args: &[OsString]) -> Result<Self, clap::Error> {
        let (program, user_args) = match args.split_first() {
            Some((program, rest)) => (program.clone(), rest),
            None => (OsString::from("pfannkuchen"), &[][..]),
        };
        let argv = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(user_args.iter().cloned());
        Self::try_parse_from(argv)
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("usage: {program} number")]
    MissingArgument { program: String },
    // The advertised upper bound predates the 16-slot buffers; the check is 15.
    #[error("range: must be 3 <= n <= 12")]
    OutOfRange { n: i64 },
    /// Parser failure; with positional-only parsing this is not expected.
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl DriverError {
    /// Every driver failure exits with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ParsingArgs,
    Validating,
    Initialized,
    Generating,
    Reporting,
    Done,
    Failed,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub size: PermSize,
    pub tally: Tally,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nPfannkuchen({}) = {}",
            self.tally.checksum, self.size, self.tally.max_flips
        )
    }
}

/// Read an integer the way C's `atoi` does: optional leading whitespace,
/// an optional sign, then as many digits as follow. Anything else reads
/// as 0. Overlong inputs saturate.
pub fn parse_number(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Validate a parsed size.
pub fn validate(n: i64) -> Result<PermSize, DriverError> {
    PermSize::new(n).map_err(|_| DriverError::OutOfRange { n })
}

/// Run the driver over a full argument list, program name first.
pub fn run<I, T>(args: I) -> Result<Report, DriverError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pfannkuchen".to_string());

    debug!(stage = ?Stage::ParsingArgs, "driver");
    let cli = Cli::from_args(&args)?;
    let Some(number) = cli.number else {
        debug!(stage = ?Stage::Failed, "missing size argument");
        return Err(DriverError::MissingArgument { program });
    };

    let number = number.to_string_lossy();
    debug!(stage = ?Stage::Validating, raw = %number, "driver");
    let n = parse_number(&number);
    let size = validate(n).inspect_err(|_| {
        debug!(stage = ?Stage::Failed, n, "size out of range");
    })?;

    debug!(stage = ?Stage::Initialized, n = size.get(), "driver");
    let started = Instant::now();
    debug!(stage = ?Stage::Generating, "driver");
    let tally = pfannkuchen(size);
    info!(
        n = size.get(),
        permutations = tally.permutations,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "generation finished"
    );

    debug!(stage = ?Stage::Reporting, "driver");
    Ok(Report { size, tally })
}
