use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use glob::{MatchOptions, glob_with};

use dat2inp_core::{Record, decode_dat_file, write_dump, write_inp};

#[derive(Parser, Debug)]
#[command(name = "dat2inp")]
#[command(version)]
#[command(
    about = "Convert gamma spectrometry .DAT exports into .INP analysis input files.",
    long_about = None,
    after_help = "Examples:\n  dat2inp --default-detection-limit-library MDA01.LIB\n  dat2inp --stdout spectra/\n  dat2inp --dump"
)]
struct Cli {
    /// Directory to scan for .DAT files
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Write INP text to stdout instead of .INP files
    #[arg(long)]
    stdout: bool,

    /// Write decoded fields to stdout in a debug friendly format
    #[arg(long, conflicts_with = "stdout")]
    dump: bool,

    /// Write decoded records to stdout as pretty JSON
    #[arg(long, conflicts_with_all = ["stdout", "dump"])]
    json: bool,

    /// Fallback detection limit library for records where the field is empty
    #[arg(long = "default-detection-limit-library", value_name = "FILENAME")]
    default_detection_limit_library: Option<String>,

    /// Suppress per-file progress and the final summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if !cli.dir.is_dir() {
        return Err(CliError::new(
            format!("not a directory: {}", cli.dir.display()),
            Some("pass a directory containing .DAT files".to_string()),
        ));
    }

    let files = find_dat_files(&cli.dir)?;
    if files.is_empty() {
        if !cli.quiet {
            eprintln!("No .DAT files found in {}. Exiting...", cli.dir.display());
        }
        return Ok(());
    }

    let default_lim = cli.default_detection_limit_library.as_deref();
    let mut converted = 0usize;
    let mut failures: Vec<String> = Vec::new();

    for path in &files {
        let record = match decode_dat_file(path, default_lim) {
            Ok(record) => record,
            Err(err) => {
                failures.push(format!("{}: {}", path.display(), err));
                continue;
            }
        };

        if cli.json {
            let json = serde_json::to_string_pretty(&record)
                .context("JSON serialization failed")
                .map_err(CliError::from)?;
            println!("{}", json);
        } else if cli.dump {
            let mut out = io::stdout().lock();
            write_dump(&record, &mut out)
                .context("failed to write to stdout")
                .map_err(CliError::from)?;
        } else if cli.stdout {
            let mut out = io::stdout().lock();
            write_inp(&record, &mut out)
                .context("failed to write to stdout")
                .map_err(CliError::from)?;
        } else {
            write_inp_file(&record, path)?;
        }

        converted += 1;
        if !cli.quiet {
            eprintln!("{} converted successfully", path.display());
        }
    }

    for failure in &failures {
        eprintln!("{}", failure);
    }
    if !cli.quiet {
        eprintln!("Of {} DAT files, {} converted successfully", files.len(), converted);
    }

    if converted == 0 {
        return Err(CliError::new(
            "no DAT files could be converted",
            Some("inspect the per-file errors above".to_string()),
        ));
    }
    Ok(())
}

fn find_dat_files(dir: &PathBuf) -> Result<Vec<PathBuf>, CliError> {
    let pattern = dir.join("*.DAT");
    let pattern = pattern.to_string_lossy();
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let paths = glob_with(&pattern, options).map_err(|err| {
        CliError::new(
            format!("invalid scan pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("failed reading directory {}", dir.display()),
                Some(err.to_string()),
            )
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    // glob order is platform dependent; keep the batch deterministic
    files.sort();
    Ok(files)
}

fn write_inp_file(record: &Record, input: &PathBuf) -> Result<(), CliError> {
    let output = input.with_extension("INP");
    let file = fs::File::create(&output)
        .with_context(|| format!("failed to open file for writing: {}", output.display()))?;
    let mut out = io::BufWriter::new(file);
    write_inp(record, &mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("failed to write: {}", output.display()))
        .map_err(CliError::from)
}
