use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glob::glob;
use log::info;
use measurepack_core::{
    Conversion, HistoryEntry, HistoryLog, JsonFileHistory, REPORT_VERSION, convert_report,
};
use serde::Serialize;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("MEASUREPACK_BUILD_COMMIT"),
    ", ",
    env!("MEASUREPACK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "measurepack")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode alphabetic measurement strings and sum them into packages.",
    long_about = None,
    after_help = "Examples:\n  measurepack convert dz_a_aazzaaa --stdout\n  measurepack convert abbcc -o result.json --history history.json\n  measurepack batch inputs.txt --stdout --pretty\n  measurepack history history.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a single encoded string into package measurements.
    Convert {
        /// Encoded measurement string (surrounding whitespace is trimmed)
        input: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Convert every non-empty line of a text file.
    #[command(
        after_help = "Examples:\n  measurepack batch inputs.txt -o results.json\n  measurepack batch 'data/*.txt' --stdout"
    )]
    Batch {
        /// Path (or glob matching exactly one file) of a text file, one input per line
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the conversion history stored in a history file.
    History {
        /// History file written by --history
        path: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if any character was skipped
    #[arg(long)]
    strict: bool,

    /// List skipped characters after conversion
    #[arg(long)]
    list_skipped: bool,

    /// Append requests and results to this JSON history file
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,
}

impl OutputArgs {
    /// `--compact` is the default; clap rejects it together with `--pretty`.
    fn pretty_json(&self) -> bool {
        self.pretty && !self.compact
    }
}

/// Output document of the `batch` command.
#[derive(Debug, Serialize)]
struct BatchReport {
    report_version: u32,
    source: String,
    conversions: Vec<Conversion>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.command);

    let result = match cli.command {
        Commands::Convert { input, output } => cmd_convert(&input, &output),
        Commands::Batch { input, output } => cmd_batch(&input, &output),
        Commands::History { path, pretty } => cmd_history(&path, pretty),
    };

    match result {
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

fn init_logging(command: &Commands) {
    let quiet = match command {
        Commands::Convert { output, .. } | Commands::Batch { output, .. } => output.quiet,
        Commands::History { .. } => false,
    };
    let default_level = if quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
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
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_convert(input: &str, output: &OutputArgs) -> Result<(), CliError> {
    let input = input.trim();
    info!("Received conversion request for input: {input}");
    let conversion = convert_report(input);

    let json = serialize_json(&conversion, output.pretty_json())?;
    write_output(&json, output)?;
    if let Some(path) = output.history.as_ref() {
        record_history(path, std::slice::from_ref(&conversion))?;
    }
    finish(std::slice::from_ref(&conversion), output)
}

fn cmd_batch(input: &Path, output: &OutputArgs) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(input)?;
    validate_input_file(&resolved_input)?;
    ensure_report_differs(&resolved_input, output)?;

    let raw = fs::read_to_string(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let conversions: Vec<Conversion> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(convert_report)
        .collect();
    info!(
        "Converted {} inputs from {}",
        conversions.len(),
        resolved_input.display()
    );

    let batch = BatchReport {
        report_version: REPORT_VERSION,
        source: resolved_input.display().to_string(),
        conversions,
    };
    let json = serialize_json(&batch, output.pretty_json())?;
    write_output(&json, output)?;
    if let Some(path) = output.history.as_ref() {
        record_history(path, &batch.conversions)?;
    }
    finish(&batch.conversions, output)
}

fn cmd_history(path: &Path, pretty: bool) -> Result<(), CliError> {
    let history = JsonFileHistory::open(path)
        .with_context(|| format!("Failed to load history: {}", path.display()))
        .map_err(|err| {
            CliError::new(
                format!("{err:#}"),
                Some("pass a history file written by --history".to_string()),
            )
        })?;
    let json = serialize_json(&history.into_document(), pretty)?;
    println!("{}", json);
    Ok(())
}

fn record_history(path: &Path, conversions: &[Conversion]) -> Result<(), CliError> {
    let mut history = JsonFileHistory::open(path)
        .with_context(|| format!("Failed to load history: {}", path.display()))?;
    for conversion in conversions {
        history
            .record(HistoryEntry::now(
                conversion.input.clone(),
                conversion.package_measurements.clone(),
            ))
            .context("Failed to record history entry")?;
    }
    history
        .save()
        .with_context(|| format!("Failed to save history: {}", path.display()))?;
    info!(
        "History entries appended. Total history entries: {}",
        history.entries().len()
    );
    Ok(())
}

fn serialize_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_output(json: &str, output: &OutputArgs) -> Result<(), CliError> {
    if output.stdout {
        println!("{}", json);
        return Ok(());
    }

    let report = output.report.as_ref().ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--report or --stdout".to_string()),
        )
    })?;
    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !output.quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    Ok(())
}

fn finish(conversions: &[Conversion], output: &OutputArgs) -> Result<(), CliError> {
    if output.list_skipped && !output.quiet {
        print_skipped(conversions);
    }
    if output.strict && has_skipped(conversions) {
        return Err(CliError::new(
            "invalid characters skipped",
            Some("use --list-skipped to inspect".to_string()),
        ));
    }
    Ok(())
}

fn has_skipped(conversions: &[Conversion]) -> bool {
    conversions
        .iter()
        .any(|conversion| !conversion.skipped.is_empty())
}

fn print_skipped(conversions: &[Conversion]) {
    eprintln!("Skipped characters:");
    for conversion in conversions {
        for skipped in &conversion.skipped {
            eprintln!(
                "  {:?} at {} in {:?}",
                skipped.ch, skipped.position, conversion.input
            );
        }
    }
}

fn ensure_report_differs(input: &Path, output: &OutputArgs) -> Result<(), CliError> {
    let Some(report_path) = output.report.as_ref() else {
        return Ok(());
    };
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let report_abs = report_path
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose()
        .ok()
        .flatten();
    if let (Some(report_dir), Some(file_name)) = (report_abs, report_path.file_name()) {
        if report_dir.join(file_name) == input_abs {
            return Err(CliError::new(
                format!(
                    "report path must differ from input: {}",
                    report_path.display()
                ),
                Some("choose a different output path".to_string()),
            ));
        }
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a text file with one encoded string per line".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a text file with one encoded string per line".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single input file, or run once per file".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>();
        message.push_str("; matches: ");
        message.push_str(&listed.join(", "));
        if matches.len() > 3 {
            message.push_str(", ...");
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
