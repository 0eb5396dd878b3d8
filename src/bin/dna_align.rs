use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dna_align::{lcs_align, selfcheck, AnchorAligner, BatchAligner};
use log::{debug, error, info};

#[derive(Parser)]
#[command(name = "dna-align")]
#[command(about = "Align short nucleotide sequences against a reference")]
#[command(version)]
#[command(long_about = "
Aligns short nucleotide sequences (at most 150 bases) against a reference.

Examples:
  dna-align anchor reads.txt        first line is the standard, the rest are aligned to it
  cat reads.txt | dna-align anchor
  dna-align lcs GATCACTAGCAGCAGT GACTAGGAGTACACCC
  dna-align test
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Number of threads used for batch alignment
    #[arg(short, long, global = true)]
    threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pad each query with '-' so its longest match lines up with the standard
    Anchor {
        /// Input files, read in order ('-' or nothing reads stdin)
        files: Vec<PathBuf>,
    },

    /// Print the LCS alignment of two sequences (gaps shown as '_')
    Lcs {
        a: String,
        b: String,
    },

    /// Run the built-in example checks
    Test,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Some(threads) = cli.threads {
        configure_threads(threads)?;
    }

    match cli.command {
        Commands::Anchor { files } => cmd_anchor(&files),
        Commands::Lcs { a, b } => cmd_lcs(&a, &b),
        Commands::Test => cmd_test(),
    }
}

#[cfg(feature = "parallel")]
fn configure_threads(threads: usize) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to set thread count")
}

#[cfg(not(feature = "parallel"))]
fn configure_threads(threads: usize) -> Result<()> {
    log::warn!("--threads {threads} ignored: built without the `parallel` feature");
    Ok(())
}

/// A line of input with its origin, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InputLine {
    source: String,
    number: usize,
    text: String,
}

/// Where one command-line input argument is read from.
#[derive(Debug, PartialEq, Eq)]
enum InputSource<'a> {
    Stdin,
    File(&'a Path),
}

impl<'a> InputSource<'a> {
    fn from_arg(path: &'a Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }
}

/// Append every line of `reader` to `lines`, trailing whitespace removed.
fn read_source<R: BufRead>(source: &str, reader: R, lines: &mut Vec<InputLine>) -> Result<()> {
    let before = lines.len();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {source}"))?;
        lines.push(InputLine {
            source: source.to_string(),
            number: idx + 1,
            text: line.trim_end().to_string(),
        });
    }
    debug!("read {} lines from {}", lines.len() - before, source);
    Ok(())
}

fn read_lines(files: &[PathBuf]) -> Result<Vec<InputLine>> {
    let stdin_only = [PathBuf::from("-")];
    let files = if files.is_empty() { &stdin_only[..] } else { files };

    let mut lines = Vec::new();
    for path in files {
        match InputSource::from_arg(path) {
            InputSource::Stdin => read_source("<stdin>", io::stdin().lock(), &mut lines)?,
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                let source = path.display().to_string();
                read_source(&source, BufReader::new(file), &mut lines)?;
            }
        }
    }
    Ok(lines)
}

/// Printed lines and per-query failures of one `anchor` run.
#[derive(Debug, Default)]
struct AnchorRun {
    output: Vec<Vec<u8>>,
    failures: Vec<String>,
}

/// Turn input lines into output lines.
///
/// Blank lines before the standard are echoed, the standard is echoed, and
/// each later line is replaced by its alignment. A query that cannot be
/// aligned is recorded in `failures` and produces no output line.
fn run_anchor(lines: &[InputLine]) -> Result<AnchorRun> {
    let mut run = AnchorRun::default();
    let leading = lines.iter().take_while(|l| l.text.is_empty()).count();
    run.output.extend(std::iter::repeat(Vec::new()).take(leading));

    let Some((standard, queries)) = lines[leading..].split_first() else {
        info!("no input sequences");
        return Ok(run);
    };

    let batch = BatchAligner::new(AnchorAligner, standard.text.clone().into_bytes())
        .with_context(|| format!("Invalid standard at {}:{}", standard.source, standard.number))?;
    info!(
        "aligning {} queries against a {}-base standard",
        queries.len(),
        standard.text.len()
    );
    run.output.push(standard.text.clone().into_bytes());

    let texts: Vec<&[u8]> = queries.iter().map(|q| q.text.as_bytes()).collect();
    for (query, result) in queries.iter().zip(batch.align_all(&texts)) {
        match result {
            Ok(aligned) => run.output.push(aligned),
            Err(err) => run
                .failures
                .push(format!("{}:{}: {err}", query.source, query.number)),
        }
    }
    Ok(run)
}

fn cmd_anchor(files: &[PathBuf]) -> Result<ExitCode> {
    let lines = read_lines(files)?;
    let run = run_anchor(&lines)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &run.output {
        out.write_all(line)?;
        writeln!(out)?;
    }
    out.flush()?;

    if !run.failures.is_empty() {
        for failure in &run.failures {
            error!("{failure}");
        }
        error!("{} queries could not be aligned", run.failures.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_lcs(a: &str, b: &str) -> Result<ExitCode> {
    let aln = lcs_align(a.as_bytes(), b.as_bytes()).context("LCS alignment failed")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&aln.aligned_a)?;
    writeln!(out)?;
    out.write_all(&aln.aligned_b)?;
    writeln!(out)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_test() -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_err: Option<io::Error> = None;
    let report = selfcheck::run_with(|_| {
        if write_err.is_none() {
            write_err = out.write_all(b".").err();
        }
    });
    if let Some(err) = write_err {
        return Err(anyhow::Error::new(err).context("Failed to write self-check progress"));
    }
    writeln!(out)?;

    if report.is_ok() {
        writeln!(out, "ok")?;
        return Ok(ExitCode::SUCCESS);
    }
    for failure in &report.failures {
        error!("{failure}");
    }
    writeln!(out, "{} of {} checks failed", report.failures.len(), report.total())?;
    Ok(ExitCode::FAILURE)
}
