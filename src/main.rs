//! interval-check CLI entrypoint.

use clap::{Parser, ValueEnum};
use interval_check::io::{to_dot, EdgeReader};
use interval_check::pipeline::{self, GraphSource, PipelineError, TextSink, VerdictSink};
use interval_check::recognition::{CycleCheck, Recognizer, RecognizerConfig};
use interval_check::Graph;
use log::LevelFilter;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CycleCheckArg {
    /// Exact chordless-cycle search
    Induced,
    /// Fundamental cycle basis heuristic
    LegacyBasis,
}

impl From<CycleCheckArg> for CycleCheck {
    fn from(arg: CycleCheckArg) -> Self {
        match arg {
            CycleCheckArg::Induced => CycleCheck::Induced,
            CycleCheckArg::LegacyBasis => CycleCheck::LegacyBasis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

/// Decide whether an undirected graph is an interval graph.
///
/// Edges are read as `u v` lines, from the console or from a file. Two
/// consecutive empty lines end the input.
#[derive(Debug, Parser)]
#[command(name = "interval-check", version, about)]
struct Cli {
    /// Read edges from a file instead of the console
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Long-cycle detection strategy
    #[arg(long, value_enum, default_value = "induced")]
    cycle_check: CycleCheckArg,

    /// Verdict output format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Write a Graphviz drawing of the graph to this file
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Do not list the edges before the verdict
    #[arg(long)]
    no_list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write drawing to {}: {source}", path.display())]
    Dot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg_attr(feature = "serde", allow(dead_code))]
    #[error("JSON output requires the `serde` feature")]
    JsonUnavailable,
}

/// Wraps a source so the drawing is written as soon as the graph exists.
struct Drawn {
    inner: Box<dyn GraphSource>,
    dot: Option<PathBuf>,
    written: Result<(), CliError>,
}

impl GraphSource for Drawn {
    fn build(&mut self) -> Result<Graph, interval_check::io::InputError> {
        let graph = self.inner.build()?;
        if let Some(path) = &self.dot {
            self.written = fs::write(path, to_dot(&graph)).map_err(|source| CliError::Dot {
                path: path.clone(),
                source,
            });
        }
        Ok(graph)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn sink_for(cli: &Cli) -> Result<Box<dyn VerdictSink>, CliError> {
    match cli.format {
        FormatArg::Text => Ok(Box::new(TextSink::new(io::stdout()).list_edges(!cli.no_list))),
        #[cfg(feature = "serde")]
        FormatArg::Json => Ok(Box::new(pipeline::JsonSink::new(io::stdout()))),
        #[cfg(not(feature = "serde"))]
        FormatArg::Json => Err(CliError::JsonUnavailable),
    }
}

fn execute(cli: &Cli) -> Result<bool, CliError> {
    let recognizer = Recognizer::new(RecognizerConfig {
        cycle_check: cli.cycle_check.into(),
    });
    let mut sink = sink_for(cli)?;

    let inner: Box<dyn GraphSource> = match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            Box::new(EdgeReader::new(BufReader::new(file), io::stderr()).without_prompts())
        }
        None => Box::new(EdgeReader::new(io::stdin().lock(), io::stdout())),
    };
    let mut source = Drawn {
        inner,
        dot: cli.dot.clone(),
        written: Ok(()),
    };

    let recognition = pipeline::run(&mut source, &recognizer, sink.as_mut())?;
    source.written?;
    Ok(recognition.verdict.is_interval())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
