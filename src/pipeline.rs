//! `build -> decide -> render`, with the outer steps injected.

use crate::graph::Graph;
use crate::io::{write_edges, EdgeReader, InputError};
use crate::recognition::{Recognition, Recognizer};
use log::info;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Supplies the graph to decide.
pub trait GraphSource {
    fn build(&mut self) -> Result<Graph, InputError>;
}

/// Presents a finished recognition.
pub trait VerdictSink {
    fn render(&mut self, graph: &Graph, recognition: &Recognition) -> io::Result<()>;
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to build graph: {0}")]
    Input(#[from] InputError),

    #[error("Failed to render verdict: {0}")]
    Render(#[source] io::Error),
}

impl<R: BufRead, W: Write> GraphSource for EdgeReader<R, W> {
    fn build(&mut self) -> Result<Graph, InputError> {
        self.read_graph()
    }
}

/// A ready-made graph is its own source.
impl GraphSource for Graph {
    fn build(&mut self) -> Result<Graph, InputError> {
        Ok(self.clone())
    }
}

/// Human-readable output: optional edge listing, then the verdict message.
#[derive(Debug)]
pub struct TextSink<W> {
    out: W,
    list_edges: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            list_edges: true,
        }
    }

    pub fn list_edges(mut self, enabled: bool) -> Self {
        self.list_edges = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> VerdictSink for TextSink<W> {
    fn render(&mut self, graph: &Graph, recognition: &Recognition) -> io::Result<()> {
        if self.list_edges {
            write_edges(graph, &mut self.out)?;
        }
        writeln!(self.out, "{}", recognition.verdict)
    }
}

/// Machine-readable output: the whole [`Recognition`] as JSON.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub struct JsonSink<W> {
    out: W,
}

#[cfg(feature = "serde")]
impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

#[cfg(feature = "serde")]
impl<W: Write> VerdictSink for JsonSink<W> {
    fn render(&mut self, _graph: &Graph, recognition: &Recognition) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, recognition)?;
        writeln!(self.out)
    }
}

/// Builds a graph, decides it and renders the result.
///
/// # Errors
///
/// Returns `Input` if the source fails and `Render` if the sink does.
pub fn run<S, K>(
    source: &mut S,
    recognizer: &Recognizer,
    sink: &mut K,
) -> Result<Recognition, PipelineError>
where
    S: GraphSource + ?Sized,
    K: VerdictSink + ?Sized,
{
    let graph = source.build()?;
    info!("built {}", graph);

    let recognition = recognizer.recognize(&graph);
    info!("verdict: {}", recognition.verdict);

    sink.render(&graph, &recognition)
        .map_err(PipelineError::Render)?;
    Ok(recognition)
}
