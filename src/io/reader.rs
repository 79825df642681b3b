use super::error::InputError;
use crate::graph::Graph;
use log::debug;
use std::io::{BufRead, Write};

const ENTRY_BANNER: &str =
    "Enter the graph edges in the format 'u v'. Press Enter twice to finish.";
const EDGE_PROMPT: &str = "Enter an edge: ";
const CONFIRM_PROMPT: &str = "Press Enter again to finish or enter a new edge: ";

/// Parses one `u v` line into its two labels.
///
/// # Errors
///
/// Returns `Malformed` unless the line holds exactly two tokens.
pub fn parse_edge(line: &str, line_no: usize) -> Result<(&str, &str), InputError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(u), Some(v), None) => Ok((u, v)),
        _ => Err(InputError::Malformed {
            line: line_no,
            found: line.split_whitespace().count(),
        }),
    }
}

/// Reads edges line by line until two consecutive empty lines or end of input.
///
/// Bad lines are reported on `output` and skipped. With prompts enabled the
/// reader behaves like an interactive console session.
///
/// # Example
///
/// ```
/// use interval_check::io::EdgeReader;
///
/// let input = "a b\nb c\n\n\n";
/// let graph = EdgeReader::new(input.as_bytes(), std::io::sink())
///     .without_prompts()
///     .read_graph()
///     .unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug)]
pub struct EdgeReader<R, W> {
    input: R,
    output: W,
    prompts: bool,
    line_no: usize,
    rejected: usize,
}

impl<R: BufRead, W: Write> EdgeReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompts: true,
            line_no: 0,
            rejected: 0,
        }
    }

    /// Disables prompts, for reading from files and pipes.
    pub fn without_prompts(mut self) -> Self {
        self.prompts = false;
        self
    }

    /// Number of lines rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Consumes input and returns the graph it describes.
    ///
    /// # Errors
    ///
    /// Only I/O failures are returned. Format errors and self-loops are
    /// reported on the output and entry continues.
    pub fn read_graph(&mut self) -> Result<Graph, InputError> {
        let mut graph = Graph::new();
        if self.prompts {
            writeln!(self.output, "{}", ENTRY_BANNER)?;
        }

        loop {
            let Some(mut line) = self.next_line(EDGE_PROMPT)? else {
                break;
            };
            if line.is_empty() {
                match self.next_line(CONFIRM_PROMPT)? {
                    Some(again) if !again.is_empty() => line = again,
                    _ => break,
                }
            }

            if let Err(e) = self.add_line(&mut graph, &line) {
                if !e.is_recoverable() {
                    return Err(e);
                }
                self.rejected += 1;
                debug!("skipping line {}: {}", self.line_no, e);
                writeln!(self.output, "{}", e)?;
            }
        }

        debug!("read {} ({} line(s) rejected)", graph, self.rejected);
        Ok(graph)
    }

    fn add_line(&self, graph: &mut Graph, line: &str) -> Result<(), InputError> {
        let (u, v) = parse_edge(line, self.line_no)?;
        graph
            .add_edge(u, v)
            .map(|_| ())
            .map_err(|source| InputError::Graph {
                line: self.line_no,
                source,
            })
    }

    /// Returns the next trimmed line, or `None` at end of input.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        if self.prompts {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(buf.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> (Graph, String, usize) {
        let mut out = Vec::new();
        let mut reader = EdgeReader::new(input.as_bytes(), &mut out);
        let graph = reader.read_graph().unwrap();
        let rejected = reader.rejected();
        (graph, String::from_utf8(out).unwrap(), rejected)
    }

    #[test]
    fn parse_edge_requires_two_tokens() {
        assert_eq!(parse_edge("a b", 1).unwrap(), ("a", "b"));
        assert_eq!(parse_edge("  a \t b ", 1).unwrap(), ("a", "b"));
        assert!(matches!(
            parse_edge("a", 4),
            Err(InputError::Malformed { line: 4, found: 1 })
        ));
        assert!(matches!(
            parse_edge("a b c", 5),
            Err(InputError::Malformed { line: 5, found: 3 })
        ));
    }

    #[test]
    fn two_empty_lines_finish_entry() {
        let (graph, _, _) = read("a b\nb c\n\n\nc d\n");
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.contains("d"));
    }

    #[test]
    fn single_empty_line_asks_for_confirmation() {
        let (graph, out, _) = read("a b\n\nb c\n\n\n");
        assert_eq!(graph.edge_count(), 2);
        assert!(out.contains(CONFIRM_PROMPT));
    }

    #[test]
    fn end_of_input_finishes_entry() {
        let (graph, _, _) = read("a b\nb c");
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn malformed_lines_are_reported_and_skipped() {
        let (graph, out, rejected) = read("a b\nlonely\nx y z\nb c\n\n\n");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(rejected, 2);
        assert!(out.contains("Invalid format on line 2"));
        assert!(out.contains("Invalid format on line 3"));
    }

    #[test]
    fn each_bad_line_is_reported_once() {
        let (_, out, rejected) = read("a\nb c\n\n\n");
        assert_eq!(rejected, 1);
        assert_eq!(out.matches("Invalid format on line 1").count(), 1);
        assert_eq!(out.lines().filter(|l| l.contains("Invalid format")).count(), 1);
    }

    #[test]
    fn self_loop_is_reported_and_skipped() {
        let (graph, out, rejected) = read("a a\na b\n\n\n");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(rejected, 1);
        assert!(out.contains("Self-loops are not allowed"));
    }

    #[test]
    fn prompts_can_be_disabled() {
        let mut out = Vec::new();
        let graph = EdgeReader::new("a b\n".as_bytes(), &mut out)
            .without_prompts()
            .read_graph()
            .unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn prompts_are_written_before_each_line() {
        let (_, out, _) = read("a b\n\n\n");
        assert!(out.starts_with(ENTRY_BANNER));
        assert_eq!(out.matches(EDGE_PROMPT).count(), 2);
    }
}
