//! Interactive graph entry from a prompt loop.

use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind, Write};

use crate::graph::Graph;
use crate::types::{is_valid_vertex_name, GraphError, GraphResult};

/// Whitespace-separated tokens pulled from a line reader.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> GraphResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token; running out of input is an error.
    fn require_token(&mut self) -> GraphResult<String> {
        self.next_token()?.ok_or_else(|| {
            GraphError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input ended before the graph was complete",
            ))
        })
    }
}

/// Build a graph by prompting on `output` and reading answers from `input`.
///
/// Asks for the direction and the vertex count, labels the vertices `A`,
/// `B`, ... and then reads source/destination pairs. Anything other than a
/// single uppercase letter, or the end of input, ends edge entry. A pair
/// naming the same vertex twice is skipped.
pub fn read_interactive<R: BufRead, W: Write>(input: R, output: &mut W) -> GraphResult<Graph> {
    let mut tokens = Tokens::new(input);
    let mut graph = Graph::new();

    loop {
        write!(output, "Please type 'U' for undirected or 'D' for directed graph. ")?;
        output.flush()?;
        match tokens.require_token()?.to_ascii_uppercase().as_str() {
            "D" => {
                graph.set_directed();
                break;
            }
            "U" => {
                graph.set_undirected();
                break;
            }
            _ => continue,
        }
    }

    loop {
        writeln!(output, "Please enter the number of vertices")?;
        let token = tokens.require_token()?;
        let count: usize = match token.parse() {
            Ok(count) => count,
            Err(_) => {
                writeln!(output, "Not a vertex count: {}", token)?;
                continue;
            }
        };
        match graph.init(count) {
            Ok(()) => break,
            Err(e @ GraphError::NamingCapacityExceeded { .. }) => {
                writeln!(output, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(output, "The following vertex names have been generated:")?;
    for vertex in graph.vertices() {
        writeln!(output, "{}", vertex.name)?;
    }
    writeln!(output)?;

    writeln!(
        output,
        "Set the edges for the vertices. Acceptable input is uppercase letters, \
         anything else will end the input process."
    )?;
    loop {
        writeln!(output, "Please enter the source vertex")?;
        let source = match tokens.next_token()? {
            Some(name) if is_valid_vertex_name(&name) => name,
            _ => break,
        };
        writeln!(output, "Please enter the destination vertex")?;
        let target = match tokens.next_token()? {
            Some(name) if is_valid_vertex_name(&name) => name,
            _ => break,
        };
        if source != target {
            graph.add_edge_by_name(&source, &target)?;
        }
    }

    log::debug!(
        "interactive entry finished: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
