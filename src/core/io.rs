/*!
# Graph File I/O

Reads and writes the two-line-header text format described in the crate's external interfaces:
a delay line, followed by edge records. Grounded on the reference crate's own
`core::io::read_edge_list` / `write_edge_list` (buffered line-oriented reads, parse errors
surfaced through the crate's unified error type) but adapted to this format's specific header
shape rather than a per-line edge-list format.
*/

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::core::circuit::{CircuitGraph, SOURCE};
use crate::core::error::RetimingError;

/// Parsed contents of a graph file: delays plus the raw edge records needed to build a
/// [`CircuitGraph`] once `control_steps` is known.
pub struct ParsedGraph {
    pub delays: Vec<i64>,
    edges: Vec<(usize, usize, Option<i64>)>,
}

impl ParsedGraph {
    /// Builds a [`CircuitGraph`] from the parsed records, overriding the weight of every
    /// SOURCE-outgoing edge with `control_steps` and defaulting unweighted edges to `0`.
    pub fn into_circuit(self, control_steps: i64) -> CircuitGraph {
        let mut graph = CircuitGraph::new(&self.delays);
        for (tail, head, weight) in self.edges {
            let w = if tail == SOURCE {
                control_steps
            } else {
                weight.unwrap_or(0)
            };
            graph.add_edge(tail, head, w);
        }
        graph
    }
}

fn parse_ints(line: &str) -> Result<Vec<i64>, RetimingError> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .map_err(|_| RetimingError::ParseError(format!("expected an integer, found {tok:?}")))
        })
        .collect()
}

/// Reads a graph file: line 1 holds the delay vector, subsequent lines hold edges (`tail head`
/// or `tail head weight`).
///
/// # Errors
///
/// [`RetimingError::FileNotReadable`] if `path` cannot be opened; [`RetimingError::ParseError`]
/// if any line fails to tokenize into the expected integers.
pub fn read_graph(path: &Path) -> Result<ParsedGraph, RetimingError> {
    let file =
        File::open(path).map_err(|_| RetimingError::FileNotReadable(path.display().to_string()))?;
    let mut lines = BufReader::new(file).lines();

    let first_line = lines
        .next()
        .ok_or_else(|| RetimingError::ParseError("missing delay line".to_string()))??;
    let delays = parse_ints(&first_line)?;

    let mut edges = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let values = parse_ints(&line)?;
        match values.as_slice() {
            [tail, head] => edges.push((*tail as usize, *head as usize, None)),
            [tail, head, weight] => edges.push((*tail as usize, *head as usize, Some(*weight))),
            _ => {
                return Err(RetimingError::ParseError(format!(
                    "expected 2 or 3 integers on edge line, found {}",
                    values.len()
                )))
            }
        }
    }

    Ok(ParsedGraph { delays, edges })
}

/// Writes `circuit` in the same two-line-header format, always with explicit edge weights.
///
/// # Errors
///
/// Propagates any [`std::io::Error`] encountered while creating or writing the file.
pub fn write_graph(path: &Path, circuit: &CircuitGraph, delays: &[i64]) -> Result<(), RetimingError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let delay_line = delays
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "{delay_line}")?;

    let mut edges: Vec<_> = circuit.edges().collect();
    edges.sort();
    for (tail, head, weight) in edges {
        writeln!(writer, "{tail} {head} {weight}")?;
    }

    Ok(())
}
