//! Reads edge-list text files into an in-memory graph.
//!
//! One record per line:
//!
//! ```text
//! # comment
//! A B 3        edge A - B with weight 3
//! B,C,2        commas work as separators too
//! D            isolated node
//! ```

use std::io::Read;
use std::path::Path;

use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphError, GraphResult, COMMENT_PREFIX};

/// Reader for edge-list text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListReader {
    directed: bool,
}

impl EdgeListReader {
    /// Create a reader that inserts every edge in both directions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert edges as `source -> target` only.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Read an edge-list file into a Graph.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path)?;
        let graph = self.parse_str(&text)?;
        log::info!(
            "Loaded {}: {} nodes, {} edges",
            path.display(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(&self, reader: &mut impl Read) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse_str(&text)
    }

    /// Parse edge-list text into a Graph.
    pub fn parse_str(&self, text: &str) -> GraphResult<Graph> {
        let mut builder = if self.directed {
            GraphBuilder::directed()
        } else {
            GraphBuilder::new()
        };

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .collect();

            match fields.as_slice() {
                [name] => {
                    builder.node(name);
                }
                [source, target, weight] => {
                    let weight = parse_weight(weight, line_no)?;
                    builder.try_link(source, target, weight)?;
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: format!(
                            "expected 'name' or 'source target weight', got {} fields",
                            fields.len()
                        ),
                    });
                }
            }
        }

        Ok(builder.build())
    }
}

/// Parse a weight field. Integers outside `i64` are still `InvalidWeight`,
/// carried as the saturated bound.
fn parse_weight(field: &str, line: usize) -> GraphResult<i64> {
    if let Ok(weight) = field.parse::<i64>() {
        return Ok(weight);
    }
    let (negative, digits) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let saturated = if negative { i64::MIN } else { i64::MAX };
        return Err(GraphError::InvalidWeight(saturated));
    }
    Err(GraphError::Parse {
        line,
        message: format!("weight '{}' is not an integer", field),
    })
}
