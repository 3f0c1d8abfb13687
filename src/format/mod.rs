//! Text file I/O for edge-list graphs.

pub mod reader;

pub use reader::EdgeListReader;
