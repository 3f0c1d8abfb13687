//! Command-line front end: loads an edge-list file and prints results.

pub mod commands;
