//! CLI command implementations.
//!
//! Each `render_*` function loads the file, runs one algorithm and returns
//! the output text; the matching `cmd_*` prints it.

use std::path::Path;

use crate::format::EdgeListReader;
use crate::graph::{Graph, TraversalOrder};
use crate::types::{GraphError, GraphResult, NodeId, Weight};

fn load(path: &Path, directed: bool) -> GraphResult<Graph> {
    EdgeListReader::new().directed(directed).read_from_file(path)
}

fn names(graph: &Graph, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| graph.name_of(id))
        .map(str::to_string)
        .collect()
}

fn to_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Summary of a graph file.
pub fn render_info(path: &Path, directed: bool, json: bool) -> GraphResult<String> {
    let graph = load(path, directed)?;
    let isolated = graph.all_nodes().iter().filter(|n| n.degree() == 0).count();

    if json {
        return Ok(to_json(&serde_json::json!({
            "file": path.display().to_string(),
            "directed": directed,
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "isolated_nodes": isolated,
            "total_weight": graph.total_weight(),
        })));
    }

    let mut out = String::new();
    out.push_str(&format!("File: {}\n", path.display()));
    out.push_str(&format!("Directed: {}\n", directed));
    out.push_str(&format!("Nodes: {}\n", graph.node_count()));
    out.push_str(&format!("Edges: {}\n", graph.edge_count()));
    out.push_str(&format!("Isolated nodes: {}\n", isolated));
    out.push_str(&format!("Total weight: {}", graph.total_weight()));
    Ok(out)
}

/// Visit order of a BFS or DFS.
pub fn render_traverse(
    path: &Path,
    start: &str,
    order: TraversalOrder,
    directed: bool,
    json: bool,
    verbose: bool,
) -> GraphResult<String> {
    let graph = load(path, directed)?;
    let visited = match order {
        TraversalOrder::BreadthFirst => graph.bfs_order(start)?,
        TraversalOrder::DepthFirst => graph.dfs_order(start)?,
    };
    if verbose {
        eprintln!(
            "{:?}: visited {} of {} nodes",
            order,
            visited.len(),
            graph.node_count()
        );
    }

    let visited = names(&graph, &visited);
    if json {
        return Ok(to_json(&serde_json::json!({
            "start": start,
            "order": format!("{:?}", order),
            "visited": visited,
        })));
    }
    Ok(visited.join("\n"))
}

/// Shortest-path costs from `start`, and optionally the path to `to`.
pub fn render_dijkstra(
    path: &Path,
    start: &str,
    to: Option<&str>,
    directed: bool,
    json: bool,
    verbose: bool,
) -> GraphResult<String> {
    let graph = load(path, directed)?;
    let paths = graph.dijkstra(start)?;
    if verbose {
        eprintln!(
            "dijkstra: reached {} of {} nodes",
            paths.len(),
            graph.node_count()
        );
    }

    let route = match to {
        Some(target) => {
            let id = graph
                .node_id(target)
                .ok_or_else(|| GraphError::NodeNotFound(target.to_string()))?;
            paths.path_to(id).map(|ids| (target, paths.cost(id), names(&graph, &ids)))
        }
        None => None,
    };

    if json {
        let mut value = serde_json::json!({
            "start": start,
            "costs": paths.to_named(&graph),
        });
        if let Some(target) = to {
            value["path"] = match &route {
                Some((_, cost, nodes)) => serde_json::json!({
                    "to": target,
                    "cost": cost,
                    "nodes": nodes,
                }),
                None => serde_json::json!({ "to": target, "reachable": false }),
            };
        }
        return Ok(to_json(&value));
    }

    let mut lines: Vec<String> = paths
        .iter()
        .filter_map(|(id, cost)| graph.name_of(id).map(|name| format!("{}\t{}", name, cost)))
        .collect();
    match (to, route) {
        (Some(_), Some((target, Some(cost), nodes))) => {
            lines.push(format!("Path to {} (cost {}): {}", target, cost, nodes.join(" -> ")));
        }
        (Some(target), _) => lines.push(format!("{} is unreachable from {}", target, start)),
        (None, _) => {}
    }
    Ok(lines.join("\n"))
}

/// Minimum spanning forest edges and totals.
pub fn render_mst(path: &Path, directed: bool, json: bool, verbose: bool) -> GraphResult<String> {
    let graph = load(path, directed)?;
    let forest = graph.minimum_spanning_forest();
    if verbose {
        eprintln!(
            "prim-jarnik: {} edges, {} components",
            forest.edges().len(),
            forest.component_count()
        );
    }

    let edge_names: Vec<(String, String, Weight)> = forest
        .edges()
        .iter()
        .filter_map(|e| {
            let source = graph.name_of(e.source)?;
            let target = graph.name_of(e.target)?;
            Some((source.to_string(), target.to_string(), e.weight))
        })
        .collect();

    if json {
        let edges: Vec<serde_json::Value> = edge_names
            .iter()
            .map(|(s, t, w)| serde_json::json!({"source": s, "target": t, "weight": w}))
            .collect();
        return Ok(to_json(&serde_json::json!({
            "edges": edges,
            "components": forest.component_count(),
            "total_weight": forest.total_weight(),
        })));
    }

    let mut lines: Vec<String> = edge_names
        .iter()
        .map(|(s, t, w)| format!("{} {} {}", s, t, w))
        .collect();
    lines.push(format!("Components: {}", forest.component_count()));
    lines.push(format!("Total weight: {}", forest.total_weight()));
    Ok(lines.join("\n"))
}

/// Print a graph file summary.
pub fn cmd_info(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    println!("{}", render_info(path, directed, json)?);
    Ok(())
}

/// Print BFS or DFS visit order.
pub fn cmd_traverse(
    path: &Path,
    start: &str,
    order: TraversalOrder,
    directed: bool,
    json: bool,
    verbose: bool,
) -> GraphResult<()> {
    println!(
        "{}",
        render_traverse(path, start, order, directed, json, verbose)?
    );
    Ok(())
}

/// Print shortest-path costs.
pub fn cmd_dijkstra(
    path: &Path,
    start: &str,
    to: Option<&str>,
    directed: bool,
    json: bool,
    verbose: bool,
) -> GraphResult<()> {
    println!(
        "{}",
        render_dijkstra(path, start, to, directed, json, verbose)?
    );
    Ok(())
}

/// Print the minimum spanning forest.
pub fn cmd_mst(path: &Path, directed: bool, json: bool, verbose: bool) -> GraphResult<()> {
    println!("{}", render_mst(path, directed, json, verbose)?);
    Ok(())
}
