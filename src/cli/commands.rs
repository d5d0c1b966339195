//! CLI command implementations.

use std::path::Path;

use crate::types::{GraphError, GraphResult};

use super::input::load_graph;

/// Display vertex/link counts of an adjacency document.
pub fn cmd_info(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, directed)?;
    let sinks = graph
        .vertices()
        .iter()
        .filter(|v| v.degree() == 0)
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.len(),
            "links": graph.link_count(),
            "directed": graph.is_directed(),
            "sinks": sinks,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.len());
        println!("Links: {}", graph.link_count());
        println!("Directed: {}", graph.is_directed());
        println!("Sinks: {}", sinks);
    }
    Ok(())
}

/// Run a breadth-first search and print the visit events in order.
///
/// With `verbose`, the final color, distance and predecessor of every vertex
/// follow the events.
pub fn cmd_bfs(path: &Path, source: &str, json: bool, verbose: bool) -> GraphResult<()> {
    let graph = load_graph(path, false)?;
    let source = source.to_string();

    if json {
        let traversal = graph.traverse(&source)?;
        let unreached: Vec<&String> = graph.keys().filter(|k| !traversal.is_visited(k)).collect();
        let mut out = serde_json::json!({
            "source": source,
            "visited": traversal.events(),
            "unreached": unreached,
        });
        if verbose {
            let states: Vec<serde_json::Value> = graph
                .keys()
                .map(|k| {
                    serde_json::json!({
                        "vertex": k,
                        "color": traversal.color(k),
                        "distance": traversal.distance(k),
                        "predecessor": traversal.predecessor(k),
                    })
                })
                .collect();
            out["states"] = serde_json::Value::Array(states);
        }
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("Starting BFS at vertex {}", source);
        let traversal = graph.traverse_with(&source, |event| println!("{}", event))?;
        println!(
            "Visited {} of {} vertices",
            traversal.visited_count(),
            graph.len()
        );
        if verbose {
            for key in graph.keys() {
                println!(
                    "  {}: color={}, distance={}, predecessor={}",
                    key,
                    traversal.color(key).map(|c| c.name()).unwrap_or("-"),
                    traversal.distance(key).unwrap_or_default(),
                    traversal.predecessor(key).map(String::as_str).unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

/// Print the predecessor chain from `source` to `target`.
pub fn cmd_path(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, false)?;
    let target = target.to_string();
    if !graph.contains(&target) {
        return Err(GraphError::UnknownVertex(target));
    }

    let traversal = graph.traverse(&source.to_string())?;
    let route = traversal.path_to(&target);

    if json {
        let out = serde_json::json!({
            "source": source,
            "target": target,
            "reachable": route.is_some(),
            "distance": traversal.distance(&target),
            "path": route,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        match route {
            Some(keys) => {
                let joined: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
                println!("{}", joined.join(" -> "));
                println!(
                    "Distance: {}",
                    traversal.distance(&target).unwrap_or_default()
                );
            }
            None => println!("{} is not reachable from {}", target, source),
        }
    }
    Ok(())
}

/// List the outgoing neighbors of a vertex in link order.
pub fn cmd_neighbors(path: &Path, key: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, false)?;
    let key = key.to_string();
    let neighbors = graph.neighbors(&key)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&neighbors).unwrap_or_default()
        );
    } else if neighbors.is_empty() {
        println!("{} has no neighbors", key);
    } else {
        for neighbor in neighbors {
            println!("{} -> {}", key, neighbor);
        }
    }
    Ok(())
}
