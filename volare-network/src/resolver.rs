use std::collections::HashSet;

use crate::graph::LegGraph;

/// Resolve an ordered sequence of leg keys connecting `from` to `to`, or an
/// empty vec when the destination is unreachable.
///
/// Depth-first search over outgoing legs, visited in lexicographic key
/// order: a leg landing on the target is taken the moment it is reached,
/// otherwise the first continuation that reaches the target wins. The
/// search does not look for a shortest path, only a deterministic one:
/// the ordered iteration makes the choice among alternatives stable.
/// Airports already seen in the current resolution are dead ends, so the
/// search terminates on cyclic graphs.
pub fn resolve_path(graph: &LegGraph, from: &str, to: &str) -> Vec<String> {
    let mut visited = HashSet::new();
    visited.insert(from.to_string());
    search(graph, from, to, &mut visited).unwrap_or_default()
}

fn search(
    graph: &LegGraph,
    current: &str,
    target: &str,
    visited: &mut HashSet<String>,
) -> Option<Vec<String>> {
    for leg in graph.outgoing(current) {
        if leg.destination() == target {
            return Some(vec![leg.key()]);
        }
        if visited.contains(leg.destination()) {
            continue;
        }
        visited.insert(leg.destination().to_string());
        if let Some(mut rest) = search(graph, leg.destination(), target, visited) {
            rest.insert(0, leg.key());
            return Some(rest);
        }
    }
    None
}
