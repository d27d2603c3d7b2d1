use std::collections::{HashMap, HashSet};

use uuid::Uuid;

/// Returns the path `start -> ... -> target` following directed edges, if
/// `target` is reachable from `start`.
///
/// Iterative depth-first search with an explicit stack, so long dependency
/// chains cannot exhaust the call stack.
pub fn find_cycle_path(
    adjacency: &HashMap<Uuid, Vec<Uuid>>,
    start: Uuid,
    target: Uuid,
) -> Option<Vec<Uuid>> {
    if start == target {
        return Some(vec![start]);
    }

    let mut visited = HashSet::from([start]);
    let mut parent_map: HashMap<Uuid, Uuid> = HashMap::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        let Some(next) = adjacency.get(&current) else {
            continue;
        };

        for &node in next {
            if !visited.insert(node) {
                continue;
            }
            parent_map.insert(node, current);

            if node == target {
                let mut path = vec![target];
                let mut cursor = target;
                while let Some(&parent) = parent_map.get(&cursor) {
                    path.push(parent);
                    cursor = parent;
                }
                path.reverse();
                return Some(path);
            }
            stack.push(node);
        }
    }

    None
}

/// Checks whether adding `from -> to` to `edges` would close a cycle.
///
/// Searches from `to` back to `from`; when reachable, returns the cycle as
/// `from -> to -> ... -> from`.
pub fn would_create_cycle(edges: &[(Uuid, Uuid)], from: Uuid, to: Uuid) -> Option<Vec<Uuid>> {
    if from == to {
        return Some(vec![from, to]);
    }

    let mut adjacency: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for &(a, b) in edges {
        adjacency.entry(a).or_default().push(b);
    }

    find_cycle_path(&adjacency, to, from).map(|path| {
        let mut cycle = Vec::with_capacity(path.len() + 1);
        cycle.push(from);
        cycle.extend(path);
        cycle
    })
}
