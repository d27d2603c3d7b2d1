use crate::{find_cycle_path, would_create_cycle};

use std::collections::HashMap;

use googletest::prelude::*;
use proptest::prelude::*;
use uuid::Uuid;

#[test]
fn given_chain_a_b_c_when_c_to_a_added_then_cycle_path_returned() {
    // Given
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let edges = vec![(a, b), (b, c)];

    // When
    let cycle = would_create_cycle(&edges, c, a);

    // Then
    assert_eq!(cycle, Some(vec![c, a, b, c]));
}

#[test]
fn given_diamond_when_parallel_edge_added_then_no_cycle() {
    let (a, b, c, d) = (
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
    );
    let edges = vec![(a, b), (a, c), (b, d), (c, d)];

    assert_that!(would_create_cycle(&edges, a, d), none());
    assert_that!(would_create_cycle(&edges, b, c), none());
}

#[test]
fn given_self_edge_when_checked_then_cycle() {
    let a = Uuid::new_v4();
    assert_that!(would_create_cycle(&[], a, a), some(anything()));
}

#[test]
fn given_long_chain_when_closed_then_detected_without_recursion() {
    // Given
    let nodes: Vec<Uuid> = (0..20_000).map(|_| Uuid::new_v4()).collect();
    let edges: Vec<(Uuid, Uuid)> = nodes.windows(2).map(|w| (w[0], w[1])).collect();

    // When
    let cycle = would_create_cycle(&edges, nodes[nodes.len() - 1], nodes[0]);

    // Then
    assert_that!(cycle.map(|path| path.len()), some(eq(nodes.len() + 1)));
}

#[test]
fn given_unreachable_target_when_searched_then_none() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let adjacency = HashMap::from([(a, vec![b])]);
    assert_that!(find_cycle_path(&adjacency, a, c), none());
    assert_eq!(find_cycle_path(&adjacency, a, b), Some(vec![a, b]));
}

proptest! {
    #[test]
    fn given_acyclic_graph_when_edge_accepted_then_graph_stays_acyclic(
        raw_edges in proptest::collection::vec((0usize..8, 0usize..8), 0..30),
    ) {
        let nodes: Vec<Uuid> = (0..8).map(|_| Uuid::new_v4()).collect();
        let mut accepted: Vec<(Uuid, Uuid)> = Vec::new();

        for (from, to) in raw_edges {
            let (from, to) = (nodes[from], nodes[to]);
            if would_create_cycle(&accepted, from, to).is_none() {
                accepted.push((from, to));
            }
        }

        // No accepted edge can reach back to its own source.
        let mut adjacency: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for &(a, b) in &accepted {
            adjacency.entry(a).or_default().push(b);
        }
        for &(a, b) in &accepted {
            prop_assert!(find_cycle_path(&adjacency, b, a).is_none());
        }
    }
}
