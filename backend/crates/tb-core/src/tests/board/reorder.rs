use crate::{plan_move, renumber};

use googletest::prelude::*;
use proptest::prelude::*;
use uuid::Uuid;

fn ids(n: usize) -> Vec<Uuid> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

fn apply(column: &[Uuid], assignments: &[(Uuid, i64)]) -> Vec<Uuid> {
    let mut placed: Vec<(i64, Uuid)> = column
        .iter()
        .map(|id| {
            let position = assignments
                .iter()
                .find(|(a, _)| a == id)
                .map(|(_, p)| *p)
                .unwrap();
            (position, *id)
        })
        .collect();
    placed.sort();
    placed.into_iter().map(|(_, id)| id).collect()
}

#[test]
fn given_four_tasks_when_third_moved_to_other_column_then_both_columns_dense() {
    // Given
    let todo = ids(4);
    let doing: Vec<Uuid> = Vec::new();
    let t3 = todo[2];

    // When
    let plan = plan_move(&todo, Some(&doing), t3, 0).unwrap();

    // Then
    assert!(plan.cross_column);
    assert_that!(plan.position, eq(0));
    assert_eq!(plan.source, vec![(todo[0], 0), (todo[1], 1), (todo[3], 2)]);
    assert_eq!(plan.destination, vec![(t3, 0)]);
}

#[test]
fn given_column_when_task_moved_within_it_then_inserted_at_target() {
    // Given
    let column = ids(4);

    // When
    let plan = plan_move(&column, None, column[0], 2).unwrap();

    // Then
    assert!(!plan.cross_column);
    assert_that!(plan.source, is_empty());
    assert_eq!(
        plan.destination,
        vec![(column[1], 0), (column[2], 1), (column[0], 2), (column[3], 3)]
    );
}

#[test]
fn given_out_of_range_target_when_planned_then_clamped_to_bounds() {
    let column = ids(3);

    let high = plan_move(&column, None, column[0], 99).unwrap();
    assert_that!(high.position, eq(2));

    let low = plan_move(&column, None, column[2], -5).unwrap();
    assert_that!(low.position, eq(0));

    let destination = ids(2);
    let cross = plan_move(&column, Some(&destination), column[1], 10).unwrap();
    assert_that!(cross.position, eq(2));
}

#[test]
fn given_task_missing_from_source_when_planned_then_rejected() {
    let column = ids(3);
    assert_that!(
        plan_move(&column, None, Uuid::new_v4(), 0),
        err(anything())
    );
}

#[test]
fn given_task_already_in_destination_when_planned_then_rejected() {
    let column = ids(2);
    assert_that!(
        plan_move(&column, Some(&column), column[0], 0),
        err(anything())
    );
}

#[test]
fn given_sequence_when_renumbered_then_positions_follow_order() {
    let column = ids(3);
    assert_eq!(
        renumber(&column),
        vec![(column[0], 0), (column[1], 1), (column[2], 2)]
    );
}

proptest! {
    #[test]
    fn given_any_move_when_planned_then_columns_stay_dense(
        source_len in 1usize..12,
        dest_len in 0usize..12,
        pick in 0usize..12,
        target in -3i64..20,
        cross in any::<bool>(),
    ) {
        let source = ids(source_len);
        let destination = ids(dest_len);
        let task = source[pick % source_len];

        let plan = if cross {
            plan_move(&source, Some(&destination), task, target).unwrap()
        } else {
            plan_move(&source, None, task, target).unwrap()
        };

        let mut dest_positions: Vec<i64> = plan.destination.iter().map(|(_, p)| *p).collect();
        dest_positions.sort();
        let expected: Vec<i64> = (0..plan.destination.len() as i64).collect();
        prop_assert_eq!(dest_positions, expected);

        let mut source_positions: Vec<i64> = plan.source.iter().map(|(_, p)| *p).collect();
        source_positions.sort();
        let expected: Vec<i64> = (0..plan.source.len() as i64).collect();
        prop_assert_eq!(source_positions, expected);

        let total = plan.source.len() + plan.destination.len();
        let expected_total = if cross { source_len + dest_len } else { source_len };
        prop_assert_eq!(total, expected_total);
    }

    #[test]
    fn given_move_within_column_when_moved_back_then_order_restored(
        len in 1usize..12,
        pick in 0usize..12,
        target in 0i64..12,
    ) {
        let column = ids(len);
        let task = column[pick % len];
        let original = (pick % len) as i64;

        let there = plan_move(&column, None, task, target).unwrap();
        let moved = apply(&column, &there.destination);

        let back = plan_move(&moved, None, task, original).unwrap();
        let restored = apply(&moved, &back.destination);

        prop_assert_eq!(restored, column);
    }
}
