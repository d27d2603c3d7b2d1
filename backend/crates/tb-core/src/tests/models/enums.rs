use crate::{EpicStatus, MemberRole, Priority, SprintStatus, TaskType};

use std::str::FromStr;

#[test]
fn test_sprint_status_round_trips_through_str() {
    for status in [
        SprintStatus::Planning,
        SprintStatus::Active,
        SprintStatus::Completed,
    ] {
        assert_eq!(SprintStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(SprintStatus::from_str("planned").is_err());
}

#[test]
fn test_epic_status_from_str() {
    assert_eq!(
        EpicStatus::from_str("in_progress").unwrap(),
        EpicStatus::InProgress
    );
    assert!(EpicStatus::from_str("IN_PROGRESS").is_err());
}

#[test]
fn test_priority_and_type_from_str() {
    assert_eq!(Priority::from_str("critical").unwrap(), Priority::Critical);
    assert_eq!(TaskType::from_str("bug").unwrap(), TaskType::Bug);
    assert!(Priority::from_str("urgent").is_err());
    assert!(TaskType::from_str("epic").is_err());
}

#[test]
fn test_member_role_from_str() {
    assert_eq!(MemberRole::from_str("viewer").unwrap(), MemberRole::Viewer);
    assert!(MemberRole::from_str("owner").is_err());
}
