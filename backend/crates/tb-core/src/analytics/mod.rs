pub mod burndown;
pub mod sprint_metrics;
pub mod velocity;
