mod burndown;
mod sprint_metrics;
mod velocity;
