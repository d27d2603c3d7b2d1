use tb_core::{Sprint, SprintChart, SprintMetrics, VelocityReport};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SprintResponse {
    pub sprint: Sprint,
}

#[derive(Debug, Serialize)]
pub struct SprintListResponse {
    pub sprints: Vec<Sprint>,
}

#[derive(Debug, Serialize)]
pub struct SprintSummaryResponse {
    pub summary: SprintMetrics,
}

#[derive(Debug, Serialize)]
pub struct BurndownResponse {
    pub chart: SprintChart,
}

#[derive(Debug, Serialize)]
pub struct VelocityResponse {
    pub velocity: VelocityReport,
}
