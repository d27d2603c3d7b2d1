use tb_core::Dependency;
use tb_engine::TaskDependencies;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DependencyResponse {
    pub dependency: Dependency,
}

#[derive(Debug, Serialize)]
pub struct DependencyListResponse {
    pub dependencies: TaskDependencies,
}

#[derive(Debug, Serialize)]
pub struct RemoveDependencyResponse {
    /// False when there was no such edge
    pub removed: bool,
}
