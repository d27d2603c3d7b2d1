pub mod analytics;
pub mod board;
pub mod comment;
pub mod dependency;
pub mod epic;
mod lookup;
pub mod move_task;
pub mod project;
pub mod sprint;
pub mod status;
pub mod task;
pub mod time_entry;
