pub mod board;
pub mod comments;
pub mod delete_response;
pub mod dependencies;
pub mod epics;
pub mod error;
pub mod extractors;
pub mod parse;
pub mod projects;
pub mod scope;
pub mod sprints;
pub mod statuses;
pub mod tasks;
pub mod time_entries;
