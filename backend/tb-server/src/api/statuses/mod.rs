pub mod create_status_request;
pub mod status_response;
pub mod statuses;
