pub mod log_time_request;
pub mod time_entries;
pub mod time_entry_response;
