pub mod create_epic_request;
pub mod epic_response;
pub mod epics;
pub mod update_epic_request;
