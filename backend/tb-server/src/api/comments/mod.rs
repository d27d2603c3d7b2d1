pub mod comment_response;
pub mod comments;
pub mod create_comment_request;
