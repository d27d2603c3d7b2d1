pub mod board;
pub mod board_query;
pub mod board_response;
