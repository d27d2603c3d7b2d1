use tb_core::Board;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: Board,
}
