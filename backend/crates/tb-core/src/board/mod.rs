pub mod projection;
pub mod reorder;
