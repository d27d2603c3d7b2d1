mod projection;
mod reorder;
