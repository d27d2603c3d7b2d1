mod analytics;
mod board;
mod graph;
mod models;
