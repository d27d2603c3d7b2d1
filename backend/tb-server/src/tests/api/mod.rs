mod error;
mod extractors;
mod parse;
