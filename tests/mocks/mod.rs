pub mod model;
pub mod transcripts;
