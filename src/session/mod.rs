pub mod challenge;
pub mod stats;
pub mod strokes;
