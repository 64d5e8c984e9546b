pub mod challenge_progress;
pub mod keyboard_diagram;
pub mod stroke_panel;
pub mod typing_area;
