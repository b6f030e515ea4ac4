// Module exports for models

pub mod calendar;
pub mod color;
pub mod day_colors;
pub mod settings;
pub mod theme;
