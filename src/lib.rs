// Lucky Color Library
// Color conversion, contrast, palettes, month grids and weekday lookups

pub mod models;
pub mod services;
pub mod utils;
