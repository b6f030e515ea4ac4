// Service module exports

pub mod calendar;
pub mod catalog;
pub mod contrast;
pub mod lookup;
pub mod palette;
pub mod settings;
