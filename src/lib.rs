//! Full-screen countdown to the end of a clock-of-day window: a progress
//! bar across the top and the time left in big digits underneath.

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod parser;
pub mod render;
pub mod workday;
