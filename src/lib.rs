#[macro_use]
extern crate stump;

pub mod curve;
pub mod error;
pub mod graphset;
pub mod pattern;
pub mod registry;
pub mod scanning;
pub mod series;
pub mod sizefmt;
pub mod stats;
