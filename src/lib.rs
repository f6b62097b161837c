pub mod camera;
pub mod cell;
pub mod config;
pub mod display;
pub mod driver;
pub mod events;
pub mod grid;
pub mod io;
pub mod rules;
pub mod seed;
pub mod world;

mod ext;
mod parse_util;
