pub mod logger;
pub mod route_map;

pub use logger::*;
pub use route_map::*;
