pub mod route_map_service;

pub use route_map_service::*;
