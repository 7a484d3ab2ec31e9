pub mod estimator;
pub mod ports;
pub mod rasterizer;
pub mod registry;
pub mod seed;
pub mod types;

pub use estimator::*;
pub use ports::*;
pub use rasterizer::*;
pub use registry::*;
pub use seed::*;
pub use types::*;
