pub mod chart;
pub mod encoder;
pub mod generator;
pub mod templates;

pub use chart::*;
pub use encoder::*;
pub use generator::*;
