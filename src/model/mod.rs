pub mod record;
pub mod distribution;
pub mod report;

pub use record::*;
pub use distribution::*;
pub use report::*;
