pub mod buy;
pub mod initialize;

pub use buy::*;
pub use initialize::*;
