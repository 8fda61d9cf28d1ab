pub mod covered_call;

pub use covered_call::*;
