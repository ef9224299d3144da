mod catalog;
pub mod field;
pub mod operator;
pub mod registry;

pub use field::*;
pub use operator::*;
pub use registry::*;
