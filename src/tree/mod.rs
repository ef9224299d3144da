mod codec;
mod edit;
pub mod node;

pub use node::*;
