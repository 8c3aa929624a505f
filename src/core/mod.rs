pub mod constants;
pub mod sim;

pub use constants::*;
pub use sim::*;
