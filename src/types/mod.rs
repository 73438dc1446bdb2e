pub mod risk;
pub mod scale;

pub use risk::*;
pub use scale::*;
