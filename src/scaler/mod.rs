pub mod calculations;
pub mod constants;

pub use calculations::{rescale, scale_factor};
pub use constants::*;
