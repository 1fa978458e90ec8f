pub mod error;
pub mod registration;

pub use error::*;
pub use registration::*;
