pub mod card;
pub mod form_select;
pub mod input;

pub use card::*;
pub use form_select::*;
pub use input::*;
