pub mod not_found;
pub mod register;

use dioxus::prelude::*;

use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Register {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
