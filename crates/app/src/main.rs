use dioxus::prelude::*;

mod api;
mod dates;
mod dialog;
mod routes;

use routes::Route;

const THEME_CSS: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        Router::<Route> {}
    }
}
