use dioxus::prelude::*;

use crate::components::{HomePage, RegisterPage};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/register")]
    Register {},
}

// Route handler components
#[component]
fn Home() -> Element {
    rsx! {
        HomePage {}
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        RegisterPage {}
    }
}
