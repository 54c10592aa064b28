use dioxus::prelude::*;
use dioxus_primitives::navbar as prim;

/// Top navigation bar container. Layout of the bar's contents is left to the
/// caller.
#[component]
pub fn Navbar(mut props: prim::NavbarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cw-navbar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Navbar { ..props }
    }
}
