use dioxus::prelude::*;
use shared_types::mock;
use shared_ui::{PageHeader, PageSubtitle, PageTitle};

use crate::components::CctvGrid;

#[component]
pub fn Cctv() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "CCTV Grid" }
            PageSubtitle { "Live feeds from every camera across the city network." }
        }
        CctvGrid { cameras: mock::cameras(), max_cameras: None }
    }
}
