use dioxus::prelude::*;
use shared_types::mock;
use shared_ui::{PageHeader, PageSubtitle, PageTitle};

use crate::components::CityMap;

#[component]
pub fn CityMapPage() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "City Map" }
            PageSubtitle { "Camera positions and live status across the city." }
        }
        CityMap { cameras: mock::map_cameras() }
    }
}
