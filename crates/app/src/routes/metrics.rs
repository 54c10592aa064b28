use dioxus::prelude::*;
use shared_types::mock;
use shared_ui::{PageHeader, PageSubtitle, PageTitle};

use crate::components::MetricsDashboard;

#[component]
pub fn Metrics() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Metrics" }
            PageSubtitle { "City safety and surveillance system performance." }
        }
        MetricsDashboard { snapshot: mock::metrics_snapshot() }
    }
}
