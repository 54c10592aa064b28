use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdCamera, LdClock, LdFileText, LdShield};
use dioxus_free_icons::Icon;
use shared_types::{mock, UiConfig};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, TabContent, TabList, TabTrigger, Tabs,
};

use crate::components::{AuthPanel, CctvGrid, CityMap, MetricsDashboard};
use crate::routes::Route;
use crate::session::{use_session, use_view_access};

#[component]
fn QuickStat(label: &'static str, value: String, children: Element) -> Element {
    rsx! {
        Card { class: "home-quick-stat",
            CardContent {
                div { class: "home-quick-stat-icon", {children} }
                div { class: "home-quick-stat-body",
                    span { class: "home-quick-stat-value", "{value}" }
                    span { class: "home-quick-stat-label", "{label}" }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let access = use_view_access();
    let config: UiConfig = use_context();

    let snapshot = mock::metrics_snapshot();
    let counts = snapshot.camera_status;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        if !session.is_authenticated() {
            section { class: "home-hero",
                h1 { class: "home-hero-title", "City Surveillance, One Dashboard" }
                p { class: "home-hero-subtitle",
                    "Live camera coverage, incident tracking and system health for the whole city."
                }
                div { class: "home-hero-stats",
                    div { class: "home-hero-stat",
                        span { class: "home-hero-stat-value", "150+" }
                        span { class: "home-hero-stat-label", "Cameras" }
                    }
                    div { class: "home-hero-stat",
                        span { class: "home-hero-stat-value", "{snapshot.safety_score}%" }
                        span { class: "home-hero-stat-label", "Safety Score" }
                    }
                    div { class: "home-hero-stat",
                        span { class: "home-hero-stat-value", "{snapshot.response_time} min" }
                        span { class: "home-hero-stat-label", "Avg Response" }
                    }
                }
            }
        }

        div { class: "home-columns",
            div { class: "home-main-column",
                Tabs { default_value: "overview",
                    TabList {
                        TabTrigger { value: "overview", index: 0usize, "Overview" }
                        TabTrigger { value: "feeds", index: 1usize, "Live Feeds" }
                        TabTrigger { value: "map", index: 2usize, "City Map" }
                        TabTrigger { value: "analytics", index: 3usize, "Analytics" }
                    }

                    TabContent { value: "overview", index: 0usize,
                        div { class: "home-overview",
                            section { class: "home-quick-stats",
                                QuickStat {
                                    label: "Active Cameras",
                                    value: counts.online.to_string(),
                                    Icon::<LdCamera> { icon: LdCamera, width: 20, height: 20 }
                                }
                                QuickStat {
                                    label: "Offline",
                                    value: counts.offline.to_string(),
                                    Icon::<LdActivity> { icon: LdActivity, width: 20, height: 20 }
                                }
                                QuickStat {
                                    label: "Incidents Today",
                                    value: snapshot.daily_incidents.to_string(),
                                    Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                                }
                                QuickStat {
                                    label: "Uptime",
                                    value: format!("{}%", snapshot.uptime),
                                    Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                                }
                            }
                            CctvGrid {
                                cameras: mock::cameras(),
                                max_cameras: Some(config.featured_cameras),
                            }
                        }
                    }

                    TabContent { value: "feeds", index: 1usize,
                        CctvGrid { cameras: mock::cameras(), max_cameras: None }
                    }

                    TabContent { value: "map", index: 2usize,
                        CityMap { cameras: mock::map_cameras() }
                    }

                    TabContent { value: "analytics", index: 3usize,
                        MetricsDashboard { snapshot: snapshot.clone() }
                    }
                }
            }

            aside { class: "home-side-column",
                AuthPanel {}
                Card {
                    CardContent {
                        h3 { class: "home-actions-title", "Quick Actions" }
                        div { class: "home-actions",
                            if access.system_config_link {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        navigator().push(Route::Settings {});
                                    },
                                    "System Configuration"
                                }
                            }
                            if access.incident_management {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        navigator().push(Route::Reports {});
                                    },
                                    "Incident Management"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    navigator().push(Route::Reports {});
                                },
                                Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                                "Generate Report"
                            }
                        }
                    }
                }
            }
        }
    }
}
