use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBell, LdCamera, LdClock, LdLock, LdShield, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use shared_types::MetricsSnapshot;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Progress, ProgressIndicator,
    TabContent, TabList, TabTrigger, Tabs,
};

use crate::session::use_view_access;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Dispatch-to-arrival target in minutes; response times are judged against
/// this on the summary card.
const RESPONSE_TARGET_MIN: f64 = 5.0;

/// Height of a chart bar as a percentage of the tallest bar in the series.
pub fn bar_height_pct(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(max) * 100.0).clamp(0.0, 100.0)
}

#[component]
fn StatCard(
    label: &'static str,
    value: String,
    hint: String,
    #[props(default)] progress: Option<f64>,
    children: Element,
) -> Element {
    rsx! {
        Card { class: "metric-stat-card",
            CardContent {
                div { class: "metric-stat-head",
                    span { class: "metric-stat-label", "{label}" }
                    {children}
                }
                div { class: "metric-stat-value", "{value}" }
                div { class: "metric-stat-hint", "{hint}" }
                if let Some(pct) = progress {
                    Progress { value: Some(pct), ProgressIndicator {} }
                }
            }
        }
    }
}

#[component]
fn LoadRow(label: &'static str, percent: u32) -> Element {
    rsx! {
        div { class: "metrics-load-row",
            div { class: "metrics-load-label",
                span { "{label}" }
                span { "{percent}%" }
            }
            Progress { value: Some(f64::from(percent)), ProgressIndicator {} }
        }
    }
}

#[component]
pub fn MetricsDashboard(snapshot: MetricsSnapshot) -> Element {
    let access = use_view_access();

    let counts = snapshot.camera_status;
    let online_pct = counts.online_percent();
    let incident_max = snapshot
        .weekly_trends
        .incidents
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    let response_hint = if snapshot.response_time <= RESPONSE_TARGET_MIN {
        format!("Within {RESPONSE_TARGET_MIN} min target")
    } else {
        format!("Above {RESPONSE_TARGET_MIN} min target")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./metrics_dashboard.css") }

        section { class: "metrics-dashboard",
            div { class: "metrics-stat-grid",
                StatCard {
                    label: "Safety Score",
                    value: format!("{}%", snapshot.safety_score),
                    hint: "City-wide composite".to_string(),
                    progress: Some(f64::from(snapshot.safety_score)),
                    Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                }
                StatCard {
                    label: "Avg Response",
                    value: format!("{} min", snapshot.response_time),
                    hint: response_hint,
                    Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                }
                StatCard {
                    label: "Uptime",
                    value: format!("{}%", snapshot.uptime),
                    hint: "Camera network".to_string(),
                    progress: Some(snapshot.uptime),
                    Icon::<LdActivity> { icon: LdActivity, width: 16, height: 16 }
                }
                StatCard {
                    label: "Pending Alerts",
                    value: snapshot.pending_alerts.to_string(),
                    hint: "Awaiting triage".to_string(),
                    Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                }
            }

            if access.detailed_metrics {
                Tabs { default_value: "overview",
                    TabList {
                        TabTrigger { value: "overview", index: 0usize, "Overview" }
                        TabTrigger { value: "incidents", index: 1usize, "Incidents" }
                        TabTrigger { value: "cameras", index: 2usize, "Cameras" }
                        if access.advanced_metrics {
                            TabTrigger { value: "performance", index: 3usize, "Performance" }
                        }
                    }

                    TabContent { value: "overview", index: 0usize,
                        Card {
                            CardHeader {
                                CardTitle {
                                    div { class: "metrics-panel-title",
                                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 }
                                        "Weekly Incidents"
                                    }
                                }
                            }
                            CardContent {
                                div { class: "metrics-chart",
                                    for (day, value) in WEEKDAYS.iter().zip(snapshot.weekly_trends.incidents.iter().copied()) {
                                        div { key: "{day}", class: "metrics-chart-col",
                                            div { class: "metrics-chart-track",
                                                div {
                                                    class: "metrics-chart-bar",
                                                    style: "height: {bar_height_pct(value, incident_max)}%;",
                                                    title: "{value} incidents",
                                                }
                                            }
                                            span { class: "metrics-chart-day", "{day}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    TabContent { value: "incidents", index: 1usize,
                        Card {
                            CardHeader {
                                CardTitle { "Incident Resolution" }
                            }
                            CardContent {
                                div { class: "metrics-detail-grid",
                                    div { class: "metrics-detail-item",
                                        span { class: "metrics-detail-value", "{snapshot.daily_incidents}" }
                                        span { class: "metrics-detail-label", "Incidents today" }
                                    }
                                    div { class: "metrics-detail-item",
                                        span { class: "metrics-detail-value", "{snapshot.resolved_incidents}" }
                                        span { class: "metrics-detail-label", "Resolved" }
                                    }
                                    div { class: "metrics-detail-item",
                                        span { class: "metrics-detail-value",
                                            "{snapshot.daily_incidents.saturating_sub(snapshot.resolved_incidents)}"
                                        }
                                        span { class: "metrics-detail-label", "Open" }
                                    }
                                }
                            }
                        }
                    }

                    TabContent { value: "cameras", index: 2usize,
                        Card {
                            CardHeader {
                                CardTitle {
                                    div { class: "metrics-panel-title",
                                        Icon::<LdCamera> { icon: LdCamera, width: 16, height: 16 }
                                        "Camera Status"
                                    }
                                }
                            }
                            CardContent {
                                div { class: "metrics-camera-row",
                                    span { "Online" }
                                    Badge { variant: BadgeVariant::Success, "{counts.online}" }
                                }
                                div { class: "metrics-camera-row",
                                    span { "Offline" }
                                    Badge { variant: BadgeVariant::Destructive, "{counts.offline}" }
                                }
                                div { class: "metrics-camera-row",
                                    span { "Maintenance" }
                                    Badge { variant: BadgeVariant::Warning, "{counts.maintenance}" }
                                }
                                div { class: "metrics-camera-availability",
                                    div { class: "metrics-camera-availability-label",
                                        span { "Availability" }
                                        span { "{online_pct:.1}%" }
                                    }
                                    Progress { value: Some(online_pct), ProgressIndicator {} }
                                }
                            }
                        }
                    }

                    if access.advanced_metrics {
                        TabContent { value: "performance", index: 3usize,
                            Card {
                                CardHeader {
                                    CardTitle { "System Performance" }
                                }
                                CardContent {
                                    LoadRow { label: "Network Bandwidth", percent: snapshot.system_load.bandwidth }
                                    LoadRow { label: "Storage Capacity", percent: snapshot.system_load.storage }
                                    LoadRow { label: "Processing Load", percent: snapshot.system_load.processing }
                                }
                            }
                        }
                    }
                }
            } else {
                Card { class: "metrics-teaser",
                    CardContent {
                        div { class: "metrics-teaser-body",
                            Icon::<LdLock> { icon: LdLock, width: 20, height: 20 }
                            p { "Sign in to view incident breakdowns, camera availability and trend analysis." }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shared_types::mock;

    use super::*;

    #[test]
    fn bar_heights_scale_to_the_busiest_day() {
        assert_eq!(bar_height_pct(15, 15), 100.0);
        assert_eq!(bar_height_pct(0, 15), 0.0);
        assert_eq!(bar_height_pct(12, 15), 80.0);
    }

    #[test]
    fn empty_series_yields_flat_bars() {
        assert_eq!(bar_height_pct(0, 0), 0.0);
        assert_eq!(bar_height_pct(7, 0), 0.0);
    }

    #[test]
    fn sample_week_peaks_on_wednesday() {
        let snapshot = mock::metrics_snapshot();
        let max = snapshot.weekly_trends.incidents.iter().copied().max();
        assert_eq!(max, Some(15));
        assert_eq!(snapshot.weekly_trends.incidents[2], 15);
    }

    #[test]
    fn sample_response_time_is_within_target() {
        let snapshot = mock::metrics_snapshot();
        assert!(snapshot.response_time <= RESPONSE_TARGET_MIN);
    }
}
