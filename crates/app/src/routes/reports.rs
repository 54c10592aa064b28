use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdFileText, LdLock, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::{
    mock, AppError, HealthStatus, HealthTrend, IncidentPriority, IncidentStatus, ReportStatus,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageSubtitle,
    PageTitle, TabContent, TabList, TabTrigger, Tabs,
};

use crate::routes::Route;
use crate::session::use_view_access;

pub fn report_status_badge(status: ReportStatus) -> BadgeVariant {
    match status {
        ReportStatus::Completed => BadgeVariant::Success,
        ReportStatus::InProgress => BadgeVariant::Warning,
    }
}

pub fn incident_status_badge(status: IncidentStatus) -> BadgeVariant {
    match status {
        IncidentStatus::Resolved => BadgeVariant::Success,
        IncidentStatus::Investigating => BadgeVariant::Warning,
        IncidentStatus::Pending => BadgeVariant::Secondary,
    }
}

pub fn priority_badge(priority: IncidentPriority) -> BadgeVariant {
    match priority {
        IncidentPriority::High => BadgeVariant::Destructive,
        IncidentPriority::Medium => BadgeVariant::Warning,
        IncidentPriority::Low => BadgeVariant::Secondary,
    }
}

pub fn health_badge(status: HealthStatus) -> BadgeVariant {
    match status {
        HealthStatus::Excellent => BadgeVariant::Success,
        HealthStatus::Good => BadgeVariant::Primary,
        HealthStatus::Warning => BadgeVariant::Warning,
    }
}

/// Error shown when an anonymous viewer opens the reports page.
pub fn locked_notice() -> AppError {
    AppError::unauthorized("Report listings are only available to signed-in users.")
}

pub fn trend_glyph(trend: HealthTrend) -> &'static str {
    match trend {
        HealthTrend::Up => "\u{2191}",
        HealthTrend::Stable => "\u{2192}",
        HealthTrend::Down => "\u{2193}",
    }
}

#[component]
pub fn Reports() -> Element {
    let access = use_view_access();

    if !access.reports_body {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./reports.css") }
            div { class: "reports-locked",
                Card {
                    CardContent {
                        div { class: "reports-locked-body",
                            Icon::<LdLock> { icon: LdLock, width: 28, height: 28 }
                            h2 { "Authentication Required" }
                            p { "{locked_notice().friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| {
                                    navigator().push(Route::Home {});
                                },
                                "Go to Sign In"
                            }
                        }
                    }
                }
            }
        };
    }

    let daily = mock::daily_reports();
    let incidents = mock::incident_reports();
    let system = mock::system_health_reports();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        PageHeader {
            PageTitle { "Reports" }
            PageSubtitle { "Daily activity, security incidents and system health." }
            shared_ui::PageActions {
                Button {
                    variant: ButtonVariant::Outline,
                    Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                    "Export"
                }
            }
        }

        Tabs { default_value: "daily",
            TabList {
                TabTrigger { value: "daily", index: 0usize,
                    Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                    "Daily Activity"
                }
                TabTrigger { value: "incidents", index: 1usize, "Incidents" }
                TabTrigger { value: "system", index: 2usize,
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 14, height: 14 }
                    "System Health"
                }
            }

            TabContent { value: "daily", index: 0usize,
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Date" }
                        DataTableColumn { "Incidents" }
                        DataTableColumn { "Resolved" }
                        DataTableColumn { "Pending" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        for report in daily {
                            DataTableRow { key: "{report.id}",
                                DataTableCell { "{report.date}" }
                                DataTableCell { "{report.incidents}" }
                                DataTableCell { "{report.resolved}" }
                                DataTableCell { "{report.pending}" }
                                DataTableCell {
                                    Badge {
                                        variant: report_status_badge(report.status),
                                        "{report.status.as_str()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            TabContent { value: "incidents", index: 1usize,
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Type" }
                        DataTableColumn { "Location" }
                        DataTableColumn { "Time" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Priority" }
                    }
                    DataTableBody {
                        for incident in incidents {
                            DataTableRow { key: "{incident.id}",
                                DataTableCell { "{incident.kind}" }
                                DataTableCell { "{incident.location}" }
                                DataTableCell { "{incident.time}" }
                                DataTableCell {
                                    Badge {
                                        variant: incident_status_badge(incident.status),
                                        "{incident.status.as_str()}"
                                    }
                                }
                                DataTableCell {
                                    Badge {
                                        variant: priority_badge(incident.priority),
                                        "{incident.priority.as_str()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            TabContent { value: "system", index: 2usize,
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Metric" }
                        DataTableColumn { "Value" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Trend" }
                    }
                    DataTableBody {
                        for report in system {
                            DataTableRow { key: "{report.id}",
                                DataTableCell { "{report.metric}" }
                                DataTableCell { "{report.value}" }
                                DataTableCell {
                                    Badge {
                                        variant: health_badge(report.status),
                                        "{report.status.as_str()}"
                                    }
                                }
                                DataTableCell {
                                    span { class: "reports-trend trend-{report.trend.as_str()}",
                                        "{trend_glyph(report.trend)}"
                                    }
                                }
                            }
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

    use super::*;

    #[test]
    fn locked_notice_is_an_unauthorized_error() {
        let err = locked_notice();
        assert_eq!(err.kind, shared_types::AppErrorKind::Unauthorized);
        assert_eq!(
            err.friendly_message(),
            "Report listings are only available to signed-in users."
        );
    }

    #[test]
    fn report_statuses_map_to_badges() {
        assert_eq!(
            report_status_badge(ReportStatus::Completed),
            BadgeVariant::Success
        );
        assert_eq!(
            report_status_badge(ReportStatus::InProgress),
            BadgeVariant::Warning
        );
    }

    #[test]
    fn high_priority_incidents_stand_out() {
        assert_eq!(
            priority_badge(IncidentPriority::High),
            BadgeVariant::Destructive
        );
        assert_eq!(
            incident_status_badge(IncidentStatus::Resolved),
            BadgeVariant::Success
        );
        assert_eq!(
            incident_status_badge(IncidentStatus::Pending),
            BadgeVariant::Secondary
        );
    }

    #[test]
    fn health_trend_glyphs_cover_all_directions() {
        assert_eq!(trend_glyph(HealthTrend::Up), "\u{2191}");
        assert_eq!(trend_glyph(HealthTrend::Stable), "\u{2192}");
        assert_eq!(trend_glyph(HealthTrend::Down), "\u{2193}");
    }

    #[test]
    fn sample_reports_have_consistent_tallies() {
        for report in mock::daily_reports() {
            assert_eq!(report.incidents, report.resolved + report.pending);
        }
    }
}
