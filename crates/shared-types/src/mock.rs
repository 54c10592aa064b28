//! Static display data for the dashboard shell.
//!
//! Everything the UI renders comes from these providers. They stand in for
//! a live feed service that does not exist in this build; swapping them for
//! real fetches should not require touching any page.

use chrono::{DateTime, TimeZone, Utc};

use crate::camera::{Camera, CameraStatus, MapCamera, PinStatus};
use crate::metrics::{CameraStatusCounts, MetricsSnapshot, SystemLoad, WeeklyTrends};
use crate::report::{
    DailyReport, HealthStatus, HealthTrend, IncidentPriority, IncidentReport, IncidentStatus,
    ReportStatus, SystemHealthReport,
};
use crate::session::{SessionUser, UserRole};

fn camera(id: &str, name: &str, location: &str, status: CameraStatus, photo: &str) -> Camera {
    Camera {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        status,
        thumbnail_url: format!("https://images.unsplash.com/{photo}?w=800&q=80"),
        feed_url: format!("https://images.unsplash.com/{photo}?w=1200&q=90"),
    }
}

/// The full camera fleet shown in the CCTV grid.
pub fn cameras() -> Vec<Camera> {
    use CameraStatus::{Maintenance, Offline, Online};
    vec![
        camera("1", "City Center", "Main Square", Online, "photo-1573108724029-4c46571d6490"),
        camera("2", "Traffic Junction", "Highway Entrance", Online, "photo-1566288623394-377af472d81b"),
        camera("3", "Central Park", "East Entrance", Maintenance, "photo-1588714477688-cf28a50e94f7"),
        camera("4", "Shopping Mall", "North Entrance", Online, "photo-1519389950473-47ba0277781c"),
        camera("5", "Train Station", "Main Platform", Offline, "photo-1565118531796-763e5082d113"),
        camera("6", "City Hall", "Front Entrance", Online, "photo-1517245386807-bb43f82c33c4"),
        camera("7", "Public Library", "Reading Area", Online, "photo-1568667256549-094345857637"),
        camera("8", "Riverside Walk", "North Bridge", Online, "photo-1506748686214-e9df14d4d9d0"),
        camera("9", "Sports Stadium", "Main Entrance", Maintenance, "photo-1540747913346-19e32dc3e97e"),
        camera("10", "Industrial Zone", "Factory Entrance", Offline, "photo-1518640467707-6811f4a6ab73"),
        camera("11", "Airport Terminal", "Departure Gate", Online, "photo-1556388158-158ea5ccacbd"),
        camera("12", "Hospital Entrance", "Emergency Room", Online, "photo-1519494026892-80bbd2d6fd0d"),
    ]
}

fn seen_at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 15, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Camera pins placed on the schematic city map canvas.
pub fn map_cameras() -> Vec<MapCamera> {
    vec![
        MapCamera {
            id: "cam-001".into(),
            name: "Downtown Main Street".into(),
            x: 150.0,
            y: 200.0,
            status: PinStatus::Online,
            description: "Monitors main intersection at downtown area".into(),
            last_updated: seen_at(10, 30),
        },
        MapCamera {
            id: "cam-002".into(),
            name: "City Park Entrance".into(),
            x: 300.0,
            y: 150.0,
            status: PinStatus::Online,
            description: "Covers the main entrance to the city park".into(),
            last_updated: seen_at(10, 28),
        },
        MapCamera {
            id: "cam-003".into(),
            name: "Shopping Mall".into(),
            x: 450.0,
            y: 250.0,
            status: PinStatus::Offline,
            description: "Monitors the shopping mall parking area".into(),
            last_updated: seen_at(9, 15),
        },
        MapCamera {
            id: "cam-004".into(),
            name: "Train Station".into(),
            x: 200.0,
            y: 350.0,
            status: PinStatus::Online,
            description: "Covers the main entrance to the train station".into(),
            last_updated: seen_at(10, 32),
        },
        MapCamera {
            id: "cam-005".into(),
            name: "City Hall".into(),
            x: 350.0,
            y: 300.0,
            status: PinStatus::Online,
            description: "Monitors the city hall plaza".into(),
            last_updated: seen_at(10, 29),
        },
    ]
}

/// The current metrics dashboard snapshot.
pub fn metrics_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        safety_score: 87,
        response_time: 4.2,
        uptime: 99.7,
        daily_incidents: 12,
        resolved_incidents: 10,
        pending_alerts: 3,
        camera_status: CameraStatusCounts {
            online: 142,
            offline: 8,
            maintenance: 5,
        },
        weekly_trends: WeeklyTrends {
            incidents: vec![8, 12, 15, 10, 7, 12, 14],
            response_time: vec![5.1, 4.8, 4.5, 4.2, 4.3, 4.0, 4.2],
        },
        system_load: SystemLoad {
            bandwidth: 78,
            storage: 65,
            processing: 42,
        },
    }
}

/// Daily activity report rows, newest first.
pub fn daily_reports() -> Vec<DailyReport> {
    let row = |id: &str, date: &str, incidents, resolved, pending| DailyReport {
        id: id.into(),
        date: date.into(),
        incidents,
        resolved,
        pending,
        status: ReportStatus::Completed,
    };
    vec![
        row("daily-001", "2023-06-15", 12, 10, 2),
        row("daily-002", "2023-06-14", 8, 8, 0),
        row("daily-003", "2023-06-13", 15, 13, 2),
    ]
}

/// Security incident report rows.
pub fn incident_reports() -> Vec<IncidentReport> {
    vec![
        IncidentReport {
            id: "inc-001".into(),
            kind: "Security Alert".into(),
            location: "Downtown Main Street".into(),
            time: "14:30".into(),
            status: IncidentStatus::Resolved,
            priority: IncidentPriority::High,
        },
        IncidentReport {
            id: "inc-002".into(),
            kind: "Traffic Violation".into(),
            location: "Highway Entrance".into(),
            time: "12:15".into(),
            status: IncidentStatus::Pending,
            priority: IncidentPriority::Medium,
        },
        IncidentReport {
            id: "inc-003".into(),
            kind: "Suspicious Activity".into(),
            location: "City Park".into(),
            time: "09:45".into(),
            status: IncidentStatus::Investigating,
            priority: IncidentPriority::High,
        },
    ]
}

/// System performance report rows.
pub fn system_health_reports() -> Vec<SystemHealthReport> {
    vec![
        SystemHealthReport {
            id: "sys-001".into(),
            metric: "Camera Uptime".into(),
            value: "99.7%".into(),
            status: HealthStatus::Excellent,
            trend: HealthTrend::Up,
        },
        SystemHealthReport {
            id: "sys-002".into(),
            metric: "Network Bandwidth".into(),
            value: "78%".into(),
            status: HealthStatus::Good,
            trend: HealthTrend::Stable,
        },
        SystemHealthReport {
            id: "sys-003".into(),
            metric: "Storage Capacity".into(),
            value: "65%".into(),
            status: HealthStatus::Warning,
            trend: HealthTrend::Up,
        },
    ]
}

/// The operator every successful demo login resolves to.
pub fn demo_operator() -> SessionUser {
    SessionUser {
        name: "John Doe".into(),
        email: "john.doe@smartcity.gov".into(),
        role: UserRole::Security,
        title: "Security Admin".into(),
        avatar_url: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=operator".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_has_twelve_cameras_with_unique_ids() {
        let cams = cameras();
        assert_eq!(cams.len(), 12);
        let mut ids: Vec<_> = cams.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn map_has_five_pins() {
        assert_eq!(map_cameras().len(), 5);
    }

    #[test]
    fn every_camera_carries_thumbnail_and_feed_urls() {
        for cam in cameras() {
            assert!(cam.thumbnail_url.starts_with("https://"), "{}", cam.id);
            assert!(cam.feed_url.starts_with("https://"), "{}", cam.id);
            assert_ne!(cam.thumbnail_url, cam.feed_url, "{}", cam.id);
        }
    }

    #[test]
    fn daily_reports_totals_are_consistent() {
        for report in daily_reports() {
            assert_eq!(report.resolved + report.pending, report.incidents);
        }
    }

    #[test]
    fn snapshot_trends_cover_a_full_week() {
        let snapshot = metrics_snapshot();
        assert_eq!(snapshot.weekly_trends.incidents.len(), 7);
        assert_eq!(snapshot.weekly_trends.response_time.len(), 7);
    }

    #[test]
    fn demo_operator_is_a_security_user() {
        let operator = demo_operator();
        assert_eq!(operator.role, UserRole::Security);
        assert!(!operator.email.is_empty());
    }
}
