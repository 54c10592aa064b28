use serde::{Deserialize, Serialize};

/// Progress state of a daily activity report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportStatus {
    #[default]
    Completed,
    InProgress,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "completed",
            ReportStatus::InProgress => "in progress",
        }
    }
}

/// One row in the daily activity report listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyReport {
    pub id: String,
    /// ISO date the report covers.
    pub date: String,
    pub incidents: u32,
    pub resolved: u32,
    pub pending: u32,
    pub status: ReportStatus,
}

/// Resolution state of a security incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum IncidentStatus {
    #[default]
    Pending,
    Investigating,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Pending => "pending",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        }
    }
}

/// Priority assigned to a security incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum IncidentPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl IncidentPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentPriority::Low => "low",
            IncidentPriority::Medium => "medium",
            IncidentPriority::High => "high",
        }
    }
}

/// One row in the security incident listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentReport {
    pub id: String,
    pub kind: String,
    pub location: String,
    /// Wall-clock time of day the incident was logged (HH:MM).
    pub time: String,
    pub status: IncidentStatus,
    pub priority: IncidentPriority,
}

/// Health rating for a monitored system metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HealthStatus {
    Excellent,
    #[default]
    Good,
    Warning,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "excellent",
            HealthStatus::Good => "good",
            HealthStatus::Warning => "warning",
        }
    }
}

/// Direction a system health metric is trending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HealthTrend {
    Up,
    #[default]
    Stable,
    Down,
}

impl HealthTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthTrend::Up => "up",
            HealthTrend::Stable => "stable",
            HealthTrend::Down => "down",
        }
    }
}

/// One row in the system performance listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemHealthReport {
    pub id: String,
    pub metric: String,
    /// Display value, already formatted ("99.7%").
    pub value: String,
    pub status: HealthStatus,
    pub trend: HealthTrend,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn incident_report_serialization_roundtrip() {
        let incident = IncidentReport {
            id: "inc-001".into(),
            kind: "Security Alert".into(),
            location: "Downtown Main Street".into(),
            time: "14:30".into(),
            status: IncidentStatus::Resolved,
            priority: IncidentPriority::High,
        };

        let json = serde_json::to_string(&incident).unwrap();
        let deserialized: IncidentReport = serde_json::from_str(&json).unwrap();

        assert_eq!(incident, deserialized);
    }

    #[test]
    fn status_strings_are_lowercase() {
        assert_eq!(IncidentStatus::Investigating.as_str(), "investigating");
        assert_eq!(IncidentPriority::High.as_str(), "high");
        assert_eq!(HealthStatus::Warning.as_str(), "warning");
        assert_eq!(HealthTrend::Stable.as_str(), "stable");
    }
}
