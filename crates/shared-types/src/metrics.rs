use serde::{Deserialize, Serialize};

/// Camera fleet totals broken down by operational state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CameraStatusCounts {
    pub online: u32,
    pub offline: u32,
    pub maintenance: u32,
}

impl CameraStatusCounts {
    pub fn total(&self) -> u32 {
        self.online + self.offline + self.maintenance
    }

    /// Share of the fleet currently online, as a 0-100 percentage.
    pub fn online_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.online) / f64::from(total) * 100.0
    }
}

/// Seven-day trend series, oldest day first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeeklyTrends {
    pub incidents: Vec<u32>,
    pub response_time: Vec<f64>,
}

/// System load figures shown on the admin-only performance tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SystemLoad {
    /// Percent of network bandwidth in use.
    pub bandwidth: u32,
    /// Percent of storage capacity in use.
    pub storage: u32,
    /// Percent of processing capacity in use.
    pub processing: u32,
}

/// One snapshot of the city metrics dashboard.
///
/// Headline figures are public; incident detail and [`SystemLoad`] are
/// gated by the view-access table, not by omitting them here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetricsSnapshot {
    /// Composite safety score, 0-100.
    pub safety_score: u32,
    /// Average emergency response time in minutes.
    pub response_time: f64,
    /// System uptime percentage.
    pub uptime: f64,
    pub daily_incidents: u32,
    pub resolved_incidents: u32,
    pub pending_alerts: u32,
    pub camera_status: CameraStatusCounts,
    pub weekly_trends: WeeklyTrends,
    pub system_load: SystemLoad,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_percent_of_empty_fleet_is_zero() {
        assert_eq!(CameraStatusCounts::default().online_percent(), 0.0);
    }

    #[test]
    fn online_percent_counts_all_states() {
        let counts = CameraStatusCounts {
            online: 142,
            offline: 8,
            maintenance: 5,
        };
        assert_eq!(counts.total(), 155);
        let pct = counts.online_percent();
        assert!((pct - 91.6).abs() < 0.1, "got {pct}");
    }
}
