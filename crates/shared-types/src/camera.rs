use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational state of a camera feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CameraStatus {
    #[default]
    Online,
    Offline,
    Maintenance,
}

impl CameraStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraStatus::Online => "online",
            CameraStatus::Offline => "offline",
            CameraStatus::Maintenance => "maintenance",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "offline" => CameraStatus::Offline,
            "maintenance" => CameraStatus::Maintenance,
            _ => CameraStatus::Online,
        }
    }

    /// Label shown on status badges.
    pub fn label(&self) -> &'static str {
        match self {
            CameraStatus::Online => "Online",
            CameraStatus::Offline => "Offline",
            CameraStatus::Maintenance => "Maintenance",
        }
    }
}

/// A camera feed card in the CCTV grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: CameraStatus,
    /// Still image shown on the grid card.
    pub thumbnail_url: String,
    /// Higher-resolution frame shown in the feed dialog.
    pub feed_url: String,
}

/// Reachability of a map pin. Pins have no maintenance state; a camera
/// being serviced simply drops off the map feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PinStatus {
    #[default]
    Online,
    Offline,
}

impl PinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PinStatus::Online => "online",
            PinStatus::Offline => "offline",
        }
    }
}

/// A camera pin on the city map. Coordinates are in map-canvas pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapCamera {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub status: PinStatus,
    pub description: String,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn camera_status_roundtrip() {
        for status in [
            CameraStatus::Online,
            CameraStatus::Offline,
            CameraStatus::Maintenance,
        ] {
            assert_eq!(CameraStatus::from_str_or_default(status.as_str()), status);
        }
    }

    #[test]
    fn camera_status_unknown_defaults_to_online() {
        assert_eq!(CameraStatus::from_str_or_default(""), CameraStatus::Online);
        assert_eq!(
            CameraStatus::from_str_or_default("rebooting"),
            CameraStatus::Online
        );
    }

    #[test]
    fn camera_serialization_roundtrip() {
        let camera = Camera {
            id: "cam-001".into(),
            name: "City Center".into(),
            location: "Downtown Plaza".into(),
            status: CameraStatus::Online,
            thumbnail_url: "https://example.com/thumb.jpg".into(),
            feed_url: "https://example.com/feed.jpg".into(),
        };

        let json = serde_json::to_string(&camera).unwrap();
        let deserialized: Camera = serde_json::from_str(&json).unwrap();

        assert_eq!(camera, deserialized);
    }

    #[test]
    fn pin_status_is_binary() {
        assert_eq!(PinStatus::Online.as_str(), "online");
        assert_eq!(PinStatus::Offline.as_str(), "offline");
    }
}
