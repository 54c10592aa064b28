use crate::session::UserRole;

/// What the current viewer is allowed to see, evaluated once per session
/// change and consulted by every page.
///
/// Pages never match on [`UserRole`] directly; any new surface gets a field
/// here so the whole visibility policy stays in one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewAccess {
    /// All cameras in the grid, not just the public subset.
    pub full_camera_grid: bool,
    /// Traffic overlay tab on the city map.
    pub traffic_layer: bool,
    /// Daily incidents / resolution figures on the metrics page.
    pub detailed_metrics: bool,
    /// System performance tab (bandwidth, storage, processing).
    pub advanced_metrics: bool,
    /// Report listings (all three report categories).
    pub reports_body: bool,
    /// Settings page body (profile, notifications, preferences, support).
    pub settings_body: bool,
    /// System tab inside settings.
    pub system_settings_tab: bool,
    /// "System Config" entry in the navigation menu.
    pub system_config_link: bool,
    /// Incident management quick action.
    pub incident_management: bool,
}

impl ViewAccess {
    /// The anonymous baseline: public camera subset, map without overlays,
    /// headline metrics only.
    pub const DENIED: ViewAccess = ViewAccess {
        full_camera_grid: false,
        traffic_layer: false,
        detailed_metrics: false,
        advanced_metrics: false,
        reports_body: false,
        settings_body: false,
        system_settings_tab: false,
        system_config_link: false,
        incident_management: false,
    };

    /// Evaluate the visibility table for a viewer.
    ///
    /// An unauthenticated viewer gets [`ViewAccess::DENIED`] regardless of
    /// any role value carried alongside.
    pub fn evaluate(is_authenticated: bool, role: UserRole) -> Self {
        if !is_authenticated {
            return ViewAccess::DENIED;
        }
        let operator = matches!(role, UserRole::Admin | UserRole::Security);
        ViewAccess {
            full_camera_grid: true,
            traffic_layer: true,
            detailed_metrics: role != UserRole::Public,
            advanced_metrics: operator,
            reports_body: true,
            settings_body: true,
            system_settings_tab: operator,
            system_config_link: role == UserRole::Admin,
            incident_management: operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_viewer_is_denied_everything() {
        for role in [
            UserRole::Public,
            UserRole::Security,
            UserRole::Admin,
            UserRole::CityOfficial,
        ] {
            // A stale role value must not leak visibility.
            assert_eq!(ViewAccess::evaluate(false, role), ViewAccess::DENIED);
        }
    }

    #[test]
    fn authenticated_public_gets_base_surfaces_only() {
        let access = ViewAccess::evaluate(true, UserRole::Public);
        assert!(access.full_camera_grid);
        assert!(access.traffic_layer);
        assert!(access.reports_body);
        assert!(access.settings_body);
        assert!(!access.detailed_metrics);
        assert!(!access.advanced_metrics);
        assert!(!access.system_settings_tab);
        assert!(!access.system_config_link);
        assert!(!access.incident_management);
    }

    #[test]
    fn city_official_gets_detailed_but_not_operator_surfaces() {
        let access = ViewAccess::evaluate(true, UserRole::CityOfficial);
        assert!(access.detailed_metrics);
        assert!(!access.advanced_metrics);
        assert!(!access.system_settings_tab);
        assert!(!access.system_config_link);
        assert!(!access.incident_management);
    }

    #[test]
    fn security_gets_operator_surfaces_without_system_config() {
        let access = ViewAccess::evaluate(true, UserRole::Security);
        assert!(access.detailed_metrics);
        assert!(access.advanced_metrics);
        assert!(access.system_settings_tab);
        assert!(access.incident_management);
        assert!(!access.system_config_link);
    }

    #[test]
    fn admin_gets_everything() {
        let access = ViewAccess::evaluate(true, UserRole::Admin);
        assert!(access.full_camera_grid);
        assert!(access.traffic_layer);
        assert!(access.detailed_metrics);
        assert!(access.advanced_metrics);
        assert!(access.reports_body);
        assert!(access.settings_body);
        assert!(access.system_settings_tab);
        assert!(access.system_config_link);
        assert!(access.incident_management);
    }
}
