use serde::{Deserialize, Serialize};

/// Viewer role controlling which dashboard surfaces are visible.
///
/// - `Public` — unauthenticated or unknown role. Sees the public subset only.
/// - `Security` — security operators. Full camera access + advanced metrics.
/// - `Admin` — administrators. Everything Security sees plus system config.
/// - `CityOfficial` — city staff. Authenticated views without the security
///   operator surfaces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Public,
    Security,
    Admin,
    CityOfficial,
}

impl UserRole {
    /// Parse a role string. Unknown values default to Public.
    ///
    /// Accepts both `city_official` and the legacy hyphenated `city-official`
    /// spelling; the underscore form is canonical.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "security" => UserRole::Security,
            "admin" => UserRole::Admin,
            "city_official" | "city-official" => UserRole::CityOfficial,
            _ => UserRole::Public,
        }
    }

    /// Lowercase string for storage and display plumbing.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Public => "public",
            UserRole::Security => "security",
            UserRole::Admin => "admin",
            UserRole::CityOfficial => "city_official",
        }
    }

    /// Human-readable label for badges and menus.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Public => "Public",
            UserRole::Security => "Security",
            UserRole::Admin => "Admin",
            UserRole::CityOfficial => "City Official",
        }
    }
}

/// Signed-in operator info held by the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Job title shown under the name in the session panel.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_from_str_known_values() {
        assert_eq!(UserRole::from_str_or_default("security"), UserRole::Security);
        assert_eq!(UserRole::from_str_or_default("Security"), UserRole::Security);
        assert_eq!(UserRole::from_str_or_default("admin"), UserRole::Admin);
        assert_eq!(
            UserRole::from_str_or_default("city_official"),
            UserRole::CityOfficial
        );
    }

    #[test]
    fn role_accepts_legacy_hyphenated_spelling() {
        assert_eq!(
            UserRole::from_str_or_default("city-official"),
            UserRole::CityOfficial
        );
        // Normalizes to the canonical form.
        assert_eq!(
            UserRole::from_str_or_default("city-official").as_str(),
            "city_official"
        );
    }

    #[test]
    fn role_unknown_falls_to_public() {
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Public);
        assert_eq!(UserRole::from_str_or_default("operator"), UserRole::Public);
        assert_eq!(UserRole::from_str_or_default("root"), UserRole::Public);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in [
            UserRole::Public,
            UserRole::Security,
            UserRole::Admin,
            UserRole::CityOfficial,
        ] {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn session_user_serialization_roundtrip() {
        let user = SessionUser {
            name: "John Doe".into(),
            email: "john.doe@smartcity.gov".into(),
            role: UserRole::Security,
            title: "Security Admin".into(),
            avatar_url: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: SessionUser = serde_json::from_str(&json).unwrap();

        assert_eq!(user, deserialized);
    }
}
