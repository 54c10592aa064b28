use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdMaximize2, LdMinimize2, LdRotateCw, LdZoomIn, LdZoomOut,
};
use dioxus_free_icons::Icon;
use shared_types::{Camera, CameraStatus, UiConfig};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DialogContent, DialogRoot,
    DialogTitle,
};

use crate::session::use_session;

pub const ZOOM_MIN: f64 = 0.6;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;

/// Step the feed zoom up, saturating at [`ZOOM_MAX`].
pub fn zoom_in(level: f64) -> f64 {
    (level + ZOOM_STEP).min(ZOOM_MAX)
}

/// Step the feed zoom down, saturating at [`ZOOM_MIN`].
pub fn zoom_out(level: f64) -> f64 {
    (level - ZOOM_STEP).max(ZOOM_MIN)
}

/// How many cameras to show and how many to fold into the placeholder card.
///
/// Authenticated viewers always see the full fleet; anonymous viewers see at
/// most `max_public`.
pub fn visible_split(total: usize, is_authenticated: bool, max_public: usize) -> (usize, usize) {
    if is_authenticated {
        (total, 0)
    } else {
        let shown = total.min(max_public);
        (shown, total - shown)
    }
}

/// Camera status to badge variant mapping.
pub fn status_badge(status: CameraStatus) -> (BadgeVariant, &'static str) {
    match status {
        CameraStatus::Online => (BadgeVariant::Success, "Online"),
        CameraStatus::Offline => (BadgeVariant::Destructive, "Offline"),
        CameraStatus::Maintenance => (BadgeVariant::Warning, "Maintenance"),
    }
}

/// The live feed grid: camera cards, the anonymous-view placeholder card,
/// and the feed dialog with zoom and fullscreen controls.
#[component]
pub fn CctvGrid(
    cameras: Vec<Camera>,
    /// Override the anonymous-view camera cap (defaults to config).
    #[props(default)]
    max_cameras: Option<usize>,
) -> Element {
    let session = use_session();
    let config: UiConfig = use_context();
    let max_public = max_cameras.unwrap_or(config.max_public_cameras);

    let mut selected = use_signal(|| Option::<Camera>::None);
    let mut dialog_open = use_signal(|| false);
    let mut fullscreen = use_signal(|| false);
    let mut zoom = use_signal(|| 1.0_f64);

    let (shown, hidden) = visible_split(cameras.len(), session.is_authenticated(), max_public);

    let mut open_camera = move |camera: Camera| {
        selected.set(Some(camera));
        zoom.set(1.0);
        fullscreen.set(false);
        dialog_open.set(true);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cctv_grid.css") }

        div { class: "cctv-grid-panel",
            div { class: "cctv-grid-header",
                h2 { class: "cctv-grid-title", "Live CCTV Feeds" }
                if !session.is_authenticated() {
                    Badge { variant: BadgeVariant::Outline, "Limited View - Login for Full Access" }
                }
            }

            div { class: "cctv-grid",
                for camera in cameras.iter().take(shown).cloned() {
                    {
                        let (variant, label) = status_badge(camera.status);
                        let card_camera = camera.clone();
                        rsx! {
                            div {
                                key: "{camera.id}",
                                class: "cctv-card-click",
                                onclick: move |_| open_camera(card_camera.clone()),
                                Card { class: "cctv-card",
                                    div { class: "cctv-card-feed",
                                        img {
                                            class: "cctv-card-thumbnail",
                                            src: "{camera.thumbnail_url}",
                                            alt: "{camera.name}",
                                            loading: "lazy",
                                        }
                                        div { class: "cctv-card-status",
                                            Badge { variant: variant, "{label}" }
                                        }
                                    }
                                    CardContent {
                                        h3 { class: "cctv-card-name", "{camera.name}" }
                                        p { class: "cctv-card-location", "{camera.location}" }
                                    }
                                }
                            }
                        }
                    }
                }

                if hidden > 0 {
                    Card { class: "cctv-card cctv-card-placeholder",
                        CardContent {
                            p { class: "cctv-placeholder-count", "+{hidden} more cameras" }
                            Button { variant: ButtonVariant::Outline, "Login to View All" }
                        }
                    }
                }
            }
        }

        DialogRoot {
            open: dialog_open(),
            on_open_change: move |open: bool| {
                dialog_open.set(open);
                if !open {
                    selected.set(None);
                    fullscreen.set(false);
                    zoom.set(1.0);
                }
            },
            DialogContent {
                class: if fullscreen() { "cw-dialog-content fullscreen" } else { "cw-dialog-content" },
                if let Some(camera) = selected() {
                    {
                        let (variant, label) = status_badge(camera.status);
                        rsx! {
                            div { class: "cctv-dialog-header",
                                DialogTitle { "{camera.name} - {camera.location}" }
                                div { class: "cctv-dialog-controls",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| zoom.set(zoom_in(zoom())),
                                        Icon::<LdZoomIn> { icon: LdZoomIn, width: 16, height: 16 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| zoom.set(zoom_out(zoom())),
                                        Icon::<LdZoomOut> { icon: LdZoomOut, width: 16, height: 16 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| fullscreen.set(!fullscreen()),
                                        if fullscreen() {
                                            Icon::<LdMinimize2> { icon: LdMinimize2, width: 16, height: 16 }
                                        } else {
                                            Icon::<LdMaximize2> { icon: LdMaximize2, width: 16, height: 16 }
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| zoom.set(1.0),
                                        Icon::<LdRotateCw> { icon: LdRotateCw, width: 16, height: 16 }
                                    }
                                }
                            }
                            div { class: "cctv-dialog-feed",
                                div {
                                    class: "cctv-dialog-feed-frame",
                                    style: "transform: scale({zoom()});",
                                    img {
                                        class: "cctv-dialog-feed-image",
                                        src: "{camera.feed_url}",
                                        alt: "{camera.name}",
                                    }
                                    span { class: "cctv-dialog-feed-label", "{camera.name} live feed" }
                                }
                                div { class: "cctv-dialog-feed-badge",
                                    Badge { variant: variant, "{label}" }
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
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn anonymous_view_caps_grid_and_counts_remainder() {
        assert_eq!(visible_split(12, false, 8), (8, 4));
    }

    #[test]
    fn authenticated_view_shows_full_fleet() {
        assert_eq!(visible_split(12, true, 8), (12, 0));
    }

    #[test]
    fn small_fleet_never_shows_placeholder() {
        assert_eq!(visible_split(5, false, 8), (5, 0));
        assert_eq!(visible_split(8, false, 8), (8, 0));
    }

    #[test]
    fn zoom_steps_stay_within_bounds() {
        let mut level = 1.0;
        for _ in 0..10 {
            level = zoom_in(level);
        }
        assert!((level - ZOOM_MAX).abs() < 1e-9);

        for _ in 0..20 {
            level = zoom_out(level);
        }
        assert!((level - ZOOM_MIN).abs() < 1e-9);
    }

    #[test]
    fn status_badges_map_to_traffic_light_colors() {
        assert_eq!(
            status_badge(CameraStatus::Online),
            (BadgeVariant::Success, "Online")
        );
        assert_eq!(
            status_badge(CameraStatus::Offline),
            (BadgeVariant::Destructive, "Offline")
        );
        assert_eq!(
            status_badge(CameraStatus::Maintenance),
            (BadgeVariant::Warning, "Maintenance")
        );
    }
}
