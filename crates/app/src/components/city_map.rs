use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdLayers, LdMap, LdMapPin, LdZoomIn, LdZoomOut};
use dioxus_free_icons::Icon;
use shared_types::{MapCamera, PinStatus, ViewAccess};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DialogContent, DialogDescription, DialogRoot, DialogTitle,
};

use crate::components::cctv_grid::{zoom_in, zoom_out};
use crate::session::{use_session, use_view_access};

/// Logical size of the map canvas. Pin coordinates are expressed in this space
/// and converted to percentages so the canvas can scale with the viewport.
const MAP_WIDTH: f64 = 600.0;
const MAP_HEIGHT: f64 = 450.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapView {
    Standard,
    Satellite,
    Traffic,
}

impl MapView {
    pub fn key(self) -> &'static str {
        match self {
            MapView::Standard => "standard",
            MapView::Satellite => "satellite",
            MapView::Traffic => "traffic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MapView::Standard => "Standard",
            MapView::Satellite => "Satellite",
            MapView::Traffic => "Traffic",
        }
    }
}

/// Map layers offered to the current viewer. The traffic overlay is hidden
/// until they sign in.
pub fn available_views(access: &ViewAccess) -> Vec<MapView> {
    let mut views = vec![MapView::Standard, MapView::Satellite];
    if access.traffic_layer {
        views.push(MapView::Traffic);
    }
    views
}

/// Pin reachability to badge variant mapping.
pub fn pin_badge(status: PinStatus) -> (BadgeVariant, &'static str) {
    match status {
        PinStatus::Online => (BadgeVariant::Success, "Online"),
        PinStatus::Offline => (BadgeVariant::Destructive, "Offline"),
    }
}

/// Converts a pin position from canvas coordinates to CSS percentages.
pub fn pin_position(camera: &MapCamera) -> (f64, f64) {
    (
        (camera.x / MAP_WIDTH * 100.0).clamp(0.0, 100.0),
        (camera.y / MAP_HEIGHT * 100.0).clamp(0.0, 100.0),
    )
}

#[component]
pub fn CityMap(cameras: Vec<MapCamera>) -> Element {
    let session = use_session();
    let access = use_view_access();

    let mut view = use_signal(|| MapView::Standard);
    let mut zoom = use_signal(|| 1.0_f64);
    let mut selected = use_signal(|| None::<MapCamera>);
    let mut dialog_open = use_signal(|| false);

    let total = cameras.len();
    let views = available_views(&access);
    // Falling back keeps the canvas valid if the traffic layer was open when
    // the session ended.
    if !views.contains(&view()) {
        view.set(MapView::Standard);
    }

    let mut open_pin = move |camera: MapCamera| {
        selected.set(Some(camera));
        dialog_open.set(true);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./city_map.css") }

        section { class: "city-map-section",
            Card {
                CardHeader {
                    div { class: "city-map-header",
                        CardTitle {
                            div { class: "city-map-title",
                                Icon::<LdMap> { icon: LdMap, width: 18, height: 18 }
                                "Camera Map"
                            }
                        }
                        div { class: "city-map-toolbar",
                            div { class: "city-map-views",
                                for v in views.clone() {
                                    Button {
                                        variant: if view() == v { ButtonVariant::Primary } else { ButtonVariant::Outline },
                                        onclick: move |_| view.set(v),
                                        Icon::<LdLayers> { icon: LdLayers, width: 14, height: 14 }
                                        "{v.label()}"
                                    }
                                }
                            }
                            div { class: "city-map-zoom",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| zoom.set(zoom_in(zoom())),
                                    Icon::<LdZoomIn> { icon: LdZoomIn, width: 14, height: 14 }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| zoom.set(zoom_out(zoom())),
                                    Icon::<LdZoomOut> { icon: LdZoomOut, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
                CardContent {
                    div { class: "city-map-viewport",
                        div {
                            class: "city-map-canvas view-{view().key()}",
                            style: "transform: scale({zoom()});",
                            for camera in cameras {
                                {
                                    let (left, top) = pin_position(&camera);
                                    let pin_camera = camera.clone();
                                    rsx! {
                                        button {
                                            key: "{camera.id}",
                                            class: "city-map-pin pin-{camera.status.as_str()}",
                                            style: "left: {left}%; top: {top}%;",
                                            title: "{camera.name}",
                                            onclick: move |_| open_pin(pin_camera.clone()),
                                            Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
                                        }
                                    }
                                }
                            }
                            if view() == MapView::Traffic {
                                div { class: "city-map-traffic-note", "Traffic overlay active" }
                            }
                        }
                    }
                    div { class: "city-map-footer",
                        div { class: "city-map-legend",
                            span { class: "legend-dot dot-online", "Online" }
                            span { class: "legend-dot dot-offline", "Offline" }
                        }
                        if session.is_authenticated() {
                            span { class: "city-map-count", "Showing all {total} cameras" }
                        } else {
                            span { class: "city-map-count", "Limited view - sign in for full coverage" }
                        }
                    }
                }
            }
        }

        DialogRoot {
            open: dialog_open(),
            on_open_change: move |open| dialog_open.set(open),
            DialogContent { class: "cw-dialog-content city-map-dialog",
                if let Some(camera) = selected() {
                    {
                        let (variant, label) = pin_badge(camera.status);
                        let seen = camera.last_updated.format("%H:%M").to_string();
                        rsx! {
                            DialogTitle {
                                div { class: "city-map-dialog-title",
                                    "{camera.name}"
                                    Badge { variant: variant, "{label}" }
                                }
                            }
                            DialogDescription { "{camera.description}" }
                            if camera.status == PinStatus::Online {
                                div { class: "city-map-dialog-frame",
                                    Icon::<LdEye> { icon: LdEye, width: 32, height: 32 }
                                    span { "Live frame - updated {seen}" }
                                }
                            } else {
                                div { class: "city-map-dialog-frame offline",
                                    span { "Camera unavailable" }
                                    span { class: "city-map-dialog-meta", "Last seen {seen}" }
                                }
                            }
                            if session.is_authenticated() {
                                div { class: "city-map-dialog-actions",
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        Icon::<LdEye> { icon: LdEye, width: 14, height: 14 }
                                        "View Full Feed"
                                    }
                                    Button { variant: ButtonVariant::Outline, "History" }
                                }
                            } else {
                                Badge { variant: BadgeVariant::Outline, "Login for feed access" }
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
    use shared_types::{mock, UserRole};

    use super::*;

    #[test]
    fn traffic_view_requires_authentication() {
        let anon = ViewAccess::evaluate(false, UserRole::Admin);
        assert_eq!(
            available_views(&anon),
            vec![MapView::Standard, MapView::Satellite]
        );

        let signed_in = ViewAccess::evaluate(true, UserRole::Public);
        assert_eq!(
            available_views(&signed_in),
            vec![MapView::Standard, MapView::Satellite, MapView::Traffic]
        );
    }

    #[test]
    fn pin_badges_cover_both_reachability_states() {
        assert_eq!(
            pin_badge(PinStatus::Online),
            (BadgeVariant::Success, "Online")
        );
        assert_eq!(
            pin_badge(PinStatus::Offline),
            (BadgeVariant::Destructive, "Offline")
        );
    }

    #[test]
    fn pins_map_into_percentage_space() {
        let cameras = mock::map_cameras();
        let (left, top) = pin_position(&cameras[0]);
        assert_eq!(left, 25.0);
        assert!((top - 44.444).abs() < 0.01);

        for camera in &cameras {
            let (left, top) = pin_position(camera);
            assert!((0.0..=100.0).contains(&left));
            assert!((0.0..=100.0).contains(&top));
        }
    }
}
