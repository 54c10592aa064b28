pub mod cctv;
pub mod home;
pub mod map;
pub mod metrics;
pub mod not_found;
pub mod reports;
pub mod settings;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdFileText, LdMap, LdShield, LdTrendingUp, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::UiConfig;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, DropdownMenu,
    DropdownMenuContent, DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, Navbar,
    Switch, SwitchThumb,
};

use crate::components::auth_panel::initials;
use crate::session::{use_session, use_view_access};

use cctv::Cctv;
use home::Home;
use map::CityMapPage;
use metrics::Metrics;
use not_found::NotFound;
use reports::Reports;
use settings::Settings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/cctv")]
    Cctv {},
    #[route("/map")]
    CityMapPage {},
    #[route("/metrics")]
    Metrics {},
    #[route("/reports")]
    Reports {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn NavLink(to: Route, label: &'static str, active: bool, children: Element) -> Element {
    rsx! {
        Link {
            to: to,
            class: if active { "nav-link active" } else { "nav-link" },
            {children}
            "{label}"
        }
    }
}

/// Top navbar plus footer around every page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let access = use_view_access();
    let config: UiConfig = use_context();

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        is_dark: Signal::new(true),
    });

    let page_title = match &route {
        Route::Home {} => "Overview",
        Route::Cctv {} => "CCTV Grid",
        Route::CityMapPage {} => "City Map",
        Route::Metrics {} => "Metrics",
        Route::Reports {} => "Reports",
        Route::Settings {} => "Settings",
        Route::NotFound { .. } => "Not Found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "CityWatch - {page_title}" }

        div { class: "app-shell",
            Navbar {
                div { class: "navbar-bar",
                    Link { to: Route::Home {}, class: "navbar-brand",
                        Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                        span { "CityWatch" }
                    }

                    nav { class: "navbar-links",
                        NavLink {
                            to: Route::Cctv {},
                            label: "CCTV",
                            active: matches!(route, Route::Cctv {}),
                            Icon::<LdVideo> { icon: LdVideo, width: 15, height: 15 }
                        }
                        NavLink {
                            to: Route::CityMapPage {},
                            label: "Map",
                            active: matches!(route, Route::CityMapPage {}),
                            Icon::<LdMap> { icon: LdMap, width: 15, height: 15 }
                        }
                        NavLink {
                            to: Route::Metrics {},
                            label: "Metrics",
                            active: matches!(route, Route::Metrics {}),
                            Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 15, height: 15 }
                        }
                        NavLink {
                            to: Route::Reports {},
                            label: "Reports",
                            active: matches!(route, Route::Reports {}),
                            Icon::<LdFileText> { icon: LdFileText, width: 15, height: 15 }
                        }
                        if access.system_config_link {
                            NavLink {
                                to: Route::Settings {},
                                label: "System Config",
                                active: false,
                                Icon::<LdActivity> { icon: LdActivity, width: 15, height: 15 }
                            }
                        }
                    }

                    div { class: "navbar-spacer" }

                    Badge { variant: BadgeVariant::Success, "System Online" }

                    div { class: "navbar-theme",
                        span { class: "navbar-theme-label", "Dark" }
                        Switch {
                            checked: Some((theme_state.is_dark)()),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }

                    if let Some(user) = session.current_user.read().clone() {
                        DropdownMenu {
                            DropdownMenuTrigger {
                                Avatar {
                                    if let Some(url) = user.avatar_url.clone() {
                                        AvatarImage { src: url }
                                    }
                                    AvatarFallback { "{initials(&user.name)}" }
                                }
                            }
                            DropdownMenuContent {
                                DropdownMenuItem::<String> {
                                    value: "settings".to_string(),
                                    index: 0usize,
                                    on_select: move |_: String| {
                                        navigator().push(Route::Settings {});
                                    },
                                    "Settings"
                                }
                                DropdownMenuSeparator {}
                                DropdownMenuItem::<String> {
                                    value: "logout".to_string(),
                                    index: 1usize,
                                    on_select: move |_: String| {
                                        tracing::info!("operator signed out");
                                        session.clear();
                                        navigator().push(Route::Home {});
                                    },
                                    "Sign Out"
                                }
                            }
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                navigator().push(Route::Home {});
                            },
                            "Sign In"
                        }
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }

            footer { class: "app-footer",
                span { "CityWatch Surveillance Platform" }
                span { "v{config.app_version}" }
            }

            if config.show_dev_overlay {
                div { class: "dev-overlay", "Development build" }
            }
        }
    }
}
