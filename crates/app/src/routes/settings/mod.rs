mod notifications_section;
mod preferences_section;
mod profile_section;
mod support_section;
mod system_section;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, TabContent, TabList, TabTrigger, Tabs,
};

use crate::routes::Route;
use crate::session::use_view_access;

use notifications_section::NotificationsSection;
use preferences_section::PreferencesSection;
use profile_section::ProfileSection;
use support_section::SupportSection;
use system_section::SystemSection;

/// Settings page with tabbed sections.
///
/// Decomposed into sub-components to keep each function's stack frame small
/// enough for WASM's limited stack.
#[component]
pub fn Settings() -> Element {
    let access = use_view_access();

    if !access.settings_body {
        let notice = AppError::unauthorized("Sign in to manage your profile and preferences.");
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./settings.css") }
            div { class: "settings-locked",
                Card {
                    CardContent {
                        div { class: "settings-locked-body",
                            Icon::<LdLock> { icon: LdLock, width: 28, height: 28 }
                            h2 { "Authentication Required" }
                            p { "{notice.friendly_message()}" }
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

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            h1 { class: "settings-title", "Settings" }

            Tabs { default_value: "profile",
                TabList {
                    TabTrigger { value: "profile", index: 0usize, "Profile" }
                    TabTrigger { value: "notifications", index: 1usize, "Notifications" }
                    TabTrigger { value: "preferences", index: 2usize, "Preferences" }
                    if access.system_settings_tab {
                        TabTrigger { value: "system", index: 3usize, "System" }
                    }
                    TabTrigger { value: "support", index: 4usize, "Support" }
                }

                TabContent { value: "profile", index: 0usize, ProfileSection {} }
                TabContent { value: "notifications", index: 1usize, NotificationsSection {} }
                TabContent { value: "preferences", index: 2usize, PreferencesSection {} }
                if access.system_settings_tab {
                    TabContent { value: "system", index: 3usize, SystemSection {} }
                }
                TabContent { value: "support", index: 4usize, SupportSection {} }
            }
        }
    }
}
