use dioxus::prelude::*;
use shared_ui::theme::ThemeState;
use shared_ui::{Card, CardContent, Input, Separator, Switch, SwitchThumb};

/// Preferences tab: theme and dashboard refresh behaviour.
#[component]
pub fn PreferencesSection() -> Element {
    let mut theme_state: ThemeState = use_context();
    let mut auto_refresh = use_signal(|| true);
    let mut refresh_interval = use_signal(|| "30".to_string());

    rsx! {
        Card {
            CardContent {
                div { class: "settings-section",
                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Dark mode" }
                        Switch {
                            checked: Some((theme_state.is_dark)()),
                            on_checked_change: move |val: bool| {
                                theme_state.is_dark.set(val);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }

                    Separator {}

                    div { class: "settings-toggle-row",
                        span { class: "settings-toggle-label", "Auto-refresh dashboards" }
                        Switch {
                            checked: Some(auto_refresh()),
                            on_checked_change: move |val: bool| auto_refresh.set(val),
                            SwitchThumb {}
                        }
                    }

                    if auto_refresh() {
                        Input {
                            label: "Refresh interval (seconds)",
                            input_type: "number",
                            value: refresh_interval(),
                            on_input: move |evt: FormEvent| refresh_interval.set(evt.value()),
                        }
                    }
                }
            }
        }
    }
}
