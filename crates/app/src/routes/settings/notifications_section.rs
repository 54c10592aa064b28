use dioxus::prelude::*;
use shared_ui::{Card, CardContent, Separator, Switch, SwitchThumb};

#[component]
fn ToggleRow(label: &'static str, value: Signal<bool>) -> Element {
    let mut value = value;
    rsx! {
        div { class: "settings-toggle-row",
            span { class: "settings-toggle-label", "{label}" }
            Switch {
                checked: Some(value()),
                on_checked_change: move |val: bool| value.set(val),
                SwitchThumb {}
            }
        }
    }
}

/// Notifications tab: delivery channels and alert categories.
#[component]
pub fn NotificationsSection() -> Element {
    let email_alerts = use_signal(|| true);
    let push_alerts = use_signal(|| false);
    let sms_alerts = use_signal(|| true);
    let incident_alerts = use_signal(|| true);
    let maintenance_alerts = use_signal(|| false);

    rsx! {
        Card {
            CardContent {
                div { class: "settings-section",
                    ToggleRow { label: "Email notifications", value: email_alerts }
                    Separator {}
                    ToggleRow { label: "Push notifications", value: push_alerts }
                    Separator {}
                    ToggleRow { label: "SMS alerts", value: sms_alerts }
                    Separator {}
                    ToggleRow { label: "Incident alerts", value: incident_alerts }
                    Separator {}
                    ToggleRow { label: "Maintenance notices", value: maintenance_alerts }
                }
            }
        }
    }
}
