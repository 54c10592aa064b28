use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, Input};

use crate::session::use_session;

/// Profile tab: display name, email and title for the signed-in operator.
#[component]
pub fn ProfileSection() -> Element {
    let session = use_session();

    let (init_name, init_email, init_title) = {
        let guard = session.current_user.read();
        match guard.as_ref() {
            Some(user) => (user.name.clone(), user.email.clone(), user.title.clone()),
            None => (String::new(), String::new(), String::new()),
        }
    };

    let mut name = use_signal(move || init_name);
    let mut email = use_signal(move || init_email);
    let mut title = use_signal(move || init_title);
    let mut saved = use_signal(|| false);

    rsx! {
        Card {
            CardContent {
                div { class: "settings-section",
                    Input {
                        label: "Display Name",
                        value: name(),
                        on_input: move |evt: FormEvent| {
                            name.set(evt.value());
                            saved.set(false);
                        },
                    }
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        on_input: move |evt: FormEvent| {
                            email.set(evt.value());
                            saved.set(false);
                        },
                    }
                    Input {
                        label: "Title",
                        value: title(),
                        on_input: move |evt: FormEvent| {
                            title.set(evt.value());
                            saved.set(false);
                        },
                    }
                    div { class: "settings-section-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                tracing::info!(name = %name(), "profile updated");
                                saved.set(true);
                            },
                            "Save Changes"
                        }
                        if saved() {
                            span { class: "settings-saving-indicator", "Saved" }
                        }
                    }
                }
            }
        }
    }
}
