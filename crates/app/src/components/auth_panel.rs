use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLock, LdLogOut, LdUser};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, CardHeader, CardTitle, Input, Separator, TabContent, TabList, TabTrigger, Tabs,
};

use crate::session::{authenticate, use_session};

/// Initials for the avatar fallback, first letter of the first two words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn role_badge(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Primary,
        UserRole::Security => BadgeVariant::Success,
        UserRole::CityOfficial => BadgeVariant::Secondary,
        UserRole::Public => BadgeVariant::Outline,
    }
}

#[component]
pub fn AuthPanel() -> Element {
    let mut session = use_session();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    // Last in-flight sign-in. A new submit cancels it so a slow attempt can
    // never overwrite the session after a later one settled.
    let mut login_task = use_signal(|| None::<Task>);

    let mut request_name = use_signal(String::new);
    let mut request_email = use_signal(String::new);
    let mut request_sent = use_signal(|| false);

    let mut handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(task) = login_task.take() {
            task.cancel();
        }
        field_errors.set(HashMap::new());
        form_error.set(None);
        submitting.set(true);

        let attempt_email = email();
        let attempt_password = password();
        let task = spawn(async move {
            match authenticate(attempt_email, attempt_password).await {
                Ok(user) => {
                    session.set_user(user);
                    email.set(String::new());
                    password.set(String::new());
                }
                Err(err) => {
                    field_errors.set(err.field_errors.clone());
                    form_error.set(Some(err.friendly_message()));
                }
            }
            submitting.set(false);
            login_task.set(None);
        });
        login_task.set(Some(task));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth_panel.css") }

        if let Some(user) = session.current_user.read().clone() {
            Card { class: "auth-panel",
                CardContent {
                    div { class: "auth-user",
                        Avatar {
                            if let Some(url) = user.avatar_url.clone() {
                                AvatarImage { src: url }
                            }
                            AvatarFallback { "{initials(&user.name)}" }
                        }
                        div { class: "auth-user-identity",
                            span { class: "auth-user-name", "{user.name}" }
                            span { class: "auth-user-email", "{user.email}" }
                        }
                    }
                    div { class: "auth-user-meta",
                        Badge { variant: role_badge(user.role), "{user.role.label()}" }
                        Badge { variant: BadgeVariant::Success, "Active" }
                        span { class: "auth-user-title", "{user.title}" }
                    }
                    p { class: "auth-user-session", "Signed in this session" }
                    Separator {}
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            tracing::info!("operator signed out");
                            session.clear();
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 14, height: 14 }
                        "Sign Out"
                    }
                }
            }
        } else {
            Card { class: "auth-panel",
                CardHeader {
                    CardTitle {
                        div { class: "auth-panel-title",
                            Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                            "Operator Access"
                        }
                    }
                }
                CardContent {
                    Tabs { default_value: "login",
                        TabList {
                            TabTrigger { value: "login", index: 0usize, "Sign In" }
                            TabTrigger { value: "request", index: 1usize, "Request Access" }
                        }
                        TabContent { value: "login", index: 0usize,
                            form { class: "auth-form", onsubmit: move |evt| handle_login(evt),
                                Input {
                                    label: "Email",
                                    input_type: "email",
                                    placeholder: "you@smartcity.gov",
                                    value: email(),
                                    on_input: move |evt: FormEvent| email.set(evt.value()),
                                    error: field_errors.read().get("email").cloned(),
                                }
                                Input {
                                    label: "Password",
                                    input_type: "password",
                                    placeholder: "Password",
                                    value: password(),
                                    on_input: move |evt: FormEvent| password.set(evt.value()),
                                    error: field_errors.read().get("password").cloned(),
                                }
                                if let Some(message) = form_error() {
                                    p { class: "auth-form-error", "{message}" }
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    r#type: "submit",
                                    disabled: submitting(),
                                    if submitting() { "Signing in..." } else { "Sign In" }
                                }
                            }
                        }
                        TabContent { value: "request", index: 1usize,
                            if request_sent() {
                                div { class: "auth-request-sent",
                                    Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                                    p { "Request received. The operations team will review it within two business days." }
                                }
                            } else {
                                form {
                                    class: "auth-form",
                                    onsubmit: move |evt: FormEvent| {
                                        evt.prevent_default();
                                        request_sent.set(true);
                                    },
                                    Input {
                                        label: "Full Name",
                                        placeholder: "Jane Smith",
                                        value: request_name(),
                                        on_input: move |evt: FormEvent| request_name.set(evt.value()),
                                    }
                                    Input {
                                        label: "Work Email",
                                        input_type: "email",
                                        placeholder: "you@smartcity.gov",
                                        value: request_email(),
                                        on_input: move |evt: FormEvent| request_email.set(evt.value()),
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        r#type: "submit",
                                        "Request Access"
                                    }
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
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Ada"), "A");
        assert_eq!(initials("mara   v.  keene"), "MV");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn operator_roles_get_distinct_badges() {
        assert_eq!(role_badge(UserRole::Admin), BadgeVariant::Primary);
        assert_eq!(role_badge(UserRole::Security), BadgeVariant::Success);
        assert_eq!(role_badge(UserRole::Public), BadgeVariant::Outline);
    }
}
