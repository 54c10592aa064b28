use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdMonitor, LdPhone};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, Separator};

/// Support tab: contact channels for operators and the public.
#[component]
pub fn SupportSection() -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "settings-section",
                    div { class: "settings-contact-row",
                        Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 }
                        div { class: "settings-contact-body",
                            span { class: "settings-toggle-label", "Emergency" }
                            span { class: "settings-value", "911" }
                        }
                    }

                    Separator {}

                    div { class: "settings-contact-row",
                        Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 }
                        div { class: "settings-contact-body",
                            span { class: "settings-toggle-label", "Operations desk" }
                            span { class: "settings-value", "(555) 123-4567" }
                        }
                    }

                    Separator {}

                    div { class: "settings-contact-row",
                        Icon::<LdMail> { icon: LdMail, width: 16, height: 16 }
                        div { class: "settings-contact-body",
                            span { class: "settings-toggle-label", "Technical support" }
                            span { class: "settings-value", "support@smartcity.gov" }
                        }
                    }

                    Separator {}

                    div { class: "settings-contact-row",
                        Icon::<LdMonitor> { icon: LdMonitor, width: 16, height: 16 }
                        div { class: "settings-contact-body",
                            span { class: "settings-toggle-label", "Status page" }
                            span { class: "settings-value", "status.smartcity.gov" }
                        }
                    }
                }
            }
        }
    }
}
