use dioxus::prelude::*;

/// Visual variant for badges.
///
/// `Success` and `Warning` back the camera / incident status colors used
/// all over the dashboard, so they live here rather than in page CSS.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
        }
    }
}

/// Inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "cw-badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_renders_variant_data_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Success, "Online" }
        });
        assert!(html.contains("cw-badge"), "got {html}");
        assert!(html.contains(r#"data-style="success""#), "got {html}");
        assert!(html.contains("Online"), "got {html}");
    }

    #[test]
    fn badge_defaults_to_primary() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { "3" }
        });
        assert!(html.contains(r#"data-style="primary""#), "got {html}");
    }
}
