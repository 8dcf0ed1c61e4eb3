//! Button component for the web UI.
//!
//! Provides a configurable button component that renders as either
//! a `<button>` or `<a>` element based on whether an href is provided.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary button (default) - `.btn-primary`
    #[default]
    Primary,
    /// Secondary button - `.btn-secondary`
    Secondary,
    /// Danger button - `.btn-danger`
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Danger => "btn btn-danger",
        }
    }
}

/// A configurable button component.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// // Submit button for a form
/// let btn = Button::primary("Post").r#type("submit");
///
/// // Link-style button
/// let link_btn = Button::secondary("New Post").href("/create");
///
/// // Danger button with click handler
/// let delete_btn = Button::danger("Delete")
///     .onclick("return confirm('Delete this post?')");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    /// Button label text
    pub label: &'a str,
    /// Button style variant
    pub variant: ButtonVariant,
    /// Optional href (renders as `<a>` if present)
    pub href: Option<&'a str>,
    /// Button type attribute (for `<button>` elements)
    pub r#type: Option<&'a str>,
    /// Additional CSS classes
    pub class: Option<&'a str>,
    /// Element ID
    pub id: Option<&'a str>,
    /// JavaScript onclick handler
    pub onclick: Option<&'a str>,
}

impl<'a> Button<'a> {
    /// Creates a new button with the given label and variant.
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            href: None,
            r#type: None,
            class: None,
            id: None,
            onclick: None,
        }
    }

    /// Creates a primary button.
    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    /// Creates a secondary button.
    #[must_use]
    pub fn secondary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Secondary)
    }

    /// Creates a danger button.
    #[must_use]
    pub fn danger(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Danger)
    }

    /// Sets the href, rendering the button as an `<a>` element.
    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    /// Sets the button type attribute.
    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Adds additional CSS classes.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Sets the element ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the onclick handler.
    #[must_use]
    pub fn onclick(mut self, onclick: &'a str) -> Self {
        self.onclick = Some(onclick);
        self
    }

    /// Builds the full CSS class string.
    fn build_class(&self) -> String {
        let mut classes = self.variant.class().to_string();
        if let Some(extra) = self.class {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let classes = self.build_class();

        if let Some(href) = self.href {
            // Render as anchor element
            html! {
                a
                    class=(classes)
                    href=(href)
                    id=[self.id]
                    onclick=[self.onclick]
                {
                    (self.label)
                }
            }
        } else {
            // Render as button element
            html! {
                button
                    class=(classes)
                    type=(self.r#type.unwrap_or("button"))
                    id=[self.id]
                    onclick=[self.onclick]
                {
                    (self.label)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button() {
        let btn = Button::primary("Click me");
        let html = btn.render().into_string();
        assert!(html.contains("btn btn-primary"));
        assert!(html.contains("Click me"));
        assert!(html.contains("<button"));
    }

    #[test]
    fn test_secondary_button() {
        let btn = Button::secondary("Cancel");
        let html = btn.render().into_string();
        assert!(html.contains("btn-secondary"));
    }

    #[test]
    fn test_danger_button() {
        let btn = Button::danger("Delete");
        let html = btn.render().into_string();
        assert!(html.contains("btn-danger"));
    }

    #[test]
    fn test_button_with_href() {
        let btn = Button::primary("Link").href("/test");
        let html = btn.render().into_string();
        assert!(html.contains("<a"));
        assert!(html.contains("href=\"/test\""));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_button_with_type() {
        let btn = Button::primary("Submit").r#type("submit");
        let html = btn.render().into_string();
        assert!(html.contains("type=\"submit\""));
    }

    #[test]
    fn test_button_with_extra_class() {
        let btn = Button::primary("Styled").class("extra-class");
        let html = btn.render().into_string();
        assert!(html.contains("btn btn-primary extra-class"));
    }

    #[test]
    fn test_button_with_onclick() {
        let btn = Button::danger("Delete").onclick("return confirm('Sure?')");
        let html = btn.render().into_string();
        assert!(html.contains("onclick=\"return confirm('Sure?')\""));
    }

    #[test]
    fn test_default_button_type() {
        let btn = Button::primary("Default Type");
        let html = btn.render().into_string();
        assert!(html.contains("type=\"button\""));
    }

    #[test]
    fn test_button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
    }
}
