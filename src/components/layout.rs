//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation, and footer.

use maud::{html, Markup, DOCTYPE};

use super::alert::{Alert, AlertVariant};
use crate::db::User;

/// Base page layout builder.
///
/// Provides a fluent interface for constructing the main page layout
/// with required user context for authentication-aware navigation.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page", user.as_ref())
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    user: Option<&'a User>,
    flash: Option<(AlertVariant, &'a str)>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title and user.
    ///
    /// Pass `None` for anonymous visitors; the nav switches between
    /// login/register links and the logged-in menu based on this.
    #[must_use]
    pub fn new(title: &'a str, user: Option<&'a User>) -> Self {
        Self {
            title,
            user,
            flash: None,
        }
    }

    /// Attach a one-shot flash message rendered above the page content.
    #[must_use]
    pub fn with_flash(mut self, variant: AlertVariant, message: &'a str) -> Self {
        self.flash = Some((variant, message));
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " - Marginalia" }

                    link rel="stylesheet" href="/static/css/style.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>📝</text></svg>";
                }
                body {
                    (self.render_header())
                    main class="container" {
                        @if let Some((variant, message)) = self.flash {
                            (Alert::new(variant, message))
                        }
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    /// Render the page header with navigation.
    fn render_header(&self) -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/" {
                                strong class="site-logo" { "Marginalia" }
                            }
                        }
                    }
                    ul {
                        li { a href="/" { "Home" } }
                        (self.render_auth_nav())
                    }
                }
            }
        }
    }

    /// Render authentication-related navigation items.
    fn render_auth_nav(&self) -> Markup {
        match self.user {
            Some(u) => html! {
                li { a href="/create" { "New Post" } }
                li { span class="nav-user" { "@" (u.username) } }
                li { a href="/logout" { "Logout" } }
            },
            None => html! {
                li { a href="/login" { "Login" } }
                li { a href="/register" { "Register" } }
            },
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small {
                    "Marginalia: short posts with inline remarks"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test user for unit tests.
    fn test_user() -> User {
        User {
            id: 1,
            username: "testuser".to_string(),
            password_hash: "hash".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_base_layout_basic_structure() {
        let content = html! { h1 { "Test Content" } };
        let page = BaseLayout::new("Test Page", None).render(content);
        let html = page.into_string();

        // Check DOCTYPE and html structure
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));

        // Check head elements
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html
            .contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
        assert!(html.contains("<title>Test Page - Marginalia</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/css/style.css">"#));

        // Check body structure
        assert!(html.contains("<h1>Test Content</h1>"));
        assert!(html.contains(r#"<main class="container">"#));
        assert!(html.contains("<footer class=\"container\">"));
    }

    #[test]
    fn test_base_layout_anonymous_user() {
        let content = html! { p { "Content" } };
        let page = BaseLayout::new("Anonymous Test", None).render(content);
        let html = page.into_string();

        // Should show login and register links for anonymous users
        assert!(html.contains(r#"<a href="/login">Login</a>"#));
        assert!(html.contains(r#"<a href="/register">Register</a>"#));
        // Should not show logged-in navigation
        assert!(!html.contains(r#"<a href="/logout">"#));
        assert!(!html.contains(r#"<a href="/create">"#));
    }

    #[test]
    fn test_base_layout_logged_in_user() {
        let user = test_user();
        let content = html! { p { "Content" } };
        let page = BaseLayout::new("User Test", Some(&user)).render(content);
        let html = page.into_string();

        // Should show compose and logout links plus the username
        assert!(html.contains(r#"<a href="/create">New Post</a>"#));
        assert!(html.contains(r#"<a href="/logout">Logout</a>"#));
        assert!(html.contains("@testuser"));
        // Should not show login or register links
        assert!(!html.contains(r#"<a href="/login">"#));
        assert!(!html.contains(r#"<a href="/register">"#));
    }

    #[test]
    fn test_base_layout_with_flash() {
        let content = html! { p { "Content" } };
        let page = BaseLayout::new("Flash Test", None)
            .with_flash(AlertVariant::Success, "Post created!")
            .render(content);
        let html = page.into_string();

        assert!(html.contains(r#"<article class="success">"#));
        assert!(html.contains("Post created!"));
    }

    #[test]
    fn test_base_layout_without_flash() {
        let content = html! { p { "Content" } };
        let page = BaseLayout::new("No Flash Test", None).render(content);
        let html = page.into_string();

        assert!(!html.contains(r#"<article class="success">"#));
        assert!(!html.contains(r#"<article class="error">"#));
    }
}
