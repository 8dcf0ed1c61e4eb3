//! Post composition page.

use maud::{html, Markup};

use crate::components::{AlertVariant, BaseLayout, Button, Form, TextArea};
use crate::db::User;

/// Render the "new post" page.
///
/// Only reachable by logged-in users; the handler redirects everyone else
/// to the login page.
#[must_use]
pub fn render_compose_page(user: &User, flash: Option<(AlertVariant, &str)>) -> Markup {
    let content = html! {
        div class="compose-container" {
            h1 { "New Post" }

            (Form::post("/create", html! {
                div class="form-group" {
                    label for="content" { "What do you want to say?" }
                    (TextArea::new("content")
                        .id("content")
                        .rows(6)
                        .placeholder("Write a short post. Readers can remark on any part of it.")
                        .required())
                }
                (Button::primary("Publish").r#type("submit"))
            }))

            p class="compose-hint" {
                a href="/" { "Back to the feed" }
            }
        }
    };

    let mut layout = BaseLayout::new("New Post", Some(user));
    if let Some((variant, message)) = flash {
        layout = layout.with_flash(variant, message);
    }
    layout.render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_compose_page_basic() {
        let user = test_user();
        let html = render_compose_page(&user, None).into_string();

        assert!(html.contains("<title>New Post - Marginalia</title>"));
        assert!(html.contains(r#"action="/create""#));
        assert!(html.contains(r#"name="content""#));
        assert!(html.contains("Publish"));
        // Logged-in nav
        assert!(html.contains("@alice"));
        assert!(html.contains(r#"href="/logout""#));
    }

    #[test]
    fn test_compose_page_with_flash() {
        let user = test_user();
        let html = render_compose_page(
            &user,
            Some((AlertVariant::Error, "Post content cannot be empty")),
        )
        .into_string();

        assert!(html.contains("Post content cannot be empty"));
    }
}
