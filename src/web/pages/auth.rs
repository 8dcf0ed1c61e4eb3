//! Login and registration pages.

use maud::{html, Markup};

use crate::components::{AlertVariant, BaseLayout, Button, Form, Input};

/// Render the login page.
#[must_use]
pub fn render_login_page(flash: Option<(AlertVariant, &str)>) -> Markup {
    let content = html! {
        div class="auth-container" {
            h1 { "Login" }

            (Form::post("/login", html! {
                div class="form-group" {
                    label for="username" { "Username" }
                    (Input::text("username")
                        .id("username")
                        .required()
                        .autocomplete("username"))
                }
                div class="form-group" {
                    label for="password" { "Password" }
                    (Input::password("password")
                        .id("password")
                        .required()
                        .autocomplete("current-password"))
                }
                (Button::primary("Login").r#type("submit"))
            }))

            p class="auth-switch" {
                "No account yet? "
                a href="/register" { "Register" }
            }
        }
    };

    layout_with_flash("Login", flash).render(content)
}

/// Render the registration page.
#[must_use]
pub fn render_register_page(flash: Option<(AlertVariant, &str)>) -> Markup {
    let content = html! {
        div class="auth-container" {
            h1 { "Register" }

            (Form::post("/register", html! {
                div class="form-group" {
                    label for="username" { "Username" }
                    (Input::text("username")
                        .id("username")
                        .required()
                        .autocomplete("username"))
                }
                div class="form-group" {
                    label for="password" { "Password" }
                    (Input::password("password")
                        .id("password")
                        .required()
                        .autocomplete("new-password"))
                }
                (Button::primary("Register").r#type("submit"))
            }))

            p class="auth-switch" {
                "Already have an account? "
                a href="/login" { "Login" }
            }
        }
    };

    layout_with_flash("Register", flash).render(content)
}

fn layout_with_flash<'a>(title: &'a str, flash: Option<(AlertVariant, &'a str)>) -> BaseLayout<'a> {
    let layout = BaseLayout::new(title, None);
    match flash {
        Some((variant, message)) => layout.with_flash(variant, message),
        None => layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_basic() {
        let html = render_login_page(None).into_string();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Login - Marginalia</title>"));
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="password""#));
        assert!(html.contains(r#"href="/register""#));
    }

    #[test]
    fn test_login_page_with_flash_error() {
        let html =
            render_login_page(Some((AlertVariant::Error, "Invalid username or password")))
                .into_string();

        assert!(html.contains("Invalid username or password"));
        assert!(html.contains("error"));
    }

    #[test]
    fn test_register_page_basic() {
        let html = render_register_page(None).into_string();

        assert!(html.contains("<title>Register - Marginalia</title>"));
        assert!(html.contains(r#"action="/register""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="password""#));
        assert!(html.contains(r#"href="/login""#));
    }

    #[test]
    fn test_register_page_with_flash_error() {
        let html = render_register_page(Some((
            AlertVariant::Error,
            "That username is already taken",
        )))
        .into_string();

        assert!(html.contains("That username is already taken"));
    }

    #[test]
    fn test_flash_message_is_escaped() {
        let html = render_login_page(Some((
            AlertVariant::Error,
            "<script>alert('xss')</script>",
        )))
        .into_string();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
