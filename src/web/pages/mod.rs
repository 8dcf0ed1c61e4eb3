//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete
//! HTML document via [`crate::components::BaseLayout`].

pub mod auth;
pub mod compose;
pub mod home;

// Re-export page rendering functions for convenience
pub use auth::{render_login_page, render_register_page};
pub use compose::render_compose_page;
pub use home::{render_home_page, HomePageParams};
