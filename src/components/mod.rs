//! Maud HTML template components for the web UI.
//!
//! This module provides reusable maud components for generating HTML.
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `alert`: Alert messages (also used for flash rendering)
//! - `button`: Configurable button and link-button components
//! - `card`: Post cards with their remark lists
//! - `form`: Form elements and input components
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, Button, Input};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         h1 { "Hello World" }
//!         (Alert::success("Page loaded!"))
//!         (Button::primary("Click me"))
//!         (Input::text("username").placeholder("Enter username"))
//!     };
//!     BaseLayout::new("My Page", None).render(content)
//! }
//! ```

pub mod alert;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

// Re-export layout components
pub use layout::BaseLayout;

// Re-export alert components
pub use alert::{Alert, AlertVariant};

// Re-export button components
pub use button::{Button, ButtonVariant};

// Re-export card components
pub use card::{EmptyState, PostCard, PostList};

// Re-export form components
pub use form::{Form, Input, TextArea};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
