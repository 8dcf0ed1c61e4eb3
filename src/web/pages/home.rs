//! Home page: the post feed with inline remarks.

use std::collections::HashMap;

use maud::{html, Markup, PreEscaped};

use crate::components::{AlertVariant, BaseLayout, EmptyState, PostList};
use crate::db::{PostWithAuthor, RemarkWithAuthor, User};

/// Client-side remark capture. Selecting text inside a post body prompts
/// for a comment and submits it to `/add_remark`.
const REMARK_SCRIPT: &str = r#"
document.addEventListener('mouseup', function () {
    var selection = window.getSelection();
    if (!selection || selection.isCollapsed) return;
    var text = selection.toString().trim();
    if (!text) return;

    var node = selection.anchorNode;
    var el = node && (node.nodeType === 1 ? node : node.parentElement);
    var body = el && el.closest('.post-body');
    if (!body) return;

    var postId = parseInt(body.dataset.postId, 10);
    var remark = window.prompt('Remark on "' + text + '":');
    selection.removeAllRanges();
    if (remark === null) return;

    fetch('/add_remark', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
            post_id: postId,
            highlighted_text: text,
            remark_text: remark
        })
    }).then(function (resp) {
        if (resp.ok) {
            window.location.reload();
            return;
        }
        return resp.json().then(function (data) {
            window.alert(data.message || 'Could not add remark');
        });
    }).catch(function () {
        window.alert('Could not add remark');
    });
});
"#;

/// Parameters for rendering the home page.
#[derive(Debug)]
pub struct HomePageParams<'a> {
    /// Posts to display, newest first
    pub posts: &'a [PostWithAuthor],
    /// Remarks grouped by post id
    pub remarks_by_post: &'a HashMap<i64, Vec<RemarkWithAuthor>>,
    /// The logged-in user, if any
    pub user: Option<&'a User>,
    /// Flash message from the previous request
    pub flash: Option<(AlertVariant, &'a str)>,
}

impl<'a> HomePageParams<'a> {
    /// Create home page params without a flash message.
    #[must_use]
    pub const fn new(
        posts: &'a [PostWithAuthor],
        remarks_by_post: &'a HashMap<i64, Vec<RemarkWithAuthor>>,
        user: Option<&'a User>,
    ) -> Self {
        Self {
            posts,
            remarks_by_post,
            user,
            flash: None,
        }
    }

    /// Attach a flash message.
    #[must_use]
    pub const fn with_flash(mut self, flash: Option<(AlertVariant, &'a str)>) -> Self {
        self.flash = flash;
        self
    }
}

/// Render the home page.
#[must_use]
pub fn render_home_page(params: HomePageParams<'_>) -> Markup {
    let content = html! {
        div class="feed-header" {
            h1 { "Latest posts" }
            @if params.user.is_some() {
                p class="feed-hint" { "Select any text in a post to leave a remark on it." }
            } @else {
                p class="feed-hint" {
                    a href="/login" { "Log in" }
                    " to post and leave remarks."
                }
            }
        }

        @if params.posts.is_empty() {
            (EmptyState::no_posts())
        } @else {
            (PostList::new(params.posts, params.remarks_by_post, params.user))
        }

        @if params.user.is_some() {
            script { (PreEscaped(REMARK_SCRIPT)) }
        }
    };

    let mut layout = BaseLayout::new("Home", params.user);
    if let Some((variant, message)) = params.flash {
        layout = layout.with_flash(variant, message);
    }
    layout.render(content)
}
