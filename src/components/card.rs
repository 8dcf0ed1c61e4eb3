//! Card components for displaying posts and their remarks.
//!
//! This module provides maud components for rendering post cards and lists.

use std::collections::HashMap;

use maud::{html, Markup, Render};

use crate::db::{PostWithAuthor, RemarkWithAuthor, User};

const NO_REMARKS: &[RemarkWithAuthor] = &[];

/// Format an RFC 3339 timestamp for display, falling back to the raw string.
#[must_use]
pub fn format_timestamp(ts: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(ts)
        .map_or_else(|_| ts.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// A post card component showing a post with its remarks.
///
/// The delete control renders only when the viewer is the post's author.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let card = PostCard::new(&post, &remarks, viewer);
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a PostWithAuthor,
    pub remarks: &'a [RemarkWithAuthor],
    pub viewer: Option<&'a User>,
}

impl<'a> PostCard<'a> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(
        post: &'a PostWithAuthor,
        remarks: &'a [RemarkWithAuthor],
        viewer: Option<&'a User>,
    ) -> Self {
        Self {
            post,
            remarks,
            viewer,
        }
    }

    fn remark_count_label(&self) -> String {
        match self.remarks.len() {
            1 => "1 remark".to_string(),
            n => format!("{n} remarks"),
        }
    }

    fn viewer_is_author(&self) -> bool {
        self.viewer.is_some_and(|u| u.id == self.post.user_id)
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let delete_action = format!("/delete_post/{}", post.id);

        html! {
            article class="post-card" data-post-id=(post.id) {
                header class="post-header" {
                    span class="post-author" { "@" (post.author_username) }
                    span class="post-time" { (format_timestamp(&post.created_at)) }
                }
                p class="post-content" {
                    span class="post-body" data-post-id=(post.id) { (post.content) }
                }
                @if !self.remarks.is_empty() {
                    section class="remark-list" {
                        @for remark in self.remarks {
                            div class="remark" {
                                blockquote class="remark-highlight" { (remark.highlighted_text) }
                                p class="remark-text" {
                                    (remark.remark_text)
                                    " "
                                    cite class="remark-author" { "@" (remark.author_username) }
                                }
                            }
                        }
                    }
                }
                footer class="post-footer" {
                    span class="remark-count" { (self.remark_count_label()) }
                    @if self.viewer_is_author() {
                        form action=(delete_action) method="post" class="delete-form" {
                            button
                                class="btn btn-danger"
                                type="submit"
                                onclick="return confirm('Delete this post and its remarks?')"
                            {
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A list container rendering post cards newest-first with their remarks.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostList;
///
/// let list = PostList::new(&posts, &remarks_by_post, viewer);
/// ```
#[derive(Debug, Clone)]
pub struct PostList<'a> {
    pub posts: &'a [PostWithAuthor],
    pub remarks_by_post: &'a HashMap<i64, Vec<RemarkWithAuthor>>,
    pub viewer: Option<&'a User>,
}

impl<'a> PostList<'a> {
    /// Create a new post list.
    #[must_use]
    pub const fn new(
        posts: &'a [PostWithAuthor],
        remarks_by_post: &'a HashMap<i64, Vec<RemarkWithAuthor>>,
        viewer: Option<&'a User>,
    ) -> Self {
        Self {
            posts,
            remarks_by_post,
            viewer,
        }
    }
}

impl Render for PostList<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="post-list" {
                @for post in self.posts {
                    @let remarks = self
                        .remarks_by_post
                        .get(&post.id)
                        .map_or(NO_REMARKS, Vec::as_slice);
                    (PostCard::new(post, remarks, self.viewer))
                }
            }
        }
    }
}

/// An empty state component for when there are no posts.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Create a default "no posts" empty state.
    #[must_use]
    pub const fn no_posts() -> Self {
        Self {
            message: "No posts yet. Be the first to write one.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}
