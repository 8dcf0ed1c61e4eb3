//! Marginalia library.
//!
//! A minimal posting site where readers leave remarks on highlighted
//! spans of post text. Serves a maud-rendered web UI backed by SQLite.

pub mod auth;
pub mod components;
pub mod config;
pub mod db;
pub mod web;
