//! # Spektor blog
//!
//! A personal blog served from Markdown. Content is loaded once into a
//! [`models::Content`] snapshot (and reloaded on change in development); each
//! request renders a page as a pure function of that snapshot.
//!
//! Rendering is layered, and data only flows downward:
//!
//! ```text
//! pages        BlogIndex, BlogPost, NotFound
//! components   Layout, Seo, Bio, Tags
//! system       card, span, flex, list, link + Style
//! theme        breakpoints, space scale, rhythm/scale
//! ```

pub mod components;
pub mod config;
pub mod content_loader;
pub mod hot_reload;
pub mod markdown;
pub mod models;
pub mod pages;
pub mod routes;
pub mod state;
pub mod system;
pub mod theme;
