//! tradeviz-site - static site build configuration
//!
//! The page is built as a static site: prerendered pages and assets in an
//! output directory, a single-page fallback, and a base path that differs
//! between local development (served from the root) and the deployed site
//! (served under a path prefix). [`SiteConfig`] carries those knobs;
//! [`SiteConfig::from_env`] selects the environment from `TRADEVIZ_ENV`.

pub mod config;

pub use config::*;
