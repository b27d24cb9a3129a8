//! Four Weeks - a single-page news front
//!
//! This crate serves the FOUR WEEKS home page. On startup the page fetches
//! news from `/api/news` once, falling back to placeholder items when the
//! fetch fails, and lists the items under a fixed set of categories.

pub mod config;
pub mod fetcher;
pub mod layout;
pub mod news;
pub mod page;
pub mod routes;
