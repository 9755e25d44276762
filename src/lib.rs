//! Terminal client for a movie catalog API: search, full listing, movie
//! details and similar movies.

pub mod api;
pub mod config;
pub mod models;
pub mod page;
pub mod render;
pub mod tui;
pub mod view;

pub use api::{CatalogApi, CatalogClient};
pub use config::Config;
pub use page::{ListKind, Page};
pub use view::{CatalogView, PageEvent};
