use std::sync::Arc;
use tracing::{debug, info};

use crate::api::CatalogApi;
use crate::models::MovieId;
use crate::page::{ListKind, Page};
use crate::render::{render_movie_details, render_movie_list};

/// User interactions the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    SubmitSearch,
    Click { list: ListKind, row: usize },
}

/// Drives a [`Page`] from the catalog API.
pub struct CatalogView {
    api: Arc<dyn CatalogApi>,
    page: Page,
}

impl CatalogView {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            page: Page::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Initial load: render the full catalog. A failed fetch leaves the
    /// catalog list as it was.
    pub async fn bootstrap(&mut self) {
        match self.api.all_movies().await {
            Some(movies) => render_movie_list(
                &mut self.page.catalog,
                &movies,
                ListKind::Catalog.empty_message(),
            ),
            None => debug!("Catalog not rendered, fetch failed"),
        }
    }

    /// Returns whether the event triggered any request.
    pub async fn dispatch(&mut self, event: PageEvent) -> bool {
        match event {
            PageEvent::SubmitSearch => self.submit_search().await,
            PageEvent::Click { list, row } => self.click(list, row).await,
        }
    }

    /// Search for the trimmed contents of the search input. Blank input is
    /// ignored and leaves the results untouched.
    pub async fn submit_search(&mut self) -> bool {
        let title = self.page.search_input.trim().to_string();
        if title.is_empty() {
            return false;
        }
        let movies = self.api.search_movies(&title).await;
        render_movie_list(
            &mut self.page.search_results,
            &movies,
            ListKind::SearchResults.empty_message(),
        );
        true
    }

    /// Click on a row of one of the movie lists. Placeholder rows are inert.
    pub async fn click(&mut self, list: ListKind, row: usize) -> bool {
        let Some(id) = self
            .page
            .list(list)
            .row(row)
            .and_then(|r| r.target.clone())
        else {
            return false;
        };
        self.show_movie(&id).await;
        true
    }

    /// Open the details wrapper, then fetch the card and the similar movies
    /// together and render both once both have answered.
    pub async fn show_movie(&mut self, id: &MovieId) {
        info!("Showing movie {}", id);
        self.page.details_wrapper_visible = true;

        let (details, similar) = tokio::join!(
            self.api.movie_details(id),
            self.api.similar_movies(id)
        );

        render_movie_details(&mut self.page.details, details.as_ref());
        render_movie_list(
            &mut self.page.similar,
            &similar,
            ListKind::Similar.empty_message(),
        );
    }
}
