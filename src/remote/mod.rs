// SPDX-License-Identifier: MPL-2.0
//! Remote gallery fetch.
//!
//! When no pre-built category list is available, the viewer asks the gallery
//! endpoint for one: `GET {endpoint}?folder={name}` answering with the JSON
//! `Category[]`. There is a single success/failure branch and no retry; a
//! failure leaves the viewer with an empty, not-loading gallery.

use crate::config::{RemoteConfig, REMOTE_FOLDER_PARAM};
use crate::error::{Error, Result};
use crate::gallery::Category;

/// Load state of the category list shown by the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryFeed {
    /// Waiting for the fetch to complete.
    #[default]
    Loading,
    /// The list is available (possibly empty after a failed fetch).
    Ready(Vec<Category>),
}

impl GalleryFeed {
    /// Settles a fetch outcome. Failures are logged and become an empty list.
    #[must_use]
    pub fn resolve(result: Result<Vec<Category>>) -> Self {
        match result {
            Ok(categories) => GalleryFeed::Ready(categories),
            Err(err) => {
                tracing::error!(error = %err, "failed to load gallery");
                GalleryFeed::Ready(Vec::new())
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, GalleryFeed::Loading)
    }

    /// Categories available so far; empty while loading.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        match self {
            GalleryFeed::Loading => &[],
            GalleryFeed::Ready(categories) => categories,
        }
    }
}

/// HTTP client for the gallery endpoint.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GalleryClient {
    /// Builds a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("GalleryLens/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Self::new(config.endpoint.clone())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the category list, optionally restricted to one top folder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the endpoint is unreachable, answers
    /// with a non-success status, or sends a body that is not a category list.
    pub async fn fetch(&self, folder: Option<&str>) -> Result<Vec<Category>> {
        let mut request = self.http.get(&self.endpoint);
        if let Some(folder) = folder {
            request = request.query(&[(REMOTE_FOLDER_PARAM, folder)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP status: {status}")));
        }

        let body = response.text().await?;
        let categories: Vec<Category> = serde_json::from_str(&body)?;
        tracing::debug!(
            endpoint = %self.endpoint,
            categories = categories.len(),
            "fetched gallery"
        );
        Ok(categories)
    }

    /// Fetches and settles the outcome into a [`GalleryFeed`].
    pub async fn load(&self, folder: Option<&str>) -> GalleryFeed {
        GalleryFeed::resolve(self.fetch(folder).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Entry;

    #[test]
    fn feed_starts_loading_with_no_categories() {
        let feed = GalleryFeed::default();
        assert!(feed.is_loading());
        assert!(feed.categories().is_empty());
    }

    #[test]
    fn failed_fetch_becomes_empty_ready_feed() {
        let feed = GalleryFeed::resolve(Err(Error::Fetch("connection refused".into())));
        assert!(!feed.is_loading());
        assert!(feed.categories().is_empty());
    }

    #[test]
    fn successful_fetch_keeps_categories() {
        let category = Category {
            name: "clip".into(),
            path: "/pics/renders".into(),
            entries: vec![Entry::media("clip.mp4", "/pics/renders/clip.mp4")],
        };
        let feed = GalleryFeed::resolve(Ok(vec![category.clone()]));
        assert_eq!(feed.categories(), [category]);
    }

    #[test]
    fn client_keeps_configured_endpoint() {
        let client = GalleryClient::from_config(&RemoteConfig::default())
            .expect("client should build");
        assert_eq!(client.endpoint(), crate::config::DEFAULT_REMOTE_ENDPOINT);
    }
}
