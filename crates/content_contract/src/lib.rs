//! Shared contract between the desktop compositor runtime and the content provider.
//!
//! The compositor never knows what lives inside a window; it asks the configured
//! [`ContentLoader`] for markup when an application opens and projects one of the
//! [`ContentPhase`] states into the window body in the meantime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque markup payload shown inside a window body.
///
/// The compositor treats this as a blob; only the provider understands its shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMarkup(pub String);

impl ContentMarkup {
    /// Returns the raw markup string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure modes of a content load request.
pub enum ContentLoadError {
    /// The provider has no content registered for the requested application.
    #[error("no content registered for app `{0}`")]
    UnknownApp(String),
    /// The provider failed to produce content (network, parse, ...).
    #[error("content load failed: {0}")]
    Failed(String),
}

/// Per-window content lifecycle as observed by the window body view.
///
/// A window may be revealed while its content is still loading; the design
/// explicitly tolerates showing [`ContentPhase::Loading`] in a visible window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentPhase {
    /// No load has been requested yet.
    #[default]
    Idle,
    /// A load is in flight; the window shows a placeholder.
    Loading,
    /// Content arrived and is projected into the window body.
    Ready(ContentMarkup),
    /// The load failed; the window shows an inline error with a retry affordance.
    Error(ContentLoadError),
}

impl ContentPhase {
    /// True when a retry affordance should be offered.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Asynchronous provider of window body markup, keyed by application id string.
pub trait ContentLoader {
    /// Loads the markup for `app_id`. May resolve after the window is already visible.
    fn load_content(&self, app_id: &str) -> LocalBoxFuture<'_, Result<ContentMarkup, ContentLoadError>>;
}

/// Shared handle to the configured content loader.
pub type SharedContentLoader = Rc<dyn ContentLoader>;

/// In-memory loader serving a fixed table of markup, used by the site entry crate
/// and by runtime tests.
pub struct StaticContentLoader {
    entries: Vec<(String, ContentMarkup)>,
}

impl StaticContentLoader {
    /// Builds a loader from `(app_id, markup)` pairs.
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, markup)| (id, ContentMarkup(markup)))
                .collect(),
        }
    }
}

impl ContentLoader for StaticContentLoader {
    fn load_content(&self, app_id: &str) -> LocalBoxFuture<'_, Result<ContentMarkup, ContentLoadError>> {
        let result = self
            .entries
            .iter()
            .find(|(id, _)| id == app_id)
            .map(|(_, markup)| markup.clone())
            .ok_or_else(|| ContentLoadError::UnknownApp(app_id.to_string()));
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn static_loader_serves_registered_entry() {
        let loader = StaticContentLoader::new(vec![(
            "about".to_string(),
            "<h1>About</h1>".to_string(),
        )]);

        let markup = block_on(loader.load_content("about")).expect("about content");
        assert_eq!(markup.as_str(), "<h1>About</h1>");
    }

    #[test]
    fn static_loader_reports_unknown_app() {
        let loader = StaticContentLoader::new(Vec::new());
        let err = block_on(loader.load_content("ghost")).unwrap_err();
        assert_eq!(err, ContentLoadError::UnknownApp("ghost".to_string()));
    }
}
