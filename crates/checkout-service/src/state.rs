//! Application state for the checkout service.
//!
//! The minimal tiers for every score are computed once at startup, so each
//! request only filters and sorts a cached tier.

use std::sync::Arc;

use checkout_lib::{CheckoutBook, SegmentSheet};

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; share it via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    book: CheckoutBook,
    segments: SegmentSheet,
}

impl AppState {
    /// Build the checkout book and segment sheet.
    pub fn build() -> Self {
        tracing::info!("building checkout book");
        Self::from_book(CheckoutBook::build())
    }

    /// Create application state from a pre-built book.
    pub fn from_book(book: CheckoutBook) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                book,
                segments: SegmentSheet::build(),
            }),
        }
    }

    pub fn book(&self) -> &CheckoutBook {
        &self.inner.book
    }

    /// Score cheat sheet served by `GET /api/v1/segments`.
    pub fn segments(&self) -> &SegmentSheet {
        &self.inner.segments
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("targets_loaded", &self.inner.book.len())
            .field("checkouts", &self.inner.book.checkout_count())
            .finish()
    }
}
