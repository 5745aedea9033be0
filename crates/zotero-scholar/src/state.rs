//! View state and its transitions.
//!
//! Every transition is synchronous. Network work happens elsewhere and comes
//! back through [`ViewState::finish_search`] and [`ViewState::finish_enrichment`]
//! with the ticket that was handed out when the work started. A completion
//! whose ticket is no longer current is dropped, so overlapping requests can
//! never overwrite newer state.

use crate::error::ClientError;
use crate::models::{ResultItem, SelectedItem, SupplementalMetadata};

/// Handed out by [`ViewState::begin_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    /// Sequence number of this search.
    pub seq: u64,

    /// Query text at the moment the search started.
    pub query: String,
}

/// Handed out by [`ViewState::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentTicket {
    /// Sequence number of this selection.
    pub seq: u64,

    /// Key of the item being enriched.
    pub key: String,
}

/// What a completion did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The outcome was a success and was written to the state.
    Updated,
    /// The outcome was a failure; the caller should notify the user.
    Failed,
    /// The ticket was stale; nothing changed.
    Stale,
}

/// State rendered by the view.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    query: String,
    results: Vec<ResultItem>,
    loading: bool,
    selected: Option<SelectedItem>,
    search_seq: u64,
    selection_seq: u64,
}

impl ViewState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Append one typed character to the query.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character of the query.
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Search results in response order.
    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// True between the start of the latest search and its completion.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The selected item, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedItem> {
        self.selected.as_ref()
    }

    /// Start a search for the current query.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.search_seq += 1;
        self.loading = true;
        SearchTicket { seq: self.search_seq, query: self.query.clone() }
    }

    /// Apply the outcome of a search.
    ///
    /// On success the results are replaced verbatim. On failure they are left
    /// as they were. Loading is cleared either way.
    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: &Result<Vec<ResultItem>, ClientError>,
    ) -> Applied {
        if ticket.seq != self.search_seq {
            tracing::debug!(seq = ticket.seq, current = self.search_seq, "Dropping stale search result");
            return Applied::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(items) => {
                self.results.clone_from(items);
                Applied::Updated
            }
            Err(_) => Applied::Failed,
        }
    }

    /// Select an item. The selection is visible immediately, before any
    /// metadata is fetched.
    pub fn select(&mut self, item: ResultItem) -> EnrichmentTicket {
        self.selection_seq += 1;
        let key = item.key.clone();
        self.selected = Some(SelectedItem::new(item));
        EnrichmentTicket { seq: self.selection_seq, key }
    }

    /// Select the result at `index`, if it exists.
    pub fn select_index(&mut self, index: usize) -> Option<EnrichmentTicket> {
        let item = self.results.get(index)?.clone();
        Some(self.select(item))
    }

    /// Apply the outcome of a metadata lookup.
    ///
    /// On success the metadata is merged into the current selection. On
    /// failure the selection keeps its base fields.
    pub fn finish_enrichment(
        &mut self,
        ticket: &EnrichmentTicket,
        outcome: &Result<SupplementalMetadata, ClientError>,
    ) -> Applied {
        let current = self.selected.as_ref().is_some_and(|s| s.key() == ticket.key);
        if ticket.seq != self.selection_seq || !current {
            tracing::debug!(
                seq = ticket.seq,
                current = self.selection_seq,
                key = %ticket.key,
                "Dropping stale enrichment result"
            );
            return Applied::Stale;
        }

        match outcome {
            Ok(metadata) => {
                self.selected = self
                    .selected
                    .take()
                    .map(|selected| selected.with_metadata(metadata.clone()));
                Applied::Updated
            }
            Err(_) => Applied::Failed,
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection_seq += 1;
        self.selected = None;
    }
}
