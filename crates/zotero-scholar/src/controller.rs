//! The search view-controller.
//!
//! Owns the [`ViewState`] and the [`NotificationCenter`] and drives the two
//! lookups. Each lookup can run inline (`search`, `select`) or on a spawned
//! task (`spawn_search`, `spawn_select`) that reports back through a channel
//! of [`Completion`]s; either way the outcome goes through [`SearchController::apply`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::client::{CitationLookup, ItemSearch, SemanticScholarClient, ZoteroClient, build_http_client};
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{ResultItem, SupplementalMetadata};
use crate::notify::{ENRICHMENT_FAILED_TITLE, NotificationCenter, SEARCH_FAILED_TITLE};
use crate::state::{Applied, EnrichmentTicket, SearchTicket, ViewState};

/// The two remote collaborators.
#[derive(Clone)]
pub struct Services {
    /// Bibliographic search (Zotero).
    pub search: Arc<dyn ItemSearch>,

    /// Citation metadata (Semantic Scholar).
    pub citations: Arc<dyn CitationLookup>,
}

impl Services {
    /// Build both HTTP clients from configuration, sharing one connection pool.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = build_http_client(config)?;
        Ok(Self {
            search: Arc::new(ZoteroClient::with_http_client(http.clone(), config)),
            citations: Arc::new(SemanticScholarClient::with_http_client(http, config)),
        })
    }

    /// Wrap arbitrary implementations.
    #[must_use]
    pub fn new(search: Arc<dyn ItemSearch>, citations: Arc<dyn CitationLookup>) -> Self {
        Self { search, citations }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Outcome of a lookup that ran on a spawned task.
#[derive(Debug)]
pub enum Completion {
    /// A search finished.
    Search {
        /// Ticket from `begin_search`.
        ticket: SearchTicket,
        /// Items or failure.
        outcome: ClientResult<Vec<ResultItem>>,
    },
    /// A metadata lookup finished.
    Enrichment {
        /// Ticket from `select`.
        ticket: EnrichmentTicket,
        /// Metadata or failure.
        outcome: ClientResult<SupplementalMetadata>,
    },
}

/// Sender half used by spawned lookups.
pub type CompletionSender = mpsc::UnboundedSender<Completion>;

/// Receiver half drained by the owner of the controller.
pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion>;

/// Create a completion channel.
#[must_use]
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    mpsc::unbounded_channel()
}

/// View-controller for the search screen.
#[derive(Debug)]
pub struct SearchController {
    services: Services,
    state: ViewState,
    notifications: NotificationCenter,
}

impl SearchController {
    /// Create a controller with empty state.
    #[must_use]
    pub fn new(services: Services, notification_duration: Duration) -> Self {
        Self {
            services,
            state: ViewState::new(),
            notifications: NotificationCenter::new(notification_duration),
        }
    }

    /// Create a controller talking to the real services.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(Services::from_config(config)?, config.notification_duration))
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mutable view state, for query editing.
    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Active and not-yet-pruned notifications.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Mutable notifications, for dismissal and pruning.
    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// Run a search for the current query and wait for it.
    pub async fn search(&mut self) -> Applied {
        let ticket = self.state.begin_search();
        let outcome = self.services.search.search_items(&ticket.query).await;
        self.apply(Completion::Search { ticket, outcome })
    }

    /// Select an item and wait for its metadata.
    pub async fn select(&mut self, item: ResultItem) -> Applied {
        let ticket = self.state.select(item);
        let outcome = self.services.citations.paper_metadata(&ticket.key).await;
        self.apply(Completion::Enrichment { ticket, outcome })
    }

    /// Start a search on a spawned task.
    ///
    /// Loading is set before this returns.
    pub fn spawn_search(&mut self, tx: &CompletionSender) -> SearchTicket {
        let ticket = self.state.begin_search();
        tracing::info!(seq = ticket.seq, query = %ticket.query, "Search started");

        let search = Arc::clone(&self.services.search);
        let tx = tx.clone();
        let task_ticket = ticket.clone();
        tokio::spawn(async move {
            let outcome = search.search_items(&task_ticket.query).await;
            // Receiver gone means the view has exited.
            let _ = tx.send(Completion::Search { ticket: task_ticket, outcome });
        });

        ticket
    }

    /// Select an item and fetch its metadata on a spawned task.
    ///
    /// The selection is visible before this returns.
    pub fn spawn_select(&mut self, item: ResultItem, tx: &CompletionSender) -> EnrichmentTicket {
        let ticket = self.state.select(item);
        self.spawn_enrichment(ticket, tx)
    }

    /// Select the result at `index` on a spawned task.
    pub fn spawn_select_index(
        &mut self,
        index: usize,
        tx: &CompletionSender,
    ) -> Option<EnrichmentTicket> {
        let ticket = self.state.select_index(index)?;
        Some(self.spawn_enrichment(ticket, tx))
    }

    fn spawn_enrichment(&self, ticket: EnrichmentTicket, tx: &CompletionSender) -> EnrichmentTicket {
        tracing::info!(seq = ticket.seq, key = %ticket.key, "Item selected");

        let citations = Arc::clone(&self.services.citations);
        let tx = tx.clone();
        let task_ticket = ticket.clone();
        tokio::spawn(async move {
            let outcome = citations.paper_metadata(&task_ticket.key).await;
            let _ = tx.send(Completion::Enrichment { ticket: task_ticket, outcome });
        });

        ticket
    }

    /// Apply a finished lookup to the state, notifying on failure.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        match completion {
            Completion::Search { ticket, outcome } => {
                let applied = self.state.finish_search(&ticket, &outcome);
                match (&outcome, applied) {
                    (Ok(items), Applied::Updated) => {
                        tracing::info!(seq = ticket.seq, count = items.len(), "Search finished");
                    }
                    (Err(err), Applied::Failed) => {
                        tracing::warn!(
                            seq = ticket.seq,
                            status = err.status_code(),
                            transport = err.is_transport(),
                            error = %err,
                            "Search failed"
                        );
                        self.notifications.error(SEARCH_FAILED_TITLE, err.to_string());
                    }
                    _ => {}
                }
                applied
            }
            Completion::Enrichment { ticket, outcome } => {
                let applied = self.state.finish_enrichment(&ticket, &outcome);
                match (&outcome, applied) {
                    (Ok(_), Applied::Updated) => {
                        tracing::info!(seq = ticket.seq, key = %ticket.key, "Metadata merged");
                    }
                    (Err(err), Applied::Failed) => {
                        tracing::warn!(
                            key = %ticket.key,
                            status = err.status_code(),
                            transport = err.is_transport(),
                            error = %err,
                            "Metadata lookup failed"
                        );
                        self.notifications.error(ENRICHMENT_FAILED_TITLE, err.to_string());
                    }
                    _ => {}
                }
                applied
            }
        }
    }
}
