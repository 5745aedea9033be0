//! zotero-scholar
//!
//! Search a Zotero library and enrich the chosen item with citation counts
//! from Semantic Scholar.
//!
//! # Features
//!
//! - **Two lookups**: Zotero item search, Semantic Scholar paper metadata
//! - **Single owner**: one [`SearchController`] holds the view state; lookups
//!   report back with tickets so stale responses are dropped
//! - **Transient notifications**: failures surface as 5-second toasts
//! - **Two front ends**: an interactive terminal view and a one-shot CLI
//!
//! # Example
//!
//! ```no_run
//! use zotero_scholar::{Config, SearchController, formatters};
//! use zotero_scholar::config::{Library, LibraryId};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new(Library::user(LibraryId::parse("475425")?));
//!     let mut controller = SearchController::from_config(&config)?;
//!
//!     controller.state_mut().set_query("graph theory");
//!     controller.search().await;
//!     println!("{}", formatters::format_view_markdown(controller.state()));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod formatters;
pub mod models;
pub mod notify;
pub mod state;
pub mod tui;

pub use client::{SemanticScholarClient, ZoteroClient};
pub use config::Config;
pub use controller::SearchController;
pub use error::{ClientError, ConfigError};
