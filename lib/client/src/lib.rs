//! # depview Client
//!
//! Remote access to a dependency graph served over a JSON REST API, and the
//! paging state behind a browsable node listing.
//!
//! - [`GraphClient`] - the four graph queries: info, node, node page, edge
//! - [`HttpGraphClient`] - reqwest implementation against the REST API
//! - [`PagedListNavigator`] - query + current page + page window for one listing
//!
//! ## Example
//!
//! ```rust,no_run
//! use depview_client::{ClientConfig, HttpGraphClient, PagedListNavigator};
//!
//! # async fn run() -> depview_core::Result<()> {
//! let client = HttpGraphClient::new(ClientConfig::new("http://localhost:8080/api"))?;
//! let mut nodes = PagedListNavigator::new(client);
//!
//! nodes.submit_query("com.example").await;
//! match nodes.error_message() {
//!     Some(message) => eprintln!("{message}"),
//!     None => {
//!         for node in nodes.content() {
//!             println!("{}", node.name);
//!         }
//!         println!("pages: {:?}", nodes.page_window());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod http;
pub mod navigator;

pub use client::GraphClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use http::HttpGraphClient;
pub use navigator::{LoadTicket, PagedListNavigator, DEFAULT_PAGE_SIZE};
