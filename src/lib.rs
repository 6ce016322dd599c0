//! # depview
//!
//! Browse a dependency graph served by a remote analysis service.
//!
//! Nodes are code or architecture units, dependencies are typed edges between
//! them. The service owns the graph; depview fetches nodes and edges on demand
//! and pages through filtered node listings.
//!
//! ## Quick Start
//!
//! ### From the terminal
//!
//! ```bash
//! depview --api-url http://localhost:8080/api nodes --query com.example --page 2
//! depview node com.example.Service
//! depview edge com.example.Service com.example.Repository --depth 2
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use depview::prelude::*;
//!
//! # async fn run() -> depview::Result<()> {
//! let client = HttpGraphClient::new(ClientConfig::new("http://localhost:8080/api"))?;
//!
//! let node = client.fetch_node("com.example.Service").await?;
//! for dep in &node.outgoing_deps {
//!     let view = EdgeView::new(dep);
//!     println!("{} ({})", view.title(), dep.type_name);
//! }
//!
//! let mut listing = PagedListNavigator::new(client);
//! listing.load(0, 30).await;
//! println!("{:?}", listing.page_window());
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `depview-core` - data model, result pages, page window, display helpers
//! - `depview-client` - REST client and paged list navigation

pub mod render;

// Re-export core types
pub use depview_core::{
    Dependency, GraphInfo, Node, Properties, Relation,
    ResultPage, EdgeView, NodeView,
    page_window, short_name, property_keys,
    Error, Result,
};

// Re-export client
pub use depview_client::{ClientConfig, GraphClient, HttpGraphClient, LoadTicket, PagedListNavigator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Dependency, GraphInfo, Node, Properties, Relation,
        ResultPage, EdgeView, NodeView,
        page_window, short_name, property_keys,
        Error, Result,
        ClientConfig, GraphClient, HttpGraphClient, PagedListNavigator,
    };
}
