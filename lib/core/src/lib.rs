//! # depview Core
//!
//! Core library for depview, a browser for remote dependency graphs.
//!
//! This crate provides the data model and the paging logic, with no I/O:
//!
//! - [`Node`] / [`Dependency`] - graph snapshots, edges reference nodes by name
//! - [`ResultPage`] - one page of a paged listing
//! - [`page_window`] - which page numbers to offer for direct navigation
//! - [`EdgeView`] / [`NodeView`] - short names and property keys for display
//!
//! ## Example
//!
//! ```rust
//! use depview_core::{Node, ResultPage, short_name};
//!
//! let nodes: Vec<Node> = (0..25).map(|i| Node::new(format!("com.example.N{i}"))).collect();
//! let page = ResultPage::from_slice(&nodes, 0, 10).unwrap();
//!
//! assert_eq!(page.total_pages, 3);
//! assert_eq!(page.page_window(), vec![1, 2, 3]);
//! assert_eq!(short_name(&page.content[0].name), "N0");
//! ```

pub mod error;
pub mod model;
pub mod page;
pub mod view;
pub mod window;

pub use error::{Error, Result};
pub use model::{Dependency, GraphInfo, Node, Properties, Relation, MAX_BASE_DEPTH};
pub use page::ResultPage;
pub use view::{property_keys, short_name, EdgeView, NodeView};
pub use window::{page_window, page_window_with, MAX_VISIBLE_PAGES};
