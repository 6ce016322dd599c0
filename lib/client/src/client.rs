use std::future::Future;
use depview_core::{Dependency, Node, Result, ResultPage};

/// Resolves graph entities from a remote source.
///
/// Every call is a single request with exactly one outcome. Implementations do
/// not cache and do not retry.
pub trait GraphClient {
    /// Free-text summary of the graph dataset.
    fn fetch_graph_info(&self) -> impl Future<Output = Result<String>> + Send;

    /// A single node by its unique name. Any failure means the node could not
    /// be loaded.
    fn fetch_node(&self, name: &str) -> impl Future<Output = Result<Node>> + Send;

    /// Page `page` (0-based) of the nodes matching `query`. An empty query
    /// lists all nodes; the filter syntax belongs to the server. No matches is
    /// an empty page, not an error.
    fn fetch_nodes(
        &self,
        query: &str,
        page: u32,
        size: u32,
    ) -> impl Future<Output = Result<ResultPage<Node>>> + Send;

    /// The edge from `from` to `to`.
    fn fetch_edge(&self, from: &str, to: &str) -> impl Future<Output = Result<Dependency>> + Send;
}
