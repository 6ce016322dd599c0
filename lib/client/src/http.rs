// REST access to the graph API over reqwest
use depview_core::{Dependency, Error, GraphInfo, Node, Result, ResultPage};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::GraphClient;
use crate::config::ClientConfig;

/// Why a GET did not produce a usable body.
#[derive(Debug)]
enum Failure {
    /// No response: connection, timeout, or body read error
    Transport(String),
    /// Non-2xx response
    Status(String),
}

impl Failure {
    fn into_remote_fetch(self) -> Error {
        match self {
            Failure::Transport(message) | Failure::Status(message) => Error::RemoteFetch(message),
        }
    }
}

/// [`GraphClient`] backed by the graph REST API.
///
/// Endpoints are resolved against the configured base URL:
/// `GET /info`, `GET /node?name=`, `GET /nodes?q=&page=&size=`,
/// `GET /edge?from=&to=`.
#[derive(Debug, Clone)]
pub struct HttpGraphClient {
    http: Client,
    base_url: String,
}

impl HttpGraphClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> std::result::Result<String, Failure> {
        let url = self.endpoint(path);
        debug!(%url, ?params, "GET");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("request to {url} timed out")
                } else {
                    format!("request to {url} failed: {e}")
                };
                warn!(%url, error = %e, "transport failure");
                Failure::Transport(message)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Failure::Transport(format!("failed to read response body from {url}: {e}")))?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!(%url, %status, %message, "request rejected");
            return Err(Failure::Status(message));
        }

        Ok(body)
    }
}

/// Best available message for an error response: the body's `message`, then
/// its `error`, then the status line.
fn error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    };

    field("message")
        .or_else(|| field("error"))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| Error::Serialization(format!("failed to parse {what} response: {e}")))
}

fn require(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{what} must not be empty")));
    }
    Ok(())
}

impl GraphClient for HttpGraphClient {
    async fn fetch_graph_info(&self) -> Result<String> {
        let body = self.get("info", &[]).await.map_err(Failure::into_remote_fetch)?;

        // older servers answer with the bare text
        match serde_json::from_str::<GraphInfo>(&body) {
            Ok(info) => Ok(info.info),
            Err(_) => Ok(body.trim().to_string()),
        }
    }

    async fn fetch_node(&self, name: &str) -> Result<Node> {
        require(name, "node name")?;

        let body = self
            .get("node", &[("name", name)])
            .await
            .map_err(|failure| match failure {
                Failure::Transport(message) => Error::RemoteFetch(message),
                Failure::Status(message) => Error::NodeNotFound {
                    name: name.to_string(),
                    message,
                },
            })?;

        let node: Node = decode(&body, "node")?;
        for (relation, dep) in node.relation_violations() {
            warn!(
                node = %node.name,
                ?relation,
                source = %dep.source_name,
                target = %dep.target_name,
                "dependency does not belong to node"
            );
        }
        Ok(node)
    }

    async fn fetch_nodes(&self, query: &str, page: u32, size: u32) -> Result<ResultPage<Node>> {
        if size == 0 {
            return Err(Error::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let page_param = page.to_string();
        let size_param = size.to_string();
        let mut params = Vec::with_capacity(3);
        if !query.is_empty() {
            params.push(("q", query));
        }
        params.push(("page", page_param.as_str()));
        params.push(("size", size_param.as_str()));

        let body = self
            .get("nodes", &params)
            .await
            .map_err(Failure::into_remote_fetch)?;

        let result: ResultPage<Node> = decode(&body, "node list")?;
        if !result.is_consistent() {
            warn!(
                number = result.number,
                size = result.size,
                total_pages = result.total_pages,
                elements = result.number_of_elements,
                "inconsistent page metadata"
            );
        }
        Ok(result)
    }

    async fn fetch_edge(&self, from: &str, to: &str) -> Result<Dependency> {
        require(from, "edge source")?;
        require(to, "edge target")?;

        let body = self
            .get("edge", &[("from", from), ("to", to)])
            .await
            .map_err(|failure| match failure {
                Failure::Transport(message) => Error::RemoteFetch(message),
                Failure::Status(message) => Error::EdgeNotFound {
                    from: from.to_string(),
                    to: to.to_string(),
                    message,
                },
            })?;

        decode(&body, "edge")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = r#"{"status":404,"error":"Not Found","message":"Node a.B not found","path":"/node"}"#;
        assert_eq!(error_message(StatusCode::NOT_FOUND, body), "Node a.B not found");
    }

    #[test]
    fn test_error_message_falls_back_to_error_field() {
        let body = r#"{"status":500,"error":"Internal Server Error","message":""}"#;
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, body),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_error_message_generic() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            "HTTP 502 Bad Gateway"
        );
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let client = HttpGraphClient::new(ClientConfig::new("http://localhost:8080/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.endpoint("nodes"), "http://localhost:8080/api/nodes");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = HttpGraphClient::new(ClientConfig::new("localhost"));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_preconditions_checked_before_request() {
        // nothing listens here; a request would fail with RemoteFetch
        let client = HttpGraphClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();

        assert!(matches!(client.fetch_node("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(client.fetch_edge("a", "").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(client.fetch_nodes("", 0, 0).await, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_remote_fetch() {
        let client = HttpGraphClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        assert!(matches!(client.fetch_graph_info().await, Err(Error::RemoteFetch(_))));
        assert!(matches!(client.fetch_node("a.B").await, Err(Error::RemoteFetch(_))));
    }

    #[tokio::test]
    async fn test_blank_names_are_passed_to_server() {
        let client = HttpGraphClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        assert!(matches!(client.fetch_node(" ").await, Err(Error::RemoteFetch(_))));
        assert!(matches!(client.fetch_edge(" ", "a").await, Err(Error::RemoteFetch(_))));
    }
}
