// Integration tests for depview against an in-process graph REST API
use actix_web::{web, App, HttpResponse, HttpServer};
use depview_client::{ClientConfig, GraphClient, HttpGraphClient, PagedListNavigator};
use depview_core::{Dependency, Error, Node, ResultPage};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const CONTAINS: &str = "CONTAINS";

/// In-memory graph served the way the analysis service serves it.
struct Fixture {
    nodes: Vec<String>,
    edges: Vec<Dependency>,
    /// Decoded `q` parameter of every `/nodes` request (`None` when absent)
    node_queries: Mutex<Vec<Option<String>>>,
}

impl Fixture {
    fn shop() -> Self {
        let mut nodes = vec![
            "com.shop".to_string(),
            "com.shop.Cart".to_string(),
            "com.shop.Order".to_string(),
            "com.shop.Payment".to_string(),
        ];
        nodes.extend((0..21).map(|i| format!("com.shop.model.Entity{i:02}")));

        let edges = vec![
            Dependency::new("com.shop", "com.shop.Cart", CONTAINS),
            Dependency::new("com.shop", "com.shop.Order", CONTAINS),
            Dependency::new("com.shop", "com.shop.Payment", CONTAINS),
            Dependency::new("com.shop.Cart", "com.shop.Order", "CALLS")
                .with_property("weight", json!(2))
                .with_property("cycle", json!(false))
                .with_base(Dependency::new("com.shop.Cart.checkout", "com.shop.Order.create", "CALLS"))
                .with_base(Dependency::new("com.shop.Cart.total", "com.shop.Order.price", "CALLS")),
            Dependency::new("com.shop.Order", "com.shop.Payment", "READ_WRITE"),
        ];

        Self {
            nodes,
            edges,
            node_queries: Mutex::new(Vec::new()),
        }
    }

    fn node_dto(&self, name: &str) -> Option<Node> {
        if !self.nodes.iter().any(|n| n == name) {
            return None;
        }

        let kind = if name.contains("shop.") { "class" } else { "package" };
        let mut node = Node::new(name).with_property("type", json!(kind));
        for edge in &self.edges {
            let contains = edge.type_name == CONTAINS;
            if edge.target_name == name {
                if contains {
                    node.parents.push(edge.clone());
                } else {
                    node.incoming_deps.push(edge.clone());
                }
            }
            if edge.source_name == name {
                if contains {
                    node.contained_deps.push(edge.clone());
                } else {
                    node.outgoing_deps.push(edge.clone());
                }
            }
        }
        node.parents.sort_by(|a, b| a.source_name.cmp(&b.source_name));
        node.incoming_deps.sort_by(|a, b| a.source_name.cmp(&b.source_name));
        node.contained_deps.sort_by(|a, b| a.target_name.cmp(&b.target_name));
        node.outgoing_deps.sort_by(|a, b| a.target_name.cmp(&b.target_name));
        Some(node)
    }
}

fn not_found(message: String, path: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "status": 404,
        "error": "Not Found",
        "message": message,
        "path": path,
    }))
}

async fn get_info(fixture: web::Data<Fixture>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "info": format!(
            "Graph with: {} nodes and {} edges. Filename: shop.json",
            fixture.nodes.len(),
            fixture.edges.len()
        )
    }))
}

#[derive(Deserialize)]
struct NodeParams {
    name: String,
}

async fn get_node(fixture: web::Data<Fixture>, params: web::Query<NodeParams>) -> HttpResponse {
    match fixture.node_dto(&params.name) {
        Some(node) => HttpResponse::Ok().json(node),
        None => not_found(format!("Node {} not found", params.name), "/node"),
    }
}

#[derive(Deserialize)]
struct EdgeParams {
    from: String,
    to: String,
}

async fn get_edge(fixture: web::Data<Fixture>, params: web::Query<EdgeParams>) -> HttpResponse {
    for name in [&params.from, &params.to] {
        if !fixture.nodes.contains(name) {
            return not_found(format!("Node {name} not found"), "/edge");
        }
    }
    match fixture
        .edges
        .iter()
        .find(|e| e.source_name == params.from && e.target_name == params.to)
    {
        Some(edge) => HttpResponse::Ok().json(edge),
        None => not_found(format!("No edge from {} to {}", params.from, params.to), "/edge"),
    }
}

#[derive(Deserialize)]
struct NodesParams {
    q: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
}

async fn get_nodes(fixture: web::Data<Fixture>, params: web::Query<NodesParams>) -> HttpResponse {
    fixture.node_queries.lock().push(params.q.clone());

    let mut names: Vec<&String> = fixture
        .nodes
        .iter()
        .filter(|n| params.q.as_deref().map_or(true, |q| n.contains(q.trim())))
        .collect();
    names.sort();
    let matching: Vec<Node> = names.into_iter().filter_map(|n| fixture.node_dto(n)).collect();

    match ResultPage::from_slice(&matching, params.page.unwrap_or(0), params.size.unwrap_or(20)) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => HttpResponse::BadRequest().json(json!({ "error": "Bad Request", "message": e.to_string() })),
    }
}

async fn down_nodes() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "status": 500,
        "error": "Internal Server Error",
        "message": "index unavailable",
    }))
}

async fn down_info() -> HttpResponse {
    HttpResponse::ServiceUnavailable().body("maintenance")
}

async fn legacy_info() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("Graph with: 25 nodes and 5 edges.\n")
}

async fn legacy_nodes() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html").body("<html>login</html>")
}

/// Serve the fixture on an ephemeral port; returns the server root URL.
fn start_server(fixture: Arc<Fixture>) -> String {
    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let sys = actix_web::rt::System::new();
        let _ = sys.block_on(async move {
            let data = web::Data::from(fixture);
            let server = HttpServer::new(move || {
                App::new()
                    .app_data(data.clone())
                    .route("/api/info", web::get().to(get_info))
                    .route("/api/node", web::get().to(get_node))
                    .route("/api/nodes", web::get().to(get_nodes))
                    .route("/api/edge", web::get().to(get_edge))
                    .route("/down/info", web::get().to(down_info))
                    .route("/down/nodes", web::get().to(down_nodes))
                    .route("/legacy/info", web::get().to(legacy_info))
                    .route("/legacy/nodes", web::get().to(legacy_nodes))
            })
            .workers(1)
            .bind(("127.0.0.1", 0))?;

            tx.send(server.addrs()[0]).expect("report fixture address");
            server.run().await
        });
    });

    let addr = rx.recv().expect("fixture server did not start");
    format!("http://{addr}")
}

fn client(root: &str, base: &str) -> HttpGraphClient {
    HttpGraphClient::new(ClientConfig::new(format!("{root}/{base}"))).unwrap()
}

fn shop_server() -> (Arc<Fixture>, String) {
    let fixture = Arc::new(Fixture::shop());
    let root = start_server(fixture.clone());
    (fixture, root)
}

#[tokio::test]
async fn test_fetch_graph_info() {
    let (_, root) = shop_server();
    let info = client(&root, "api").fetch_graph_info().await.unwrap();
    assert_eq!(info, "Graph with: 25 nodes and 5 edges. Filename: shop.json");
}

#[tokio::test]
async fn test_fetch_graph_info_plain_text() {
    let (_, root) = shop_server();
    let info = client(&root, "legacy").fetch_graph_info().await.unwrap();
    assert_eq!(info, "Graph with: 25 nodes and 5 edges.");
}

#[tokio::test]
async fn test_fetch_node_with_relations() {
    let (_, root) = shop_server();
    let node = client(&root, "api").fetch_node("com.shop.Order").await.unwrap();

    assert_eq!(node.name, "com.shop.Order");
    assert_eq!(node.properties["type"], json!("class"));
    assert_eq!(node.parents.len(), 1);
    assert_eq!(node.parents[0].source_name, "com.shop");
    assert_eq!(node.incoming_deps[0].source_name, "com.shop.Cart");
    assert_eq!(node.outgoing_deps[0].target_name, "com.shop.Payment");
    assert!(!node.has_children());
    assert!(node.relation_violations().is_empty());

    let package = client(&root, "api").fetch_node("com.shop").await.unwrap();
    let children: Vec<&str> = package.contained_deps.iter().map(|d| d.target_name.as_str()).collect();
    assert_eq!(children, vec!["com.shop.Cart", "com.shop.Order", "com.shop.Payment"]);
}

#[tokio::test]
async fn test_fetch_node_not_found() {
    let (_, root) = shop_server();
    match client(&root, "api").fetch_node("com.nope.Missing").await {
        Err(Error::NodeNotFound { name, message }) => {
            assert_eq!(name, "com.nope.Missing");
            assert_eq!(message, "Node com.nope.Missing not found");
        }
        other => panic!("expected NodeNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_node_and_edge_lookup_agree() {
    let (_, root) = shop_server();
    let api = client(&root, "api");

    let cart = api.fetch_node("com.shop.Cart").await.unwrap();
    let embedded = &cart.outgoing_deps[0];
    let edge = api
        .fetch_edge(&embedded.source_name, &embedded.target_name)
        .await
        .unwrap();

    assert_eq!(edge.source_name, embedded.source_name);
    assert_eq!(edge.target_name, embedded.target_name);
    assert_eq!(edge.type_name, embedded.type_name);
    assert_eq!(edge.base_dependencies.len(), 2);
    assert_eq!(edge.base_dependencies[0].source_name, "com.shop.Cart.checkout");
    let keys: Vec<&str> = edge.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["weight", "cycle"]);
}

#[tokio::test]
async fn test_fetch_edge_not_found() {
    let (_, root) = shop_server();
    match client(&root, "api").fetch_edge("com.shop.Payment", "com.shop.Cart").await {
        Err(Error::EdgeNotFound { from, to, message }) => {
            assert_eq!(from, "com.shop.Payment");
            assert_eq!(to, "com.shop.Cart");
            assert_eq!(message, "No edge from com.shop.Payment to com.shop.Cart");
        }
        other => panic!("expected EdgeNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_nodes_single_page() {
    let (fixture, root) = shop_server();
    let page = client(&root, "api").fetch_nodes("", 0, 30).await.unwrap();

    assert_eq!(page.number, 0);
    assert_eq!(page.size, 30);
    assert_eq!(page.total_elements, 25);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.number_of_elements, 25);
    assert!(page.first);
    assert!(page.last);
    assert_eq!(page.content[0].name, "com.shop");
    assert_eq!(fixture.node_queries.lock().as_slice(), &[None]);
}

#[tokio::test]
async fn test_fetch_nodes_with_query_and_paging() {
    let (fixture, root) = shop_server();
    let api = client(&root, "api");

    let page = api.fetch_nodes("Entity", 2, 5).await.unwrap();
    assert_eq!(page.total_elements, 21);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.content[0].name, "com.shop.model.Entity10");
    assert!(!page.first && !page.last);

    let query = "model Entity&2";
    let none = api.fetch_nodes(query, 0, 30).await.unwrap();
    assert!(none.content.is_empty());
    assert_eq!(none.total_elements, 0);
    assert_eq!(none.total_pages, 0);
    assert!(none.first && none.last);

    let seen = fixture.node_queries.lock().clone();
    assert_eq!(seen, vec![Some("Entity".to_string()), Some(query.to_string())]);
}

#[tokio::test]
async fn test_server_error_is_remote_fetch() {
    let (_, root) = shop_server();
    let down = client(&root, "down");

    assert_eq!(
        down.fetch_nodes("", 0, 30).await.unwrap_err(),
        Error::RemoteFetch("index unavailable".to_string())
    );
    assert_eq!(
        down.fetch_graph_info().await.unwrap_err(),
        Error::RemoteFetch("HTTP 503 Service Unavailable".to_string())
    );
}

#[tokio::test]
async fn test_undecodable_body_is_serialization_error() {
    let (_, root) = shop_server();
    let result = client(&root, "legacy").fetch_nodes("", 0, 30).await;
    assert!(matches!(result, Err(Error::Serialization(_))));
}

#[tokio::test]
async fn test_navigator_pages_through_remote_listing() {
    let (_, root) = shop_server();
    let mut nav = PagedListNavigator::new(client(&root, "api"));

    nav.submit_query("com.shop").await;
    assert_eq!(nav.content().len(), 25);

    nav.load(0, 10).await;
    assert_eq!(nav.page_window(), vec![1, 2, 3]);
    nav.go_next().await;
    assert_eq!(nav.current_page().map(|p| p.number), Some(1));
    nav.go_last().await;
    let last = nav.current_page().unwrap();
    assert_eq!(last.number, 2);
    assert_eq!(last.number_of_elements, 5);
    assert!(last.last);
    nav.go_to_page(1).await;
    assert_eq!(nav.content()[0].name, "com.shop");
}

#[tokio::test]
async fn test_navigator_error_state_over_http() {
    let (_, root) = shop_server();
    let mut nav = PagedListNavigator::new(client(&root, "down"));

    nav.load(0, 30).await;
    assert!(nav.current_page().is_none());
    assert_eq!(nav.error_message(), Some("index unavailable"));
    assert!(nav.page_window().is_empty());
}
