// Interactive paging over a queryable node listing
use depview_core::{Error, Node, ResultPage};
use tracing::{debug, warn};

use crate::client::GraphClient;

/// Page size used before the first load.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// A load that has been issued but not yet applied.
///
/// Only the ticket of the most recent [`PagedListNavigator::begin_load`] can
/// change navigator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    query: String,
    page: u32,
    size: u32,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

/// Owns the current query and page of a node listing for one UI surface.
///
/// After any applied load exactly one of [`current_page`](Self::current_page)
/// and [`error_message`](Self::error_message) is set. Failures never escape:
/// they become the error message, and the last requested query, page and size
/// stay available for [`retry`](Self::retry).
pub struct PagedListNavigator<C> {
    client: C,
    query: String,
    current_page: Option<ResultPage<Node>>,
    error_message: Option<String>,
    requested_page: u32,
    requested_size: u32,
    generation: u64,
}

impl<C: GraphClient> PagedListNavigator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            query: String::new(),
            current_page: None,
            error_message: None,
            requested_page: 0,
            requested_size: DEFAULT_PAGE_SIZE,
            generation: 0,
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.requested_size = size;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the filter. Takes effect with the next load.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn current_page(&self) -> Option<&ResultPage<Node>> {
        self.current_page.as_ref()
    }

    /// Nodes of the current page; empty when there is none.
    pub fn content(&self) -> &[Node] {
        self.current_page
            .as_ref()
            .map(|page| page.content.as_slice())
            .unwrap_or(&[])
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Last requested `(page, size)`, page 0-based.
    pub fn requested(&self) -> (u32, u32) {
        (self.requested_page, self.requested_size)
    }

    /// 1-based page numbers to display; empty without a current page.
    pub fn page_window(&self) -> Vec<u32> {
        self.current_page
            .as_ref()
            .map(ResultPage::page_window)
            .unwrap_or_default()
    }

    pub fn is_active(&self, page_one_based: u32) -> bool {
        self.current_page
            .as_ref()
            .is_some_and(|page| page.is_active(page_one_based))
    }

    /// Record a new request and hand out its ticket. Any ticket issued
    /// earlier becomes stale.
    pub fn begin_load(&mut self, page: u32, size: u32) -> LoadTicket {
        self.generation += 1;
        self.requested_page = page;
        self.requested_size = size;
        LoadTicket {
            generation: self.generation,
            query: self.query.clone(),
            page,
            size,
        }
    }

    /// Apply the outcome of a load. Returns `false` and leaves the state
    /// untouched when a newer load has been started since `ticket` was issued.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<ResultPage<Node>, Error>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                page = ticket.page,
                "discarding superseded page response"
            );
            return false;
        }

        match outcome {
            Ok(page) => {
                self.current_page = Some(page);
                self.error_message = None;
            }
            Err(e) => {
                warn!(query = %ticket.query, page = ticket.page, size = ticket.size, error = %e, "failed to load nodes");
                self.current_page = None;
                self.error_message = Some(e.message().to_string());
            }
        }
        true
    }

    /// Fetch page `page` of `size` nodes for the current query.
    pub async fn load(&mut self, page: u32, size: u32) {
        let ticket = self.begin_load(page, size);
        let outcome = self
            .client
            .fetch_nodes(&ticket.query, ticket.page, ticket.size)
            .await;
        self.finish_load(ticket, outcome);
    }

    /// Set the query and show its first page.
    pub async fn submit_query(&mut self, query: impl Into<String>) {
        self.set_query(query);
        let size = self.current_size();
        self.load(0, size).await;
    }

    /// Repeat the last requested load.
    pub async fn retry(&mut self) {
        let (page, size) = self.requested();
        self.load(page, size).await;
    }

    pub async fn go_first(&mut self) {
        let size = self.current_size();
        self.load(0, size).await;
    }

    /// Load the last page; page 0 when there are no pages.
    pub async fn go_last(&mut self) {
        let Some(page) = self.current_page.as_ref() else {
            return;
        };
        let last = page.total_pages.saturating_sub(1);
        let size = self.current_size();
        self.load(last, size).await;
    }

    pub async fn go_previous(&mut self) {
        let Some(page) = self.current_page.as_ref() else {
            return;
        };
        if page.first {
            return;
        }
        let previous = page.number.saturating_sub(1);
        let size = self.current_size();
        self.load(previous, size).await;
    }

    pub async fn go_next(&mut self) {
        let Some(page) = self.current_page.as_ref() else {
            return;
        };
        if page.last {
            return;
        }
        let next = page.number + 1;
        let size = self.current_size();
        self.load(next, size).await;
    }

    /// Jump to a page taken from [`page_window`](Self::page_window).
    pub async fn go_to_page(&mut self, page_one_based: u32) {
        if page_one_based == 0 {
            warn!("page numbers start at 1");
            return;
        }
        let size = self.current_size();
        self.load(page_one_based - 1, size).await;
    }

    fn current_size(&self) -> u32 {
        self.current_page
            .as_ref()
            .map(|page| page.size)
            .filter(|size| *size > 0)
            .unwrap_or(self.requested_size)
    }
}
