use crate::page::is_valid_page;
use crate::view_model::{ArticleCardView, GridView, PageLinkView, PageViewModel};
use crate::{Article, PAGE_LAYOUT, TOTAL_PAGES};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStatus {
    /// No request has been issued yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    loading: bool,
    error: Option<String>,
    articles: Vec<Article>,
    status: PageStatus,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            loading: false,
            error: None,
            articles: Vec::new(),
            status: PageStatus::Idle,
            in_flight: None,
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Id of the only request whose outcome may still change this state.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn view(&self) -> PageViewModel {
        let grid = match self.status {
            PageStatus::Idle | PageStatus::Loading => GridView::Loading,
            PageStatus::Errored => GridView::Error(self.error.clone().unwrap_or_default()),
            PageStatus::Loaded if self.articles.is_empty() => GridView::Empty,
            PageStatus::Loaded => GridView::Cards(
                self.articles
                    .iter()
                    .map(ArticleCardView::from_article)
                    .collect(),
            ),
        };

        let page_links = PAGE_LAYOUT
            .iter()
            .map(|&entry| PageLinkView {
                entry,
                active: entry.page() == Some(self.current_page),
            })
            .collect();

        PageViewModel {
            current_page: self.current_page,
            total_pages: TOTAL_PAGES,
            status: self.status,
            grid,
            page_links,
            prev_enabled: self.current_page > 1,
            next_enabled: self.current_page < TOTAL_PAGES,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Switches to `page` and starts a fetch for it.
    ///
    /// Returns `None` when `page` is out of range or already current.
    pub(crate) fn change_page(&mut self, page: u32) -> Option<RequestId> {
        if !is_valid_page(page) || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(self.begin_fetch())
    }

    pub(crate) fn begin_fetch(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.loading = true;
        self.error = None;
        self.status = PageStatus::Loading;
        self.mark_dirty();
        request_id
    }

    /// Applies a successful outcome. Outcomes for superseded requests are ignored.
    pub(crate) fn apply_loaded(&mut self, request_id: RequestId, articles: Vec<Article>) {
        if self.settle(request_id) {
            self.articles = articles;
            self.error = None;
            self.status = PageStatus::Loaded;
        }
    }

    /// Applies a failed outcome; the previous article list is kept.
    pub(crate) fn apply_failed(&mut self, request_id: RequestId, message: String) {
        if self.settle(request_id) {
            self.error = Some(message);
            self.status = PageStatus::Errored;
        }
    }

    fn settle(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.loading = false;
        self.mark_dirty();
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
