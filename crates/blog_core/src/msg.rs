use crate::{Article, PageEntry, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked an entry of the page strip.
    PageClicked(PageEntry),
    /// User clicked Next.
    NextClicked,
    /// User clicked Previous.
    PrevClicked,
    /// User clicked the theme toggle. Not wired to any state.
    ThemeToggleClicked,
    /// Engine delivered the articles for a request.
    ArticlesLoaded {
        request_id: RequestId,
        page: u32,
        articles: Vec<Article>,
    },
    /// Engine reported a failed request.
    FetchFailed {
        request_id: RequestId,
        page: u32,
        message: String,
    },
    /// Render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
