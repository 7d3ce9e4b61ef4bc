use crate::{Article, PageEntry, PageStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub current_page: u32,
    pub total_pages: u32,
    pub status: PageStatus,
    pub grid: GridView,
    pub page_links: Vec<PageLinkView>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub dirty: bool,
}

/// What the "All Blog Posts" section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Loading,
    Error(String),
    Empty,
    Cards(Vec<ArticleCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCardView {
    pub cover_image: String,
    pub byline: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ArticleCardView {
    pub(crate) fn from_article(article: &Article) -> Self {
        Self {
            cover_image: article.cover_image.clone(),
            byline: format!("{} • {}", article.author, article.published),
            title: article.title.clone(),
            description: article.description.clone(),
            tags: article.tags.iter().map(|tag| format!("#{tag}")).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLinkView {
    pub entry: PageEntry,
    pub active: bool,
}
