//! Blog core: pure page controller state machine and view-model helpers.
mod article;
mod effect;
mod msg;
mod page;
mod state;
mod update;
mod view_model;

pub use article::Article;
pub use effect::Effect;
pub use msg::Msg;
pub use page::{PageEntry, PAGE_LAYOUT, PER_PAGE, TOTAL_PAGES};
pub use state::{PageState, PageStatus, RequestId};
pub use update::{init, update};
pub use view_model::{ArticleCardView, GridView, PageLinkView, PageViewModel};
