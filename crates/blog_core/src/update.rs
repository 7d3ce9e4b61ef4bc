use crate::{Effect, Msg, PageEntry, PageState, TOTAL_PAGES};

/// Builds the startup state: page 1 is already loading.
pub fn init() -> (PageState, Vec<Effect>) {
    let mut state = PageState::new();
    let request_id = state.begin_fetch();
    let page = state.current_page();
    (state, vec![Effect::FetchPage { request_id, page }])
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageClicked(PageEntry::Number(page)) => go_to(&mut state, page),
        Msg::PageClicked(PageEntry::Ellipsis) => Vec::new(),
        Msg::NextClicked => {
            let current = state.current_page();
            if current < TOTAL_PAGES {
                go_to(&mut state, current + 1)
            } else {
                Vec::new()
            }
        }
        Msg::PrevClicked => {
            let current = state.current_page();
            if current > 1 {
                go_to(&mut state, current - 1)
            } else {
                Vec::new()
            }
        }
        Msg::ArticlesLoaded {
            request_id,
            articles,
            ..
        } => {
            state.apply_loaded(request_id, articles);
            Vec::new()
        }
        Msg::FetchFailed {
            request_id,
            message,
            ..
        } => {
            state.apply_failed(request_id, message);
            Vec::new()
        }
        Msg::ThemeToggleClicked | Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn go_to(state: &mut PageState, page: u32) -> Vec<Effect> {
    match state.change_page(page) {
        Some(request_id) => vec![Effect::FetchPage { request_id, page }],
        None => Vec::new(),
    }
}
