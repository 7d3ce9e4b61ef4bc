use blog_core::{init, update, Msg, PageEntry};

#[test]
fn update_is_noop() {
    let (state, _effects) = init();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn theme_toggle_and_placeholder_are_inert() {
    let (state, _effects) = init();

    let (next, effects) = update(state.clone(), Msg::ThemeToggleClicked);
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (next, effects) = update(next, Msg::PageClicked(PageEntry::Ellipsis));
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
