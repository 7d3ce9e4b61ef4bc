use blog_core::{ArticleCardView, GridView, PageLinkView, PageViewModel};

use super::constants::*;
use super::layout;

/// Renders the whole page as text. Pure function of the view model.
pub fn render(view: &PageViewModel) -> String {
    let mut lines = Vec::new();

    lines.extend(layout::navigation());
    lines.extend(layout::hero());
    lines.extend(layout::recent_posts());

    lines.push(ALL_POSTS_TITLE.to_string());
    lines.push(layout::rule('-'));
    lines.extend(grid_lines(&view.grid));

    lines.push(layout::rule('-'));
    lines.push(pagination_line(view));
    lines.push(layout::rule('-'));

    lines.extend(layout::footer());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn grid_lines(grid: &GridView) -> Vec<String> {
    match grid {
        GridView::Loading => vec![STATUS_LOADING.to_string()],
        GridView::Error(message) => vec![format!("Error: {message}")],
        GridView::Empty => vec![STATUS_EMPTY.to_string()],
        GridView::Cards(cards) => cards.iter().flat_map(card_lines).collect(),
    }
}

fn card_lines(card: &ArticleCardView) -> Vec<String> {
    let mut lines = vec![
        format!("[cover] {}", card.cover_image),
        card.byline.clone(),
        format!("{} ↗", card.title),
    ];
    if !card.description.is_empty() {
        lines.push(card.description.clone());
    }
    if !card.tags.is_empty() {
        lines.push(card.tags.join(" "));
    }
    lines.push(String::new());
    lines
}

fn pagination_line(view: &PageViewModel) -> String {
    let previous = button(BUTTON_PREVIOUS, "< ", "", view.prev_enabled);
    let next = button(BUTTON_NEXT, "", " >", view.next_enabled);
    let strip = view
        .page_links
        .iter()
        .map(page_link)
        .collect::<Vec<_>>()
        .join("  ");

    let used = previous.chars().count() + strip.chars().count() + next.chars().count();
    let gap = RULE_WIDTH.saturating_sub(used) / 2;
    let spacer = " ".repeat(gap.max(2));
    format!("{previous}{spacer}{strip}{spacer}{next}")
}

fn button(label: &str, prefix: &str, suffix: &str, enabled: bool) -> String {
    if enabled {
        format!("{prefix}{label}{suffix}")
    } else {
        format!("({label})")
    }
}

fn page_link(link: &PageLinkView) -> String {
    if link.active {
        format!("[{}]", link.entry)
    } else {
        link.entry.to_string()
    }
}
