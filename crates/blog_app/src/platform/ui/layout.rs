//! Static sections of the page. None of these depend on controller state.

use super::constants::*;

pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

pub fn navigation() -> Vec<String> {
    let right = format!("{}  {}", NAV_LINKS.join("  "), THEME_TOGGLE);
    let padding = RULE_WIDTH.saturating_sub(NAV_BRAND.chars().count() + right.chars().count());
    vec![
        format!("{NAV_BRAND}{}{right}", " ".repeat(padding.max(2))),
        rule('='),
    ]
}

pub fn hero() -> Vec<String> {
    vec![String::new(), HERO_TITLE.to_string(), String::new()]
}

#[allow(clippy::vec_init_then_push)]
pub fn recent_posts() -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(RECENT_TITLE.to_string());
    lines.push(rule('-'));

    lines.push(format!("[image] {RECENT_THUMBNAIL}"));
    lines.push(FEATURED_BYLINE.to_string());
    lines.push(FEATURED_TITLE.to_string());
    lines.push(RECENT_BLURB.to_string());
    lines.push(FEATURED_TAGS.join("  "));

    for _ in 0..SIDE_POST_COUNT {
        lines.push(String::new());
        lines.push(format!("    [image] {RECENT_THUMBNAIL}"));
        lines.push(format!("    {SIDE_POST_DATE}"));
        lines.push(format!("    {SIDE_POST_TITLE}"));
        lines.push(format!("    {RECENT_BLURB}"));
        lines.push(format!("    {}", SIDE_POST_TAGS.join("  ")));
    }

    lines.push(String::new());
    lines
}

pub fn footer() -> Vec<String> {
    vec![FOOTER_LINKS.join("  "), String::new(), COMMAND_HINT.to_string()]
}
