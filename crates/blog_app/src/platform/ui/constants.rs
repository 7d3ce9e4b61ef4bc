pub const RULE_WIDTH: usize = 80;

pub const NAV_BRAND: &str = "Your Name";
pub const NAV_LINKS: [&str; 4] = ["Blog", "Projects", "About", "Newsletter"];
pub const THEME_TOGGLE: &str = "[☀ ☾]";

pub const HERO_TITLE: &str = "THE BLOG";

pub const RECENT_TITLE: &str = "Recent blog posts";
pub const RECENT_THUMBNAIL: &str = "/src/assets/image-1.svg";
pub const RECENT_BLURB: &str =
    "How do you create compelling presentations that wow your colleagues and impress your managers?";
pub const FEATURED_BYLINE: &str = "Olivia Rhye • 1 Jan 2023";
pub const FEATURED_TITLE: &str = "UX review presentations";
pub const FEATURED_TAGS: [&str; 3] = ["Design", "Research", "Presentation"];
pub const SIDE_POST_DATE: &str = "Sunday, 1 Jan 2023";
pub const SIDE_POST_TITLE: &str = "Migrating to Linear 101";
pub const SIDE_POST_TAGS: [&str; 2] = ["Design", "Research"];
pub const SIDE_POST_COUNT: usize = 2;

pub const ALL_POSTS_TITLE: &str = "All Blog Posts";
pub const STATUS_LOADING: &str = "Loading posts...";
pub const STATUS_EMPTY: &str = "No posts found.";

pub const BUTTON_PREVIOUS: &str = "Previous";
pub const BUTTON_NEXT: &str = "Next";

pub const FOOTER_LINKS: [&str; 6] = [
    "© 2023",
    "Twitter",
    "LinkedIn",
    "Email",
    "RSS feed",
    "Add to Feedly",
];

pub const COMMAND_HINT: &str =
    "Commands: n = next, p = previous, 1-10 = page, t = theme, q = quit";
