use blog_core::{Msg, PageEntry};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Quit,
    Unknown(String),
}

/// Parses a line typed at the prompt. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }

    let command = match input.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Msg(Msg::NextClicked),
        "p" | "prev" | "previous" => Command::Msg(Msg::PrevClicked),
        "t" | "theme" => Command::Msg(Msg::ThemeToggleClicked),
        "..." | "…" => Command::Msg(Msg::PageClicked(PageEntry::Ellipsis)),
        "q" | "quit" | "exit" => Command::Quit,
        other => match other.parse::<u32>() {
            Ok(page) => Command::Msg(Msg::PageClicked(PageEntry::Number(page))),
            Err(_) => Command::Unknown(input.to_string()),
        },
    };
    Some(command)
}
