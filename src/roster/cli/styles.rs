//! Named styles for roster's terminal output.
//!
//! Templates refer to styles by semantic name (`id`, `heading`, `ungraded`), never by
//! color. A name missing from the theme renders with a `(!?)` marker, so every name in
//! [`names`] must be registered in [`ROSTER_THEME`].

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

pub mod names {
    pub const TITLE: &str = "title";
    pub const HEADING: &str = "heading";
    pub const MENU_KEY: &str = "menu_key";
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const GRADE: &str = "grade";
    pub const UNGRADED: &str = "ungraded";
    pub const RULE: &str = "rule";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static ROSTER_THEME: Lazy<Theme> = Lazy::new(|| {
    let gray = Style::new().color256(rgb_to_ansi256((138, 138, 138)));
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::HEADING, Style::new().bold().cyan())
        .add(names::MENU_KEY, Style::new().yellow())
        .add(names::ID, Style::new().yellow())
        .add(names::NAME, Style::new().bold())
        .add(names::GRADE, Style::new().green())
        .add(names::UNGRADED, gray.clone().italic())
        .add(names::RULE, gray.clone())
        .add(names::MUTED, gray)
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});
