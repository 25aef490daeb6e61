//! Styles for the roster CLI.
//!
//! Templates never name colors. They apply semantic style names through the `style`
//! filter (`{{ user.name | style("user-name") }}`), and this module maps each name to a
//! `console::Style`. Changing the look of the CLI means editing the theme below, not the
//! templates.
//!
//! Styles come in two layers:
//!
//! 1. Semantic names for the data being shown (`user-id`, `time`, `current-page`).
//! 2. Shared presentation values (regular, muted, faint) the semantic names are built from,
//!    so that every muted element looks the same.
//!
//! When colors are off (piped output, `--no-color`) styles are skipped entirely. A name the
//! theme does not know is prefixed with [`MISSING_STYLE_INDICATOR`] so template typos show.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const TIME: &str = "time";
    pub const LINK: &str = "link";
    // Table
    pub const HEADER: &str = "header";
    pub const COLUMN_HEADER: &str = "column-header";
    pub const USER_ID: &str = "user-id";
    pub const USER_NAME: &str = "user-name";
    // Pagination bar
    pub const PAGE: &str = "page";
    pub const CURRENT_PAGE: &str = "current-page";
    pub const DISABLED: &str = "disabled";
}

/// A collection of named styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static ROSTER_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let regular = Style::new();
    let muted = Style::new().color256(245);
    let faint = Style::new().color256(240);
    let accent = Style::new().cyan();

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint.clone())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::LINK, accent.clone().underlined())
        .add(names::HEADER, regular.clone().bold())
        .add(names::COLUMN_HEADER, faint.clone().bold())
        .add(names::USER_ID, Style::new().yellow())
        .add(names::USER_NAME, regular)
        .add(names::PAGE, accent)
        .add(names::CURRENT_PAGE, Style::new().black().on_cyan().bold())
        .add(names::DISABLED, faint.dim())
}
