//! # Rendering Module
//!
//! Styled terminal output from the library's screens.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they require
//! Unicode-aware processing. Templates handle presentation: which sections appear and
//! which style each piece gets.
//!
//! ## List Layout
//!
//! ```text
//! 30 total · Page 1 / 3
//!
//! ID  NAME                         CREATED     AVATAR
//! 1   Ada Lovelace                 2024-03-01  https://avatars.test/1.png
//!
//! « ‹ [1] 2 3 › »
//! ```
//!
//! The name column takes whatever [`LINE_WIDTH`] leaves after the fixed columns.

use super::styles::{names, ROSTER_THEME};
use super::templates::{DETAIL_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, MODAL_TEMPLATE};
use minijinja::{Environment, Value};
use rosterapp::api::{CmdMessage, MessageLevel};
use rosterapp::format::{format_date, format_datetime, format_relative};
use rosterapp::pagination::{PageItem, Pager};
use rosterapp::screens::{DetailScreen, ListScreen, UserModal};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const COL_CREATED: usize = 10;
pub const COL_AVATAR: usize = 40;
const MIN_COL_ID: usize = 2;
const MIN_COL_NAME: usize = 12;
const COLUMN_GAP: usize = 2;

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    created: String,
    avatar: String,
}

#[derive(Serialize)]
struct BarItem {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    error: Option<String>,
    empty: bool,
    summary: String,
    header: String,
    rows: Vec<RowData>,
    bar: Vec<BarItem>,
}

#[derive(Serialize)]
struct StatusData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct DraftData {
    name: String,
    avatar: String,
}

#[derive(Serialize)]
struct DetailData {
    error: Option<String>,
    id: String,
    name: String,
    avatar: String,
    avatar_style: &'static str,
    created: String,
    status: Option<StatusData>,
    draft: Option<DraftData>,
    back: &'static str,
}

#[derive(Serialize)]
struct ModalData {
    title: &'static str,
    name: String,
    avatar: String,
    error: Option<String>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        ROSTER_THEME.apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    let use_color = use_color.unwrap_or_else(console::colors_enabled);
    environment(use_color)
        .render_str(template, data)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the current page of the list screen.
pub fn render_list(screen: &ListScreen) -> String {
    render_list_internal(screen, None)
}

fn render_list_internal(screen: &ListScreen, use_color: Option<bool>) -> String {
    let users = screen.users();
    let visible = screen.visible_users();
    let pager = screen.pager();

    let id_width = visible
        .iter()
        .map(|u| u.id.as_str().width())
        .max()
        .unwrap_or(0)
        .max(MIN_COL_ID);
    let name_width = LINE_WIDTH
        .saturating_sub(id_width + COL_CREATED + COL_AVATAR + 3 * COLUMN_GAP)
        .max(MIN_COL_NAME);

    let rows = visible
        .iter()
        .map(|user| RowData {
            id: fit(user.id.as_str(), id_width),
            name: fit(&user.name, name_width),
            created: fit(&format_date(&user.created_at), COL_CREATED),
            avatar: truncate_to_width(user.avatar.as_deref().unwrap_or(""), COL_AVATAR),
        })
        .collect();

    let gap = " ".repeat(COLUMN_GAP);
    let header = [
        fit("ID", id_width),
        fit("NAME", name_width),
        fit("CREATED", COL_CREATED),
        "AVATAR".to_string(),
    ]
    .join(&gap);

    let data = ListData {
        error: screen.state().error().map(str::to_string),
        empty: users.is_empty(),
        summary: format!(
            "{} total · Page {} / {}",
            users.len(),
            pager.current(),
            pager.total()
        ),
        header,
        rows,
        bar: page_bar(pager),
    };
    render(LIST_TEMPLATE, &data, use_color)
}

/// `« ‹ 1 … 4 [5] 6 … 10 › »`, with arrows that lead nowhere styled as disabled.
fn page_bar(pager: &Pager) -> Vec<BarItem> {
    if !pager.is_paginated() {
        return Vec::new();
    }
    let arrow = |label: &str, enabled: bool| BarItem {
        label: label.to_string(),
        style: if enabled { names::PAGE } else { names::DISABLED },
    };

    let mut items = vec![
        arrow("«", pager.can_go_back()),
        arrow("‹", pager.can_go_back()),
    ];
    items.extend(pager.window().into_iter().map(|item| match item {
        PageItem::Page(n) if n == pager.current() => BarItem {
            label: format!("[{}]", n),
            style: names::CURRENT_PAGE,
        },
        PageItem::Page(n) => BarItem {
            label: n.to_string(),
            style: names::PAGE,
        },
        PageItem::Ellipsis => BarItem {
            label: item.to_string(),
            style: names::FAINT,
        },
    }));
    items.push(arrow("›", pager.can_go_forward()));
    items.push(arrow("»", pager.can_go_forward()));
    items
}

/// Renders the detail screen: the profile, its error state, or save feedback.
pub fn render_detail(screen: &DetailScreen) -> String {
    render_detail_internal(screen, None)
}

fn render_detail_internal(screen: &DetailScreen, use_color: Option<bool>) -> String {
    let status = if let Some(error) = screen.save_error() {
        Some(StatusData {
            content: error.to_string(),
            style: names::ERROR,
        })
    } else if screen.saved() {
        Some(StatusData {
            content: rosterapp::screens::messages::DETAIL_SAVED.to_string(),
            style: names::SUCCESS,
        })
    } else {
        None
    };

    let mut data = DetailData {
        error: screen.state().error().map(str::to_string),
        id: String::new(),
        name: String::new(),
        avatar: String::new(),
        avatar_style: names::LINK,
        created: String::new(),
        status,
        // A rejected or failed save keeps the typed values.
        draft: screen.save_error().map(|_| DraftData {
            name: screen.draft().name.clone(),
            avatar: screen.draft().avatar.clone(),
        }),
        back: screen.back_to_list(),
    };

    if let Some(user) = screen.user() {
        data.id = user.id.to_string();
        data.name = user.name.clone();
        match &user.avatar {
            Some(avatar) => data.avatar = avatar.clone(),
            None => {
                data.avatar = "(none)".to_string();
                data.avatar_style = names::MUTED;
            }
        }
        let absolute = format_datetime(&user.created_at);
        data.created = if absolute.is_empty() {
            absolute
        } else {
            format!("{} ({})", absolute, format_relative(&user.created_at))
        };
    }

    render(DETAIL_TEMPLATE, &data, use_color)
}

/// Renders the create/edit form with its inline error, if any.
pub fn render_modal(modal: &UserModal) -> String {
    render_modal_internal(modal, None)
}

fn render_modal_internal(modal: &UserModal, use_color: Option<bool>) -> String {
    let data = ModalData {
        title: modal.title(),
        name: modal.draft().name.clone(),
        avatar: modal.draft().avatar.clone(),
        error: modal.error().map(str::to_string),
    };
    render(MODAL_TEMPLATE, &data, use_color)
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render(MESSAGES_TEMPLATE, &data, use_color)
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Truncates to `width` columns (ending in `…` when cut), then pads with spaces.
fn fit(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
