//! Output templates for the `outstanding` renderer.
//!
//! Templates live as stand-alone `.tmp` files next to this module and are embedded at
//! compile time. They are minijinja templates with two conventions:
//!
//! 1. Loops and conditionals use `{%-` to swallow the newline before the tag, so each
//!    iteration emits its own leading line break. minijinja drops the template's final
//!    newline; `render.rs` puts it back.
//! 2. Layout (widths, indentation, number formatting) is computed in Rust. Templates only
//!    pick styles and arrange lines.

pub const BANNER_TEMPLATE: &str = include_str!("templates/banner.tmp");
pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
pub const RECORDS_TEMPLATE: &str = include_str!("templates/records.tmp");
pub const GROUPS_TEMPLATE: &str = include_str!("templates/groups.tmp");
pub const BULLETS_TEMPLATE: &str = include_str!("templates/bullets.tmp");
pub const STATISTICS_TEMPLATE: &str = include_str!("templates/statistics.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
