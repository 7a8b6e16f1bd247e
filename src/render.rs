use serenity::all::{CreateActionRow, CreateEmbed, CreateEmbedFooter};

use crate::config::PaginationOptions;
use crate::control::{action_row, Control};
use crate::cursor::Cursor;

/// Everything needed to draw one state of a paginated message.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Zero based index of the page shown.
    pub index: usize,
    pub footer: String,
    pub embed: CreateEmbed,
    pub controls: Vec<Control>,
}

impl PageView {
    pub fn components(&self) -> Vec<CreateActionRow> {
        if self.controls.is_empty() {
            Vec::new()
        } else {
            vec![action_row(&self.controls)]
        }
    }
}

/// Footer text for the page under `cursor`.
pub fn footer_text(cursor: &Cursor, options: &PaginationOptions) -> String {
    let mut footer = format!("Page {} / {}", cursor.index() + 1, cursor.page_count());
    if options.progress_bar {
        footer.push('\n');
        for position in 0..cursor.page_count() {
            if position == cursor.index() {
                footer.push_str(&options.pro_slider);
            } else {
                footer.push_str(&options.pro_bar);
            }
        }
    }
    footer
}

pub fn render_page(
    pages: &[CreateEmbed],
    cursor: &Cursor,
    controls: &[Control],
    options: &PaginationOptions,
) -> PageView {
    let footer = footer_text(cursor, options);
    let embed = pages
        .get(cursor.index())
        .cloned()
        .unwrap_or_else(CreateEmbed::new)
        .footer(CreateEmbedFooter::new(footer.clone()));

    PageView {
        index: cursor.index(),
        footer,
        embed,
        controls: controls.to_vec(),
    }
}
