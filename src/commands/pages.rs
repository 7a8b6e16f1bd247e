use embed_pager::{nay, InteractionTarget, Pagination, PaginationOptions};
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption, Message,
    ResolvedOption, ResolvedValue,
};

use crate::helpers::{command_response, nav_buttons, sample_pages, MAX_SAMPLE_PAGES};

pub const PREFIX: &str = "!pages";
const DEFAULT_PAGES: usize = 5;

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    defaults: &PaginationOptions,
) {
    let mut count = DEFAULT_PAGES;
    let mut private = defaults.private_reply;
    for option in options {
        match option {
            ResolvedOption {
                name: "count",
                value: ResolvedValue::Integer(n),
                ..
            } => count = (*n).max(1) as usize,
            ResolvedOption {
                name: "private",
                value: ResolvedValue::Boolean(b),
                ..
            } => private = *b,
            _ => {}
        }
    }

    // ephemeral replies cannot be deleted, so no delete button there
    let result = Pagination::new()
        .interaction(InteractionTarget::new(cmd))
        .page_list(sample_pages(count))
        .button_list(nav_buttons(!private))
        .options(defaults.clone())
        .private_reply(private)
        .auto_delete(defaults.auto_delete && !private)
        .run(ctx)
        .await;

    if let Err(e) = result {
        nay!("Failed to paginate /pages: {}", e);
        if e.is_config() {
            command_response(ctx, cmd, format!("Could not paginate: {}", e)).await;
        }
    }
}

/// `!pages [count]`
pub async fn run_message(args: &str, ctx: &Context, msg: &Message, defaults: &PaginationOptions) {
    let count = args.trim().parse::<usize>().unwrap_or(DEFAULT_PAGES);

    let result = Pagination::new()
        .message(msg)
        .page_list(sample_pages(count))
        .button_list(nav_buttons(true))
        .options(defaults.clone())
        .reply_message(true)
        .run(ctx)
        .await;

    if let Err(e) = result {
        nay!("Failed to paginate {}: {}", PREFIX, e);
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("pages")
        .description("Show a few sample pages with navigation buttons")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "count", "How many pages to show")
                .min_int_value(1)
                .max_int_value(MAX_SAMPLE_PAGES as u64),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "private",
            "Only you can see the pages",
        ))
        .dm_permission(true)
}
