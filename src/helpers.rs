use embed_pager::{nay, Control, PageAction};
use serenity::all::{ButtonStyle, Colour, Command, CommandInteraction, CreateCommand, CreateEmbed};
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;

pub const MAX_SAMPLE_PAGES: usize = 25;

/// Placeholder pages for the demo commands.
pub fn sample_pages(count: usize) -> Vec<CreateEmbed> {
    (1..=count.clamp(1, MAX_SAMPLE_PAGES))
        .map(|n| {
            CreateEmbed::new()
                .title(format!("📄 Sample page {}", n))
                .description(format!(
                    "This is page number {}.\nUse the buttons below to move between pages.",
                    n
                ))
                .color(Colour::GOLD)
        })
        .collect()
}

/// Previous and next, then either delete or a jump to the last page, then a jump to the first.
///
/// Ephemeral replies cannot be deleted, so without delete the third slot is
/// explicitly rewired.
pub fn nav_buttons(with_delete: bool) -> Vec<Control> {
    let mut buttons = vec![
        Control::button("pager_prev")
            .label("Previous")
            .style(ButtonStyle::Secondary),
        Control::button("pager_next")
            .label("Next")
            .style(ButtonStyle::Primary),
    ];
    if with_delete {
        buttons.push(
            Control::button("pager_delete")
                .label("Delete")
                .style(ButtonStyle::Danger),
        );
    } else {
        buttons.push(
            Control::button("pager_last")
                .label("Last")
                .style(ButtonStyle::Secondary)
                .action(PageAction::Last),
        );
    }
    buttons.push(
        Control::button("pager_first")
            .label("First")
            .style(ButtonStyle::Secondary)
            .action(PageAction::First),
    );
    buttons
}

pub async fn command_response<S: Into<String>>(
    ctx: &Context,
    command: &CommandInteraction,
    msg: S,
) {
    let data = CreateInteractionResponseMessage::new().content(msg.into());
    let builder = CreateInteractionResponse::Message(data);
    if let Err(err) = command.create_response(&ctx.http, builder).await {
        nay!("Failed to respond to command: {}", err)
    }
}

pub async fn register_command(ctx: &Context, cmd: CreateCommand) {
    if let Err(e) = Command::create_global_command(&ctx.http, cmd).await {
        nay!("Failed to register a command: {}", e);
    }
}
