use std::sync::Arc;

use embed_pager::{hey, yay, PaginationOptions};
use serenity::{
    all::{
        ActivityData, Context, EventHandler, Interaction, Message, OnlineStatus, Ready,
        ResumedEvent,
    },
    async_trait,
};

use crate::{
    commands,
    helpers::{command_response, register_command},
};

pub(crate) struct Handler {
    pub options: Arc<PaginationOptions>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore messages from bots
        if msg.author.bot {
            return;
        }

        if let Some(args) = msg.content.strip_prefix(commands::pages::PREFIX) {
            commands::pages::run_message(args, &ctx, &msg, &self.options).await;
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        register_command(&ctx, commands::pages::register()).await;

        yay!("{} is connected!", ready.user.name);

        ctx.set_presence(
            Some(ActivityData::custom("Turning pages")),
            OnlineStatus::Online,
        );
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        hey!("Resumed");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        // button presses are picked up by the pagination collectors
        let Interaction::Command(command) = interaction else {
            return;
        };

        match command.data.name.as_str() {
            "pages" => {
                let options = command.data.options();
                commands::pages::run(&options, &ctx, &command, &self.options).await;
            }
            _ => {
                command_response(&ctx, &command, "Unknown command!").await;
            }
        }
    }
}
