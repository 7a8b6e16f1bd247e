use std::env;
use std::sync::Arc;

use embed_pager::{nay, say, yay, PaginationOptions};
use serenity::all::GatewayIntents;
use serenity::Client;

use crate::discord_handler::Handler;

mod commands;
mod discord_handler;
mod helpers;

const CONFIG_PATH: &str = "./pager.json";

#[tokio::main]
async fn main() {
    yay!("Pager Bot is starting up!");

    if let Err(e) = dotenv::dotenv() {
        say!("No .env file loaded: {}", e);
    }

    let Ok(token) = env::var("DISCORD_TOKEN") else {
        nay!("DISCORD_TOKEN not found in environment");
        return;
    };

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    say!("Loading pagination settings from {}...", CONFIG_PATH);
    let options = PaginationOptions::load(CONFIG_PATH);
    say!(
        "Sessions time out after {}ms{}",
        options.timeout_ms,
        if options.auto_delete { " and auto delete" } else { "" }
    );

    let Ok(mut client) = Client::builder(token, intents)
        .event_handler(Handler {
            options: Arc::new(options),
        })
        .await
    else {
        nay!("Error creating client");
        return;
    };

    if let Err(err) = client.start().await {
        nay!("Client error: {}", err);
    }
}
