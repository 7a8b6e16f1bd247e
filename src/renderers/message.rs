use serenity::all::{
    ComponentInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, EditMessage, Message,
};
use serenity::async_trait;
use serenity::futures::StreamExt;

use super::{collect_presses, Presses};
use crate::config::PaginationOptions;
use crate::error::{SurfaceError, SurfaceResult};
use crate::render::PageView;
use crate::session::{PageSurface, PressFilter};

/// Paginates a message sent in response to another message.
pub struct MessageSurface {
    ctx: Context,
    origin: Message,
    reply: bool,
    private: bool,
    rendered: Option<Message>,
    presses: Option<Presses>,
}

impl MessageSurface {
    pub fn new(ctx: &Context, origin: &Message, options: &PaginationOptions) -> Self {
        Self {
            ctx: ctx.clone(),
            origin: origin.clone(),
            // a private reply goes to the author's DMs, where there is nothing to reply to
            reply: options.reply_message && !options.private_reply,
            private: options.private_reply,
            rendered: None,
            presses: None,
        }
    }

    async fn send(&mut self, builder: CreateMessage) -> serenity::Result<Message> {
        let message = if self.private {
            self.origin.author.direct_message(&self.ctx.http, builder).await?
        } else if self.reply {
            let builder = builder.reference_message(&self.origin);
            self.origin
                .channel_id
                .send_message(&self.ctx.http, builder)
                .await?
        } else {
            self.origin
                .channel_id
                .send_message(&self.ctx.http, builder)
                .await?
        };

        self.rendered = Some(message.clone());
        Ok(message)
    }
}

#[async_trait]
impl PageSurface for MessageSurface {
    type Press = ComponentInteraction;
    type Handle = Message;

    async fn show_static(&mut self, page: CreateEmbed) -> SurfaceResult<Message> {
        Ok(self.send(CreateMessage::new().embed(page)).await?)
    }

    async fn open(&mut self, view: PageView, filter: PressFilter) -> SurfaceResult<Message> {
        let builder = CreateMessage::new()
            .embed(view.embed.clone())
            .components(view.components());
        let message = self.send(builder).await?;
        self.presses = Some(collect_presses(
            &self.ctx,
            message.id,
            self.origin.author.id,
            filter,
        ));
        Ok(message)
    }

    async fn next_press(&mut self) -> Option<ComponentInteraction> {
        self.presses.as_mut()?.next().await
    }

    async fn acknowledge(
        &mut self,
        press: ComponentInteraction,
        view: PageView,
    ) -> SurfaceResult<()> {
        let data = CreateInteractionResponseMessage::new()
            .embed(view.embed.clone())
            .components(view.components());
        press
            .create_response(&self.ctx.http, CreateInteractionResponse::UpdateMessage(data))
            .await?;
        Ok(())
    }

    async fn delete(&mut self) -> SurfaceResult<()> {
        let Some(message) = &self.rendered else {
            return Ok(());
        };
        message.delete(&self.ctx.http).await?;
        self.rendered = None;
        self.presses = None;
        Ok(())
    }

    async fn is_present(&mut self) -> SurfaceResult<bool> {
        let Some(message) = &self.rendered else {
            return Ok(false);
        };
        match message.channel_id.message(&self.ctx.http, message.id).await {
            Ok(_) => Ok(true),
            Err(e) => match SurfaceError::from(e) {
                SurfaceError::Gone => Ok(false),
                e => Err(e),
            },
        }
    }

    async fn close(&mut self, view: PageView) -> SurfaceResult<()> {
        self.presses = None;
        let Some(message) = self.rendered.as_mut() else {
            return Ok(());
        };
        let builder = EditMessage::new()
            .embed(view.embed.clone())
            .components(view.components());
        message.edit(&self.ctx.http, builder).await?;
        Ok(())
    }
}
