use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Message, ModalInteraction, UserId,
};
use serenity::async_trait;
use serenity::futures::StreamExt;

use super::{collect_presses, Presses};
use crate::config::PaginationOptions;
use crate::dispatch::{InteractionRef, InteractionTarget};
use crate::error::{SurfaceError, SurfaceResult};
use crate::render::PageView;
use crate::session::{PageSurface, PressFilter};

/// An owned copy of the interaction whose reply is paginated.
enum Origin {
    Command(CommandInteraction),
    Component(ComponentInteraction),
    Modal(ModalInteraction),
}

impl From<InteractionRef<'_>> for Origin {
    fn from(interaction: InteractionRef<'_>) -> Self {
        match interaction {
            InteractionRef::Command(i) => Origin::Command(i.clone()),
            InteractionRef::Component(i) => Origin::Component(i.clone()),
            InteractionRef::Modal(i) => Origin::Modal(i.clone()),
        }
    }
}

/// Runs `$body` with `$i` bound to whichever interaction `$origin` holds.
macro_rules! on_origin {
    ($origin:expr, $i:ident => $body:expr) => {
        match $origin {
            Origin::Command($i) => $body,
            Origin::Component($i) => $body,
            Origin::Modal($i) => $body,
        }
    };
}

impl Origin {
    fn user_id(&self) -> UserId {
        on_origin!(self, i => i.user.id)
    }
}

/// Paginates the reply to a slash command, button press or modal submission.
pub struct InteractionSurface {
    ctx: Context,
    origin: Origin,
    deferred: bool,
    ephemeral: bool,
    presses: Option<Presses>,
}

impl InteractionSurface {
    pub fn new(ctx: &Context, target: InteractionTarget<'_>, options: &PaginationOptions) -> Self {
        Self {
            ctx: ctx.clone(),
            origin: target.interaction.into(),
            deferred: target.deferred,
            ephemeral: target.ephemeral || options.private_reply,
            presses: None,
        }
    }

    /// Creates the reply, or fills in the deferred one.
    async fn respond(
        &mut self,
        embed: CreateEmbed,
        view: Option<&PageView>,
    ) -> serenity::Result<Message> {
        let components = view.map(PageView::components).unwrap_or_default();
        let http = &self.ctx.http;

        if self.deferred {
            let builder = EditInteractionResponse::new()
                .embed(embed)
                .components(components);
            return on_origin!(&self.origin, i => i.edit_response(http, builder).await);
        }

        let data = CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components)
            .ephemeral(self.ephemeral);
        let response = CreateInteractionResponse::Message(data);
        on_origin!(&self.origin, i => i.create_response(http, response).await)?;
        on_origin!(&self.origin, i => i.get_response(http).await)
    }
}

#[async_trait]
impl PageSurface for InteractionSurface {
    type Press = ComponentInteraction;
    type Handle = Message;

    async fn show_static(&mut self, page: CreateEmbed) -> SurfaceResult<Message> {
        Ok(self.respond(page, None).await?)
    }

    async fn open(&mut self, view: PageView, filter: PressFilter) -> SurfaceResult<Message> {
        let message = self.respond(view.embed.clone(), Some(&view)).await?;
        self.presses = Some(collect_presses(
            &self.ctx,
            message.id,
            self.origin.user_id(),
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
        let http = &self.ctx.http;
        on_origin!(&self.origin, i => i.delete_response(http).await)?;
        self.presses = None;
        Ok(())
    }

    async fn is_present(&mut self) -> SurfaceResult<bool> {
        let http = &self.ctx.http;
        match on_origin!(&self.origin, i => i.get_response(http).await) {
            Ok(_) => Ok(true),
            Err(e) => match SurfaceError::from(e) {
                SurfaceError::Gone => Ok(false),
                e => Err(e),
            },
        }
    }

    async fn close(&mut self, view: PageView) -> SurfaceResult<()> {
        self.presses = None;
        let builder = EditInteractionResponse::new()
            .embed(view.embed.clone())
            .components(view.components());
        let http = &self.ctx.http;
        on_origin!(&self.origin, i => i.edit_response(http, builder).await)?;
        Ok(())
    }
}
