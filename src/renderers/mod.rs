//! The serenity backed [`PageSurface`](crate::session::PageSurface)s.

use serenity::all::{ComponentInteraction, ComponentInteractionCollector, Context, MessageId, UserId};
use serenity::futures::stream::{BoxStream, StreamExt};

use crate::session::PressFilter;

mod interaction;
mod message;

pub use interaction::InteractionSurface;
pub use message::MessageSurface;

type Presses = BoxStream<'static, ComponentInteraction>;

/// Collects presses on `message_id` that pass `filter`.
///
/// The collector has no timeout of its own, the session decides when to stop
/// listening and dropping the stream detaches it.
fn collect_presses(
    ctx: &Context,
    message_id: MessageId,
    author: UserId,
    filter: PressFilter,
) -> Presses {
    let mut collector = ComponentInteractionCollector::new(ctx).message_id(message_id);
    if filter.author_only {
        collector = collector.author_id(author);
    }

    let custom_ids = filter.custom_ids;
    collector
        .filter(move |press| custom_ids.contains(&press.data.custom_id))
        .stream()
        .boxed()
}
