use std::fmt;
use std::sync::Arc;

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateEmbed, Message, ModalInteraction,
};
use tokio::task::JoinHandle;

use crate::config::{is_single_glyph, PaginationOptions, MIN_TIMEOUT_MS};
use crate::control::{routes, Control, PageAction, MAX_CONTROLS, MIN_CONTROLS};
use crate::diagnostics::{ConsoleDiagnostics, Diagnostics, Warning};
use crate::error::PaginationError;
use crate::renderers::{InteractionSurface, MessageSurface};
use crate::session::{launch, PageSurface, SessionEnd};

/// What kind of context a pagination was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    Message,
    Interaction { ephemeral: bool },
}

/// Anything a pagination can be started from.
pub trait PaginationContext {
    fn kind(&self) -> ContextKind;
}

impl PaginationContext for ContextKind {
    fn kind(&self) -> ContextKind {
        *self
    }
}

/// The message or interaction a [`Pagination`] renders on.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Message(&'a Message),
    Interaction(InteractionTarget<'a>),
}

impl PaginationContext for Target<'_> {
    fn kind(&self) -> ContextKind {
        match self {
            Target::Message(_) => ContextKind::Message,
            Target::Interaction(target) => ContextKind::Interaction {
                ephemeral: target.ephemeral,
            },
        }
    }
}

/// The raw, unvalidated input of a pagination.
#[derive(Debug, Clone)]
pub struct Draft<C = ContextKind> {
    /// Every context that was supplied; exactly one is required.
    pub contexts: Vec<C>,
    pub page_list: Option<Vec<CreateEmbed>>,
    /// Deprecated alias of `page_list`.
    pub pages: Option<Vec<CreateEmbed>>,
    pub button_list: Option<Vec<Control>>,
    pub options: PaginationOptions,
}

impl<C> Default for Draft<C> {
    fn default() -> Self {
        Self {
            contexts: Vec::new(),
            page_list: None,
            pages: None,
            button_list: None,
            options: PaginationOptions::default(),
        }
    }
}

/// A validated pagination, ready to be rendered on `context`.
pub struct Plan<C = ContextKind> {
    pub context: C,
    pub pages: Vec<CreateEmbed>,
    pub controls: Vec<Control>,
    pub routes: Vec<(String, PageAction)>,
    pub options: PaginationOptions,
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl<C: fmt::Debug> fmt::Debug for Plan<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("context", &self.context)
            .field("pages", &self.pages.len())
            .field("controls", &self.controls)
            .field("routes", &self.routes)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<C: PaginationContext> Plan<C> {
    /// Validates `draft`, reporting soft problems to `diagnostics`.
    pub fn build(
        draft: Draft<C>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self, PaginationError> {
        let Draft {
            mut contexts,
            mut page_list,
            pages,
            button_list,
            options,
        } = draft;

        if page_list.is_none() {
            if let Some(pages) = pages {
                diagnostics.warn(Warning::DeprecatedPages);
                page_list = Some(pages);
            }
        }

        if contexts.len() > 1 {
            return Err(PaginationError::AmbiguousContext);
        }
        let context = contexts.pop().ok_or(PaginationError::MissingContext)?;

        let pages = match page_list {
            Some(pages) if !pages.is_empty() => pages,
            _ => return Err(PaginationError::MissingPages),
        };
        let mut controls = button_list.ok_or(PaginationError::MissingButtons)?;

        if options.timeout_ms < MIN_TIMEOUT_MS {
            return Err(PaginationError::TimeoutTooShort(options.timeout_ms));
        }
        if !is_single_glyph(&options.pro_slider) {
            return Err(PaginationError::InvalidSlider(options.pro_slider));
        }
        if !is_single_glyph(&options.pro_bar) {
            return Err(PaginationError::InvalidBar(options.pro_bar));
        }

        if controls.len() < MIN_CONTROLS {
            return Err(PaginationError::NotEnoughButtons(controls.len()));
        }
        if controls.len() > MAX_CONTROLS {
            diagnostics.warn(Warning::ButtonsTruncated {
                provided: controls.len(),
            });
            controls.truncate(MAX_CONTROLS);
        }

        if let Some(index) = controls.iter().position(Control::is_link) {
            return Err(PaginationError::LinkButton(index));
        }

        let routes = routes(&controls);

        let ephemeral = match context.kind() {
            ContextKind::Interaction { ephemeral } => ephemeral || options.private_reply,
            ContextKind::Message => false,
        };
        if ephemeral {
            let has_delete = routes
                .iter()
                .any(|(_, action)| *action == PageAction::Delete);
            if controls.len() == 3 || controls.len() == 5 || has_delete {
                return Err(PaginationError::EphemeralDelete);
            }
            if options.auto_delete {
                return Err(PaginationError::EphemeralAutoDelete);
            }
        }

        if options.reply_message && options.private_reply {
            diagnostics.warn(Warning::PrivateReplyOverridesReply);
        }

        Ok(Self {
            context,
            pages,
            controls,
            routes,
            options,
            diagnostics,
        })
    }
}

/// The interactions whose reply can be paginated.
#[derive(Debug, Clone, Copy)]
pub enum InteractionRef<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
    Modal(&'a ModalInteraction),
}

impl<'a> From<&'a CommandInteraction> for InteractionRef<'a> {
    fn from(interaction: &'a CommandInteraction) -> Self {
        InteractionRef::Command(interaction)
    }
}

impl<'a> From<&'a ComponentInteraction> for InteractionRef<'a> {
    fn from(interaction: &'a ComponentInteraction) -> Self {
        InteractionRef::Component(interaction)
    }
}

impl<'a> From<&'a ModalInteraction> for InteractionRef<'a> {
    fn from(interaction: &'a ModalInteraction) -> Self {
        InteractionRef::Modal(interaction)
    }
}

/// An interaction to paginate from.
#[derive(Debug, Clone, Copy)]
pub struct InteractionTarget<'a> {
    pub interaction: InteractionRef<'a>,
    /// The interaction was already deferred, so the reply is edited instead of created.
    pub deferred: bool,
    /// The existing or deferred reply is ephemeral.
    pub ephemeral: bool,
}

impl<'a> InteractionTarget<'a> {
    pub fn new<I: Into<InteractionRef<'a>>>(interaction: I) -> Self {
        Self {
            interaction: interaction.into(),
            deferred: false,
            ephemeral: false,
        }
    }

    pub fn deferred(mut self, deferred: bool) -> Self {
        self.deferred = deferred;
        self
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }
}

impl<'a> From<&'a CommandInteraction> for InteractionTarget<'a> {
    fn from(interaction: &'a CommandInteraction) -> Self {
        Self::new(interaction)
    }
}

impl<'a> From<&'a ComponentInteraction> for InteractionTarget<'a> {
    fn from(interaction: &'a ComponentInteraction) -> Self {
        Self::new(interaction)
    }
}

impl<'a> From<&'a ModalInteraction> for InteractionTarget<'a> {
    fn from(interaction: &'a ModalInteraction) -> Self {
        Self::new(interaction)
    }
}

/// The rendered message, plus the running session if there was more than one page.
#[derive(Debug)]
pub struct PaginationHandle {
    pub message: Message,
    pub session: Option<JoinHandle<SessionEnd>>,
}

/// Builder for a paginated embed.
///
/// ```no_run
/// # use embed_pager::{Control, Pagination};
/// # use serenity::all::{Context, CreateEmbed, Message};
/// # async fn demo(ctx: &Context, msg: &Message) -> Result<(), embed_pager::PaginationError> {
/// let handle = Pagination::new()
///     .message(msg)
///     .page_list(vec![CreateEmbed::new().title("A"), CreateEmbed::new().title("B")])
///     .button_list(vec![Control::button("prev").label("<"), Control::button("next").label(">")])
///     .timeout_ms(30_000)
///     .run(ctx)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Pagination<'a> {
    message: Option<&'a Message>,
    interaction: Option<InteractionTarget<'a>>,
    page_list: Option<Vec<CreateEmbed>>,
    pages: Option<Vec<CreateEmbed>>,
    button_list: Option<Vec<Control>>,
    options: PaginationOptions,
    diagnostics: Arc<dyn Diagnostics>,
}

impl<'a> Default for Pagination<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Pagination<'a> {
    pub fn new() -> Self {
        Self {
            message: None,
            interaction: None,
            page_list: None,
            pages: None,
            button_list: None,
            options: PaginationOptions::default(),
            diagnostics: Arc::new(ConsoleDiagnostics),
        }
    }

    pub fn message(mut self, message: &'a Message) -> Self {
        self.message = Some(message);
        self
    }

    pub fn interaction<I: Into<InteractionTarget<'a>>>(mut self, interaction: I) -> Self {
        self.interaction = Some(interaction.into());
        self
    }

    pub fn page_list(mut self, pages: Vec<CreateEmbed>) -> Self {
        self.page_list = Some(pages);
        self
    }

    #[deprecated(note = "use page_list instead")]
    pub fn pages(mut self, pages: Vec<CreateEmbed>) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn button_list(mut self, buttons: Vec<Control>) -> Self {
        self.button_list = Some(buttons);
        self
    }

    /// Replaces every option at once, e.g. with ones loaded from a config file.
    pub fn options(mut self, options: PaginationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.options.timeout_ms = timeout_ms;
        self
    }

    pub fn reply_message(mut self, reply: bool) -> Self {
        self.options.reply_message = reply;
        self
    }

    pub fn auto_delete(mut self, auto_delete: bool) -> Self {
        self.options.auto_delete = auto_delete;
        self
    }

    pub fn private_reply(mut self, private: bool) -> Self {
        self.options.private_reply = private;
        self
    }

    pub fn progress_bar(mut self, progress_bar: bool) -> Self {
        self.options.progress_bar = progress_bar;
        self
    }

    pub fn pro_slider<S: Into<String>>(mut self, glyph: S) -> Self {
        self.options.pro_slider = glyph.into();
        self
    }

    pub fn pro_bar<S: Into<String>>(mut self, glyph: S) -> Self {
        self.options.pro_bar = glyph.into();
        self
    }

    pub fn author_independent(mut self, independent: bool) -> Self {
        self.options.author_independent = independent;
        self
    }

    pub fn diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    fn draft(&mut self) -> Draft<Target<'a>> {
        let mut contexts = Vec::new();
        if let Some(message) = self.message {
            contexts.push(Target::Message(message));
        }
        if let Some(target) = self.interaction {
            contexts.push(Target::Interaction(target));
        }

        Draft {
            contexts,
            page_list: self.page_list.take(),
            pages: self.pages.take(),
            button_list: self.button_list.take(),
            options: self.options.clone(),
        }
    }

    /// Validates the configuration, shows the first page and starts the session.
    ///
    /// Configuration errors are returned before anything is sent to Discord.
    /// Once the first page is up, the session runs on its own task and never
    /// reports errors back here.
    pub async fn run(mut self, ctx: &Context) -> Result<PaginationHandle, PaginationError> {
        let draft = self.draft();
        let plan = Plan::build(draft, Arc::clone(&self.diagnostics))?;

        match plan.context {
            Target::Message(message) => {
                let surface = MessageSurface::new(ctx, message, &plan.options);
                start(surface, plan).await
            }
            Target::Interaction(target) => {
                let surface = InteractionSurface::new(ctx, target, &plan.options);
                start(surface, plan).await
            }
        }
    }
}

async fn start<S, C>(surface: S, plan: Plan<C>) -> Result<PaginationHandle, PaginationError>
where
    S: PageSurface<Handle = Message>,
    C: Send,
{
    let launched = launch(surface, plan).await?;
    let session = launched
        .session
        .map(|session| tokio::spawn(session.run()));

    Ok(PaginationHandle {
        message: launched.handle,
        session,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;

    fn pages(count: usize) -> Vec<CreateEmbed> {
        (0..count)
            .map(|i| CreateEmbed::new().title(format!("Page {}", i)))
            .collect()
    }

    fn buttons(count: usize) -> Vec<Control> {
        (0..count)
            .map(|i| Control::button(format!("button_{}", i)))
            .collect()
    }

    fn draft(context: ContextKind, page_count: usize, button_count: usize) -> Draft {
        Draft {
            contexts: vec![context],
            page_list: Some(pages(page_count)),
            button_list: Some(buttons(button_count)),
            ..Default::default()
        }
    }

    fn build(draft: Draft) -> (Result<Plan, PaginationError>, Arc<RecordingDiagnostics>) {
        let diagnostics = Arc::new(RecordingDiagnostics::new());
        let plan = Plan::build(draft, diagnostics.clone());
        (plan, diagnostics)
    }

    #[test]
    fn valid_draft_builds() {
        let (plan, diagnostics) = build(draft(ContextKind::Message, 3, 2));
        let plan = plan.unwrap();
        assert_eq!(plan.pages.len(), 3);
        assert_eq!(plan.routes.len(), 2);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn missing_context_fails() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        draft.contexts.clear();
        let (plan, _) = build(draft);
        assert!(matches!(plan, Err(PaginationError::MissingContext)));
    }

    #[test]
    fn two_contexts_fail() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        draft
            .contexts
            .push(ContextKind::Interaction { ephemeral: false });
        let (plan, _) = build(draft);
        assert!(matches!(plan, Err(PaginationError::AmbiguousContext)));
    }

    #[test]
    fn missing_or_empty_pages_fail() {
        let mut missing = draft(ContextKind::Message, 3, 2);
        missing.page_list = None;
        assert!(matches!(build(missing).0, Err(PaginationError::MissingPages)));

        let empty = draft(ContextKind::Message, 0, 2);
        assert!(matches!(build(empty).0, Err(PaginationError::MissingPages)));
    }

    #[test]
    fn deprecated_pages_alias_is_accepted_with_warning() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        draft.pages = draft.page_list.take();
        let (plan, diagnostics) = build(draft);
        assert_eq!(plan.unwrap().pages.len(), 3);
        assert_eq!(diagnostics.warnings(), vec![Warning::DeprecatedPages]);
    }

    #[test]
    fn page_list_wins_over_alias() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        draft.pages = Some(pages(5));
        let (plan, diagnostics) = build(draft);
        assert_eq!(plan.unwrap().pages.len(), 3);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn missing_buttons_fail() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        draft.button_list = None;
        assert!(matches!(build(draft).0, Err(PaginationError::MissingButtons)));
    }

    #[test]
    fn too_few_buttons_fail() {
        for count in 0..2 {
            let (plan, _) = build(draft(ContextKind::Message, 3, count));
            assert!(matches!(plan, Err(PaginationError::NotEnoughButtons(n)) if n == count));
        }
    }

    #[test]
    fn extra_buttons_are_truncated() {
        let (plan, diagnostics) = build(draft(ContextKind::Message, 3, 7));
        let plan = plan.unwrap();
        assert_eq!(plan.controls.len(), 5);
        assert_eq!(plan.controls[4].custom_id(), Some("button_4"));
        assert_eq!(
            diagnostics.warnings(),
            vec![Warning::ButtonsTruncated { provided: 7 }]
        );
    }

    #[test]
    fn short_timeout_fails() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        draft.options.timeout_ms = 999;
        assert!(matches!(
            build(draft).0,
            Err(PaginationError::TimeoutTooShort(999))
        ));

        let mut draft = self::draft(ContextKind::Message, 3, 2);
        draft.options.timeout_ms = 1000;
        assert!(build(draft).0.is_ok());
    }

    #[test]
    fn glyphs_must_be_single_characters() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        draft.options.pro_slider = "=>".to_string();
        assert!(matches!(build(draft).0, Err(PaginationError::InvalidSlider(_))));

        let mut draft = self::draft(ContextKind::Message, 3, 2);
        draft.options.pro_bar = "--".to_string();
        assert!(matches!(build(draft).0, Err(PaginationError::InvalidBar(_))));
    }

    #[test]
    fn link_buttons_fail() {
        let mut draft = draft(ContextKind::Message, 3, 2);
        if let Some(buttons) = draft.button_list.as_mut() {
            buttons.push(Control::link("https://example.com"));
        }
        assert!(matches!(build(draft).0, Err(PaginationError::LinkButton(2))));
    }

    #[test]
    fn ephemeral_rejects_delete_buttons() {
        let ephemeral = ContextKind::Interaction { ephemeral: true };
        for count in [3, 5] {
            assert!(matches!(
                build(draft(ephemeral, 3, count)).0,
                Err(PaginationError::EphemeralDelete)
            ));
        }
        assert!(build(draft(ephemeral, 3, 2)).0.is_ok());
    }

    #[test]
    fn ephemeral_accepts_rewired_third_button() {
        let mut draft = draft(ContextKind::Interaction { ephemeral: true }, 3, 2);
        if let Some(buttons) = draft.button_list.as_mut() {
            buttons.push(Control::button("first").action(PageAction::First));
            buttons.push(Control::button("last").action(PageAction::Last));
        }
        let plan = build(draft).0.unwrap();
        assert_eq!(plan.routes.len(), 4);
    }

    #[test]
    fn ephemeral_rejects_auto_delete() {
        let mut draft = draft(ContextKind::Interaction { ephemeral: true }, 3, 2);
        draft.options.auto_delete = true;
        assert!(matches!(
            build(draft).0,
            Err(PaginationError::EphemeralAutoDelete)
        ));
    }

    #[test]
    fn private_interaction_reply_counts_as_ephemeral() {
        let mut draft = draft(ContextKind::Interaction { ephemeral: false }, 3, 3);
        draft.options.private_reply = true;
        assert!(matches!(build(draft).0, Err(PaginationError::EphemeralDelete)));
    }

    #[test]
    fn private_reply_overrides_reply_with_warning() {
        let mut draft = draft(ContextKind::Message, 3, 3);
        draft.options.reply_message = true;
        draft.options.private_reply = true;
        let (plan, diagnostics) = build(draft);
        assert!(plan.is_ok());
        assert_eq!(
            diagnostics.warnings(),
            vec![Warning::PrivateReplyOverridesReply]
        );
    }

    #[test]
    fn plan_keeps_the_supplied_target() {
        let message = Message::default();
        let draft = Draft {
            contexts: vec![Target::Message(&message)],
            page_list: Some(pages(2)),
            button_list: Some(buttons(2)),
            ..Default::default()
        };
        let plan = Plan::build(draft, Arc::new(RecordingDiagnostics::new())).unwrap();
        assert!(matches!(plan.context, Target::Message(m) if std::ptr::eq(m, &message)));
        assert_eq!(plan.context.kind(), ContextKind::Message);
    }

    #[test]
    fn builder_routes_through_the_message_it_was_given() {
        let message = Message::default();
        let mut builder = Pagination::new()
            .message(&message)
            .page_list(pages(2))
            .button_list(buttons(2));
        let draft = builder.draft();
        assert_eq!(draft.contexts.len(), 1);

        let plan = Plan::build(draft, Arc::new(RecordingDiagnostics::new())).unwrap();
        assert!(matches!(plan.context, Target::Message(m) if std::ptr::eq(m, &message)));
    }

    #[test]
    fn builder_without_context_fails_before_rendering() {
        let mut builder = Pagination::new().page_list(pages(2)).button_list(buttons(2));
        let plan = Plan::build(builder.draft(), Arc::new(RecordingDiagnostics::new()));
        assert!(matches!(plan, Err(PaginationError::MissingContext)));
    }

    #[test]
    fn every_interaction_kind_is_a_target() {
        // serenity offers no way to build these outside a gateway event, so this
        // only has to compile
        fn targets<'a>(
            command: &'a CommandInteraction,
            component: &'a ComponentInteraction,
            modal: &'a ModalInteraction,
        ) -> [Target<'a>; 3] {
            [
                Target::Interaction(command.into()),
                Target::Interaction(component.into()),
                Target::Interaction(InteractionTarget::new(modal).ephemeral(true)),
            ]
        }
        let _ = targets;
    }

    #[test]
    fn single_page_is_valid() {
        let (plan, _) = build(draft(ContextKind::Message, 1, 2));
        assert_eq!(plan.unwrap().pages.len(), 1);
    }
}
