//! The page cursor state machine behind every paginated message.
//!
//! A [`Session`] owns its cursor and its collector, so any number of sessions
//! can run side by side without seeing each other's state. It talks to Discord
//! only through a [`PageSurface`], which is what lets the same loop drive both
//! interaction replies and channel messages.

use std::sync::Arc;

use serenity::all::{ComponentInteraction, CreateEmbed};
use serenity::async_trait;
use tokio::time::{timeout_at, Instant};

use crate::config::PaginationOptions;
use crate::control::{disabled_controls, Control, PageAction};
use crate::cursor::Cursor;
use crate::diagnostics::{Diagnostics, Stage, SuppressedFailure};
use crate::dispatch::Plan;
use crate::error::{PaginationError, SurfaceError, SurfaceResult};
use crate::render::{render_page, PageView};

/// A button press delivered by a collector.
pub trait Press: Send {
    fn custom_id(&self) -> &str;
}

impl Press for ComponentInteraction {
    fn custom_id(&self) -> &str {
        &self.data.custom_id
    }
}

/// Which presses the collector should let through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressFilter {
    pub custom_ids: Vec<String>,
    /// Only accept presses from the user who started the pagination.
    pub author_only: bool,
}

/// The Discord primitive a session renders through.
#[async_trait]
pub trait PageSurface: Send + 'static {
    type Press: Press;
    /// What the caller gets back once the first page is shown.
    type Handle: Send;

    /// Shows a single page without any buttons.
    async fn show_static(&mut self, page: CreateEmbed) -> SurfaceResult<Self::Handle>;

    /// Shows the first page with its buttons and starts collecting presses.
    async fn open(&mut self, view: PageView, filter: PressFilter) -> SurfaceResult<Self::Handle>;

    /// Waits for the next press. `None` once the collector has stopped.
    async fn next_press(&mut self) -> Option<Self::Press>;

    /// Acknowledges `press` by updating the message in place.
    async fn acknowledge(&mut self, press: Self::Press, view: PageView) -> SurfaceResult<()>;

    async fn delete(&mut self) -> SurfaceResult<()>;

    /// Whether the rendered message still exists.
    async fn is_present(&mut self) -> SurfaceResult<bool>;

    /// Replaces the message with its final, non interactive state.
    async fn close(&mut self, view: PageView) -> SurfaceResult<()>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Timed out and the buttons were disabled.
    Expired,
    /// Timed out and the message was deleted.
    AutoDeleted,
    /// The delete button was pressed.
    Deleted,
    /// Timed out but the message was already gone.
    Vanished,
    /// Timed out and cleaning up failed.
    CleanupFailed,
}

pub struct Session<S: PageSurface> {
    surface: S,
    pages: Vec<CreateEmbed>,
    controls: Vec<Control>,
    routes: Vec<(String, PageAction)>,
    cursor: Cursor,
    options: PaginationOptions,
    diagnostics: Arc<dyn Diagnostics>,
}

/// The result of rendering the first page.
pub struct Launched<S: PageSurface> {
    pub handle: S::Handle,
    /// `None` when there was only one page to show.
    pub session: Option<Session<S>>,
}

/// Renders the first page of `plan` on `surface`.
///
/// Errors here come straight from Discord and are returned unchanged.
pub async fn launch<S: PageSurface, C: Send>(
    mut surface: S,
    plan: Plan<C>,
) -> Result<Launched<S>, PaginationError> {
    if plan.pages.len() < 2 {
        let page = plan
            .pages
            .into_iter()
            .next()
            .unwrap_or_else(CreateEmbed::new);
        let handle = surface.show_static(page).await?;
        return Ok(Launched {
            handle,
            session: None,
        });
    }

    let mut session = Session {
        surface,
        cursor: Cursor::new(plan.pages.len()),
        pages: plan.pages,
        controls: plan.controls,
        routes: plan.routes,
        options: plan.options,
        diagnostics: plan.diagnostics,
    };

    let filter = PressFilter {
        custom_ids: session.routes.iter().map(|(id, _)| id.clone()).collect(),
        author_only: !session.options.author_independent,
    };
    let view = session.view();
    let handle = session.surface.open(view, filter).await?;

    Ok(Launched {
        handle,
        session: Some(session),
    })
}

impl<S: PageSurface> Session<S> {
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn view(&self) -> PageView {
        render_page(&self.pages, &self.cursor, &self.controls, &self.options)
    }

    fn route(&self, custom_id: &str) -> Option<PageAction> {
        self.routes
            .iter()
            .find(|(id, _)| id == custom_id)
            .map(|(_, action)| *action)
    }

    fn suppress(&self, stage: Stage, err: SurfaceError) {
        let SurfaceError::Platform(err) = err else {
            return;
        };
        self.diagnostics.suppressed(SuppressedFailure {
            stage,
            error: err.to_string(),
        });
    }

    /// Handles presses until the session times out or is deleted.
    ///
    /// A delete button press that fails for any reason other than the message
    /// being gone ends the session like a timeout does.
    pub async fn run(mut self) -> SessionEnd {
        let timeout = self.options.timeout();
        let mut deadline = Instant::now() + timeout;

        loop {
            let press = match timeout_at(deadline, self.surface.next_press()).await {
                Ok(Some(press)) => press,
                Ok(None) | Err(_) => break,
            };

            // the collector should already filter these
            let Some(action) = self.route(press.custom_id()) else {
                continue;
            };

            if !self.cursor.apply(action) {
                match self.surface.delete().await {
                    Ok(()) => return SessionEnd::Deleted,
                    Err(SurfaceError::Gone) => return SessionEnd::Vanished,
                    Err(e) => {
                        // still up, so it has to be disabled like on a timeout
                        self.suppress(Stage::Delete, e);
                        break;
                    }
                }
            }

            let view = self.view();
            if let Err(e) = self.surface.acknowledge(press, view).await {
                self.suppress(Stage::Navigate, e);
            }
            deadline = Instant::now() + timeout;
        }

        self.expire().await
    }

    async fn expire(mut self) -> SessionEnd {
        if self.options.auto_delete {
            return match self.surface.delete().await {
                Ok(()) => SessionEnd::AutoDeleted,
                Err(SurfaceError::Gone) => SessionEnd::Vanished,
                Err(e) => {
                    self.suppress(Stage::Expire, e);
                    SessionEnd::CleanupFailed
                }
            };
        }

        match self.surface.is_present().await {
            Ok(true) => {}
            Ok(false) | Err(SurfaceError::Gone) => return SessionEnd::Vanished,
            Err(e) => {
                self.suppress(Stage::Lookup, e);
                return SessionEnd::CleanupFailed;
            }
        }

        let mut view = self.view();
        view.controls = disabled_controls(&self.controls);
        match self.surface.close(view).await {
            Ok(()) => SessionEnd::Expired,
            Err(SurfaceError::Gone) => SessionEnd::Vanished,
            Err(e) => {
                self.suppress(Stage::Expire, e);
                SessionEnd::CleanupFailed
            }
        }
    }
}
