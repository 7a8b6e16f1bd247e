//! Button driven pagination of embeds for serenity bots.
//!
//! A list of [`CreateEmbed`](serenity::all::CreateEmbed) pages is shown one at a
//! time under a single message, with buttons to step through them. After a
//! period without presses the buttons are disabled (or the message deleted).
//!
//! Start with [`Pagination`].

pub mod logging;

pub mod config;
pub mod control;
pub mod cursor;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod renderers;
pub mod session;

pub use config::PaginationOptions;
pub use control::{disabled_controls, Control, ControlKind, PageAction};
pub use cursor::Cursor;
pub use diagnostics::{ConsoleDiagnostics, Diagnostics, RecordingDiagnostics, Warning};
pub use dispatch::{InteractionRef, InteractionTarget, Pagination, PaginationHandle, Target};
pub use error::{PaginationError, SurfaceError, SurfaceResult};
pub use session::{PageSurface, SessionEnd};
