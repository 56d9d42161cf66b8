//! Editor session state and message handling
//!
//! This module contains:
//! - Editor: the owned editing context (state.rs)
//! - Drag sessions and wheel zoom (interaction.rs)
//! - Load request tracking (loader.rs)
//! - EditorMsg for control input (messages.rs)

pub mod interaction;
pub mod loader;
pub mod messages;
pub mod state;

pub use interaction::{DragSession, DragTuning};
pub use loader::{LoadKind, LoadOutcome, LoadTicket};
pub use messages::EditorMsg;
pub use state::{Editor, EditorStatus};
