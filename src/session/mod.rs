//! In-memory session history for one browser tab.
//!
//! - [`Transcript`]: the conversation currently on screen, as rendered blocks
//! - [`Snapshot`]: a captured transcript stored inside a [`Session`]
//! - [`SessionStore`]: ordered history plus the current index and id

mod store;
mod transcript;

pub use store::{Session, SessionStore};
pub use transcript::{derive_title, Block, BlockId, Snapshot, Transcript, UNTITLED};
