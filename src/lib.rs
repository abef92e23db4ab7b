//! Core of the course materials chat client.
//!
//! Platform independent: the browser frontend supplies a [`ChatApi`] over HTTP
//! and applies the markup produced here; tests supply a fake one.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod service;
pub mod session;

pub use api::ChatApi;
pub use config::ClientConfig;
pub use errors::ChatError;
pub use models::{CourseStats, Message, QueryRequest, QueryResponse, Role, Source};
pub use render::{Renderer, SidebarEntry};
pub use service::{ChatController, StatsNotice, StatsPanel, StatsView, TurnOutcome, TurnState};
pub use session::{Session, SessionStore, Snapshot, Transcript};
