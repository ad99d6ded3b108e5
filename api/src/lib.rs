//! # Idea Mandir API
//!
//! HTTP surface of the Idea Mandir backend. The binary in `main.rs` wires the
//! infrastructure implementations into [`state::AppState`] and serves
//! [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::{AppState, Collaborators};
