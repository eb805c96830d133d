//! Types shared by the chat screens: the wire contract of the (external)
//! tutoring backend and the checklist tree renderer.
//!
//! Everything here must stay WASM-compatible and framework-free so the
//! frontend can depend on it and the tests can run natively.

pub mod api;
pub mod tree;

pub use api::{ApiError, ChatMessage, ChatRequest, ChatResponse, Role, SessionState};
pub use tree::{render, Node, VisualTree};
