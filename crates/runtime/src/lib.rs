//! Runtime orchestration for one quiz play-through.
//!
//! This crate wires the question-bank collaborator, oracle access and the
//! `quiz-core` engine into a single synchronous API. Presentation layers embed
//! [`QuizSession`] to drive actions, read the state and manage the
//! wrong-answer notice.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session facade
//! - [`api`] exposes the error types downstream clients interact with
//! - [`oracle`] bundles the static oracles into a [`quiz_core::GameEnv`]
pub mod api;
pub mod oracle;
pub mod session;

pub use api::{Result, SessionError};
pub use oracle::OracleManager;
pub use session::QuizSession;
