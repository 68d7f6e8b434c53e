//! # vigia-session
//!
//! Owns the dashboard session state and sequences the two remote call
//! families: on-demand prediction and the comuna ranking fetch.
//!
//! Each family moves through `Idle -> Loading -> Succeeded | Failed` on its
//! own [`CallState`]. Calls are split into a `begin_*` step, which assigns a
//! sequence number and enters `Loading`, and a `finish_*` step, which applies
//! the result only if no newer call of the same family was begun since. The
//! most recently submitted call always wins, regardless of completion order.
//!
//! Failures never escape the orchestrator: they become a fixed message in the
//! family's `error` field and leave previously rendered data untouched.

mod sequence;
mod session;
mod state;

pub use sequence::Sequencer;
pub use session::{Completion, PredictionTicket, RankingTicket, Session};
pub use state::{CallPhase, CallState, PREDICTION_ERROR, RANKING_ERROR, SessionState};
