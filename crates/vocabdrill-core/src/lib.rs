//! vocabdrill-core — practice session state machine and data model.
//!
//! This crate defines the wire types, the [`Session`](session::Session) value
//! type with its transitions, the render-time view model, the service traits
//! for the word and validation endpoints, and the controller tying them
//! together.

pub mod controller;
pub mod error;
pub mod mock;
pub mod model;
pub mod session;
pub mod traits;
pub mod view;

pub use controller::{NoopObserver, Outcome, SessionController, SessionObserver};
pub use error::{ServiceError, SessionError};
pub use model::{SentenceSubmission, SeverityBand, ValidationResult, Word};
pub use session::{Phase, Rejection, Session};
pub use view::SessionView;
