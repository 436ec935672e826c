//! Service layer for circulate
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence ordering, and audit logging.

pub mod session;

pub use session::{ProfileUpdate, SessionService, SignupInput};
