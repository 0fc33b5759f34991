//! Repository implementations module.
//!
//! The booking ledger keeps no durable state, so the in-memory `local`
//! implementation is the only backend.
pub mod local;

pub use local::LocalRepository;
