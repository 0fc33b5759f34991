//! Repository trait definitions.
//!
//! The ledger contract is split by concern: [`DirectoryRepository`] covers
//! the entity tables and their lookups, [`BookingRepository`] covers roster
//! mutations and the fare/revenue queries. [`FullRepository`] combines both
//! for consumers that need the whole ledger (the HTTP layer, seeding).

pub mod booking;
pub mod directory;
pub mod error;

pub use booking::{BookingRepository, BASE_FARE, FARE_STEP};
pub use directory::DirectoryRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Combined repository trait covering every ledger operation.
pub trait FullRepository: DirectoryRepository + BookingRepository {}

impl<T: DirectoryRepository + BookingRepository> FullRepository for T {}
