//! Ledger storage module.
//!
//! This module provides abstractions for ledger operations via the Repository
//! pattern, keeping the storage backend swappable behind trait objects.
//!
//! # Architecture
//!
//! The module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, seed ingest, tests)       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! │  - DirectoryRepository: entity tables and lookups       │
//! │  - BookingRepository: rosters, fares, revenue           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no service layer in between: the repository traits
//! are the whole core contract, and the HTTP handlers call them directly.
//!
//! # Recommended Usage
//!
//! ```
//! use flightdesk::api::{Airport, City};
//! use flightdesk::db::{LocalRepository, DirectoryRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = LocalRepository::new();
//! repo.add_airport(Airport::new("DEL", City::Delhi, 3)).await?;
//! assert_eq!(repo.largest_airport_name().await?, Some("DEL".to_string()));
//! # Ok(())
//! # }
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{
    BookingRepository, DirectoryRepository, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult, BASE_FARE, FARE_STEP,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

fn create_selected_repository() -> Arc<dyn FullRepository> {
    Arc::new(LocalRepository::new())
}

/// Initialize the global repository singleton.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let _ = REPOSITORY.set(create_selected_repository());
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Ledger not initialized. Call init_repository() first.")
}
