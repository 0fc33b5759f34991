//! HTTP server module for the flightdesk backend.
//!
//! This module provides an axum-based HTTP server that exposes the booking
//! ledger as a REST API. Handlers call the repository traits directly; the
//! traits are the whole core contract and need no forwarding layer above
//! them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (existing db/)                          │
//! │  - Entity tables, rosters, derived queries                │
//! │  - LocalRepository                                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
