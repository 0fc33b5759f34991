//! # Flightdesk Backend
//!
//! In-memory airport and flight booking ledger.
//!
//! This crate tracks airports, flights, passengers, and per-flight booking
//! rosters, and answers a small set of analytical queries on top of them:
//! largest airport, shortest route duration, per-airport occupancy on a date,
//! demand-driven fares, and revenue reconstruction from booking order. The
//! ledger is exposed over a REST API via Axum.
//!
//! ## Features
//!
//! - **Entity tables**: airports (keyed by name), flights and passengers
//!   (keyed by integer ID), add-only with overwrite-on-rekey
//! - **Booking rosters**: ordered per-flight passenger lists with capacity
//!   and duplicate-booking enforcement
//! - **Derived queries**: all analytics are linear scans over the tables;
//!   the dataset is assumed small enough that no index is kept
//! - **Seed ingest**: JSON datasets can be loaded at startup
//! - **HTTP API**: RESTful endpoints for the booking operations
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Entity types and ID newtypes shared across layers
//! - [`models`]: City enumeration and seed-dataset parsing
//! - [`db`]: Repository pattern and the in-memory ledger backend
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod config;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
