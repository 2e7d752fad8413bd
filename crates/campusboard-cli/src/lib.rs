//! # Campusboard CLI
//!
//! Demo data generation for the Campusboard console.
//!
//! This library crate provides the seeding functionality used by the CLI binary
//! when it runs against an in-memory directory (`--demo`).
//!
//! ## Usage
//!
//! ```ignore
//! use campusboard_cli::seeder::{SeedConfig, seed_directory};
//!
//! let directory = seed_directory(&SeedConfig::default());
//! ```

pub mod seeder;
