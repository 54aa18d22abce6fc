//! # Inspiration Architecture
//!
//! Inspiration prints one randomly chosen quote as a small decorated card in the terminal.
//! The work splits into two stages that run once, one after the other:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, decides on color      │
//! │  - The ONLY place that prints diagnostics or sets exit codes│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Quote Store (store.rs)                                     │
//! │  - Locates and parses the CSV file                          │
//! │  - Picks one record uniformly at random                     │
//! │  - Returns Result<QuoteRecord, QuoteError>                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Renderer (render.rs, terminal.rs, styles.rs)               │
//! │  - Sizes the card from the terminal width                   │
//! │  - Wraps and colors the quote and its attribution           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors Are Values
//!
//! Loading can fail in a handful of expected ways: the file is missing, its header is
//! too short, or it holds no quotes. Each of these is a [`error::QuoteError`] variant;
//! nothing in the library prints or exits. An unknown terminal size is not an error at
//! all: [`terminal::display_width`] quietly falls back to 80 columns.
//!
//! ## Module Overview
//!
//! - [`model`]: the [`model::QuoteRecord`] type
//! - [`store`]: CSV loading and random selection
//! - [`terminal`]: terminal width and the [`terminal::Layout`] derived from it
//! - [`styles`]: the named color palette
//! - [`render`]: the quote card itself
//! - [`error`]: error types

pub mod error;
pub mod model;
pub mod render;
pub mod store;
pub mod styles;
pub mod terminal;
