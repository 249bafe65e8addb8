//! # Ainav Architecture
//!
//! Ainav is a **UI-agnostic catalog library** for browsing AI tools. The terminal client
//! in `ainav-cli` is one consumer; a web frontend or an HTTP endpoint could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (ainav-cli)                                       │
//! │  - Parses arguments, renders pages, handles terminal I/O    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the loaded catalog, preferences store and config    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Query engine, count aggregation, pagination, titles      │
//! │  - Pure functions over immutable data                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (store/, prefs/)                                   │
//! │  - CatalogSource: builtin, JSON directory, in-memory        │
//! │  - PrefsStore: JSON file, in-memory                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutable Catalog
//!
//! Tools, articles and the category tree are loaded once and never mutated. Every query
//! returns a new `Vec` in store order, so the catalog can be shared freely between
//! readers without any locking.
//!
//! ## Selectors
//!
//! Browsing state is expressed as a tagged [`selector::Selector`] rather than an encoded
//! `"category-subcategory"` string. Legacy encoded strings are still accepted, but they
//! go through exactly one parsing routine, [`selector::Selector::parse_encoded`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic (query, counts, paginate, title, articles, favorites)
//! - [`selector`]: Tagged browsing selector and the shared legacy parser
//! - [`model`]: Core data types (`Tool`, `Article`, `Category`, `SubCategory`)
//! - [`store`]: Catalog sources
//! - [`prefs`]: User preferences value object and its persistence adapters
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prefs;
pub mod selector;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
