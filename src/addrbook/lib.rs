//! # Addrbook Architecture
//!
//! Addrbook is a small contact manager built as a **UI-agnostic library** with a
//! thin interactive CLI on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument parsing, the numbered menu, terminal output     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook and the ContactStore                │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, turns outcomes into messages   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (book.rs) + Storage Layer (store/)            │
//! │  - Ordered, owned contact collection and its operations     │
//! │  - ContactStore trait: FileStore, InMemoryStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//!
//! The book is a single ordered sequence. Adds go to the front; sorting orders
//! by name, byte-wise and stable. Loading pushes the stored records to the
//! front and then sorts, so a freshly loaded book is always in name order.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`book`]: The in-memory record store
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Persistence abstraction, the pipe-delimited codec and backends
//! - [`model`]: `Contact` and `ContactUpdate`
//! - [`validate`]: Phone and email syntax checks
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
