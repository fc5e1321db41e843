//! # Addrbook Architecture
//!
//! Addrbook is a small address book you talk to in plain commands:
//! `add Ann +380501111111 07.03.1990`, `phone Ann`, `show all 5`.
//! Like any good CLI tool it is a library with a thin terminal client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the prompt loop, prints results   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory AddressBook                           │
//! │  - Dispatches input lines (dispatch.rs), saves after writes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per command, pure logic over the book        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book + Model (book.rs, model.rs)                           │
//! │  - Validated Name / Phone / Birthday, Record, AddressBook   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never prints or exits. Even "today" is passed
//! in, so birthday arithmetic is testable.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`dispatch`]: Keyword table and prefix matching of input lines
//! - [`commands`]: Business logic for each command
//! - [`book`]: The address book and its pagination iterator
//! - [`model`]: Contact values and `Record`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and wiring
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
