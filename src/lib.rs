//! # Sockpuppet Sentinel CLI
//!
//! Native front end for the Sentinel chat backend. The session contract
//! (token store, claims decoding, guard, API client) lives in
//! [`sentinel_session`]; this crate supplies the native pieces it runs on:
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`storage`] | [`FileStore`](storage::FileStore), a JSON file implementing `KeyValueStore` |
//! | [`transport`] | [`ReqwestTransport`](transport::ReqwestTransport), a `reqwest` `HttpTransport` |
//! | [`utils::config`] | `sentinel.toml` + flag/environment resolution |
//! | [`cli`] | Argument parsing, colored output and subcommand handlers |
//!
//! ## Library usage
//!
//! ```rust,ignore
//! use sentinel::{storage::FileStore, transport::ReqwestTransport};
//! use sentinel_session::{ApiConfig, SessionContext, SystemClock};
//! use std::sync::Arc;
//!
//! let ctx = SessionContext::new(
//!     ApiConfig::new(Some("http://localhost:8000")),
//!     Arc::new(FileStore::new("credential.json")),
//!     Arc::new(ReqwestTransport::new()),
//!     Arc::new(my_navigator),
//!     Arc::new(SystemClock),
//! );
//! ctx.login("admin@example.com", "password").await?;
//! let reply = ctx.api().chat("hello").await?;
//! ```

pub mod cli;
pub mod storage;
pub mod transport;
pub mod utils;

pub use sentinel_session;
