//! # Meshscope - MeshCore RF Capture Decoder
//!
//! Meshscope is a real-time decoder for MeshCore link-layer frames captured
//! by an RF sniffer. It consumes the sniffer's line-delimited JSON stream,
//! classifies each frame, tracks repeated fingerprints to flag
//! repeater-relayed duplicates, and prints a per-packet report.
//!
//! ## Features
//!
//! - **Frame Classification**: Length-guarded decoding of advert/beacon and
//!   encrypted group-text frames; everything else is reported with its type
//!   byte and length. Never panics on truncated or corrupted captures.
//! - **Repeat Tracking**: Per-fingerprint observation counts over the
//!   session, flagging frames likely relayed by a repeater.
//! - **Text Scanning**: Best-effort extraction of printable UTF-8 (node
//!   names, emoji) from beacon payloads.
//! - **Stream Triage**: RF records are decoded; firmware boot chatter and
//!   non-RF JSON pass through untouched.
//! - **Channel Names**: Config-driven mapping from channel hash bytes to
//!   human-readable `#channel` names.
//!
//! Ciphertext is never decrypted and MACs/CRCs are never validated; the
//! decoder classifies and exposes metadata only.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meshscope::config::Config;
//! use meshscope::watch::Watcher;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await.unwrap_or_default();
//!     let mut watcher = Watcher::new(config);
//!     let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//!     watcher.run(stdin).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`frame`] - Frame classification and printable-text extraction
//! - [`capture`] - Capture record parsing and line triage
//! - [`watch`] - Watch session: stream loop, repeat tracking, reports
//! - [`config`] - Channel map and logging configuration
//! - [`metrics`] - Session counters
//! - [`logutil`] - Log sanitization helpers

pub mod capture;
pub mod config;
pub mod frame;
pub mod logutil;
pub mod metrics;
pub mod watch;
