//! Shared type definitions for Dota 2 Game State Integration (GSI).
//!
//! The game client POSTs a JSON document describing the current match to a
//! locally configured endpoint. This crate defines the strongly-typed
//! [`Snapshot`] that document decodes into and the pure [`decode`] function
//! used by the listener. Types flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`snapshot`] -- Snapshot, player, hero, and map structs with their wire
//!   field mapping
//! - [`decode`] -- JSON to [`Snapshot`] decoding and [`DecodeError`]

pub mod decode;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use decode::{DecodeError, decode};
pub use snapshot::{Hero, Map, Player, Snapshot};
