//! # Todo
//!
//! A first-in, first-out to-do queue kept in one JSON document
//! (`~/.todo.json` by default). `todo next` prints the head of the queue with
//! no trailing newline so it can be used in shell pipelines.
//!
//! Items are addressed by their storage position. Unlike timetrack there is no
//! display reordering: index 0 is always the oldest item and the next one up.
//!
//! The layering mirrors timetrack: `cli` (binary only) → [`api`] →
//! [`commands`] → `daybook_core::store`.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
