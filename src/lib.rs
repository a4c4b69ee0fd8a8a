//! # Introduction
//!
//! sortty turns a comma-separated list of integers into a complete,
//! navigable history of sorting-algorithm snapshots, then replays that
//! history forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input string → Sequence → Step generator → History → Session → TUI
//! ```
//!
//! 1. [`sequence`] — parses the raw input into an ordered list of integers,
//!    silently dropping tokens that are not numbers.
//! 2. [`stepper`] — three interchangeable [`stepper::StepGenerator`]
//!    implementations (bubble, insertion, merge sort), each producing a
//!    [`step::History`] of annotated array snapshots.
//! 3. [`step`] — the shared snapshot model: every position in a
//!    [`step::Step`] is a `(value, role)` pair, with [`step::Role::None`]
//!    as the default.
//! 4. [`session`] — a [`session::Session`] binds one algorithm to one
//!    history and a cursor, and emits snapshots to an observer callback on
//!    each `advance`/`retreat`.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Histories are generated eagerly and in full: every step exists before
//! the first navigation call, which is what makes backward stepping free.

pub mod sequence;
pub mod session;
pub mod step;
pub mod stepper;
pub mod ui;
