//! # Casegen Architecture
//!
//! Casegen turns a structured metrics file (customer case-study facts:
//! baseline/after numbers, narrative fields, evidence assets) into a
//! rendered Markdown report. It is a **library with a thin CLI client**,
//! not a CLI application with incidental library code.
//!
//! ## The Two Layers
//!
//! ```text
//! CLI Layer (main.rs + args.rs)
//!   - Parses arguments, prints messages, owns exit codes
//!   - The ONLY place that knows about stdout/stderr
//!           |
//!           v
//! Command Layer (commands/*.rs)
//!   - init: scaffold a sample case file + placeholder asset
//!   - generate: load -> compute deltas -> render -> write
//!   - Returns structured CmdResult, never prints
//! ```
//!
//! The command layer leans on three small collaborators:
//!
//! - [`model`]: the case document (loosely-typed pass-through mapping with
//!   a typed `metrics` slice) and the derived [`model::DeltaSet`]
//! - [`deltas`]: the before/after delta arithmetic
//! - [`templates`]: the embedded minijinja report template and its renderer
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `commands/` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could serve a web front end or be
//! embedded in a larger pipeline.
//!
//! ## Testing Strategy
//!
//! Delta math, document parsing, and template rendering carry thorough
//! unit tests next to the code. The full CLI surface (flags, exit codes,
//! on-disk effects) is exercised end-to-end in `tests/` against the
//! compiled binary.

pub mod commands;
pub mod deltas;
pub mod error;
pub mod model;
pub mod templates;
