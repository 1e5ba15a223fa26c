//! Masking engine for cryptographic artifacts shown on screen.
//!
//! This crate renders armored PGP blocks and plaintext messages into partially
//! redacted projections, and carries the reveal / copy / download contract
//! that goes with displaying them.
//!
//! It separates:
//! - **Classification**: what shape the content has (armored block or plain text).
//! - **Masking**: which lines are partially revealed, fully hidden, or kept.
//! - **Surface**: the original content, its projection, and a reveal flag.
//! - **Export**: copy to a clipboard and save to a file, always from the original.
//!
//! Key rules:
//! - `mask` is pure and deterministic; it never fails.
//! - Marker lines (`-----BEGIN ...` / `-----END ...`) and blank lines pass through
//!   unchanged while `show_headers` is on.
//! - Projections are always computed from the original content. Masking a
//!   projection again is not a supported operation.
//!
//! What this crate does not do:
//! - generate keys, encrypt, or decrypt
//! - validate armor checksums or decode armor bodies
//! - persist anything
//!
//! The clipboard and file exporters live behind the `export` feature (on by
//! default); `slog` and `serde` integrations are opt-in features.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod classification;
#[cfg(feature = "export")]
pub mod export;
mod masking;
#[cfg(feature = "slog")]
pub mod slog;
mod surface;

// Re-exports
pub use classification::{ArmorType, ContentShape};
#[cfg(feature = "export")]
pub use export::{
    Clipboard, ClipboardExporter, DirectorySink, ExportError, FileExporter, FileSink,
    MemoryClipboard, DEFAULT_RESET_DELAY,
};
pub use masking::{
    mask, mask_with_outcome, EdgeConfig, InteriorConfig, LinePolicy, MaskOptions, MaskOutcome,
    DEFAULT_MASK_CHAR, DEFAULT_VISIBLE_END, DEFAULT_VISIBLE_START, EDGE_MASK_CAP,
    INTERIOR_MASK_CAP, SHORT_TEXT_LIMIT,
};
pub use surface::{ContentView, MaskedContent, VisibilityToggle};
