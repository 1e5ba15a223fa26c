//! Masking policies, options, and entrypoints.
//!
//! - **`options`**: the tunable surface (`MaskOptions`)
//! - **`policy`**: how a single line is masked (`EdgeConfig`, `InteriorConfig`, `LinePolicy`)
//! - **`redactor`**: which policy each line gets, and the `mask` entrypoint
//!
//! Shape detection lives in `crate::classification`.

mod options;
mod policy;
mod redactor;

pub use options::{MaskOptions, DEFAULT_MASK_CHAR, DEFAULT_VISIBLE_END, DEFAULT_VISIBLE_START};
pub use policy::{EdgeConfig, InteriorConfig, LinePolicy, EDGE_MASK_CAP, INTERIOR_MASK_CAP};
pub use redactor::{mask, mask_with_outcome, MaskOutcome, SHORT_TEXT_LIMIT};
