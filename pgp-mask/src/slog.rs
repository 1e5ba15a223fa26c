//! Adapters for logging sensitive content through `slog`.
//!
//! This module connects [`MaskedContent`] with `slog` by providing a
//! `slog::Value` that serializes the masked projection as structured JSON via
//! `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is built from the masked projection,
//!   never from the raw content.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or choose mask options for the caller.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    classification::ArmorType,
    masking::{mask_with_outcome, MaskOptions},
    surface::MaskedContent,
};

/// What gets logged for a piece of masked content.
#[derive(Serialize)]
struct MaskReport<'a> {
    shape: &'static str,
    armor: Option<&'a str>,
    masked_lines: usize,
    masked: &'a str,
}

/// A `slog::Value` that emits a masked projection as structured JSON.
///
/// The payload is stored as a `serde_json::Value` with the keys `shape`,
/// `armor`, `masked_lines` and `masked`.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn from_report(report: &MaskReport<'_>) -> Self {
        let value = serde_json::to_value(report).unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize masked value".to_string())
        });
        Self { value }
    }

    /// The JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts sensitive text into a `slog::Value` carrying only its masked form.
///
/// ## Example
/// ```ignore
/// use pgp_mask::slog::IntoMaskedJson;
///
/// info!(logger, "key generated"; "public_key" => surface.into_masked_json());
/// ```
pub trait IntoMaskedJson {
    /// Masks `self` and returns a `slog::Value` that serializes as structured JSON.
    fn into_masked_json(self) -> MaskedJson;
}

impl IntoMaskedJson for &MaskedContent {
    fn into_masked_json(self) -> MaskedJson {
        let armor = self.armor_type();
        MaskedJson::from_report(&MaskReport {
            shape: self.shape().label(),
            armor: armor.as_ref().map(ArmorType::label),
            masked_lines: self.masked_lines(),
            masked: self.masked(),
        })
    }
}

/// Raw text is masked with default options.
impl IntoMaskedJson for &str {
    fn into_masked_json(self) -> MaskedJson {
        let outcome = mask_with_outcome(self, &MaskOptions::default());
        let armor = ArmorType::detect(self);
        MaskedJson::from_report(&MaskReport {
            shape: outcome.shape.label(),
            armor: armor.as_ref().map(ArmorType::label),
            masked_lines: outcome.masked_lines,
            masked: &outcome.text,
        })
    }
}

impl SlogValue for MaskedContent {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.into_masked_json(), record, key, serializer)
    }
}
