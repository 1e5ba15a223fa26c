//! Shape detection for content handed to the masking engine.
//!
//! Classification only looks for marker substrings. It never decodes the armor
//! body, checks checksums, or validates that a block is well formed.

/// Substrings that mark content as an armored block.
const ARMOR_TAGS: [&str; 2] = ["BEGIN PGP", "END PGP"];

/// Delimiter that opens an armored block.
pub(crate) const BEGIN_DELIMITER: &str = "-----BEGIN";

/// Delimiter that closes an armored block.
pub(crate) const END_DELIMITER: &str = "-----END";

/// The two content shapes the engine distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentShape {
    /// Text carrying at least one `BEGIN PGP` / `END PGP` marker.
    Armored,
    /// Anything else.
    Plain,
}

impl ContentShape {
    /// Classifies `content`.
    ///
    /// Content is armored iff some line contains `BEGIN PGP` or `END PGP`.
    /// Neither tag spans a newline, so the check runs over the whole string.
    #[must_use]
    pub fn classify(content: &str) -> Self {
        if ARMOR_TAGS.iter().any(|tag| content.contains(tag)) {
            Self::Armored
        } else {
            Self::Plain
        }
    }

    /// Stable lowercase label, used in structured logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Armored => "armored",
            Self::Plain => "plain",
        }
    }
}

/// The `<TYPE>` carried on a `-----BEGIN PGP <TYPE>-----` line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArmorType {
    PublicKeyBlock,
    PrivateKeyBlock,
    Message,
    SignedMessage,
    Signature,
    /// Any label not listed above, kept verbatim.
    Other(String),
}

impl ArmorType {
    /// Reads the armor type from the first opening marker in `content`.
    ///
    /// Returns `None` when no line carries a `-----BEGIN PGP` marker.
    #[must_use]
    pub fn detect(content: &str) -> Option<Self> {
        let opening = "-----BEGIN PGP ";
        content.split('\n').find_map(|line| {
            let start = line.find(opening)? + opening.len();
            let rest = &line[start..];
            let label = rest.find("-----").map_or(rest, |end| &rest[..end]).trim();
            Some(Self::from_label(label))
        })
    }

    fn from_label(label: &str) -> Self {
        match label {
            "PUBLIC KEY BLOCK" => Self::PublicKeyBlock,
            "PRIVATE KEY BLOCK" => Self::PrivateKeyBlock,
            "MESSAGE" => Self::Message,
            "SIGNED MESSAGE" => Self::SignedMessage,
            "SIGNATURE" => Self::Signature,
            other => Self::Other(other.to_string()),
        }
    }

    /// The label as it appears on the marker line.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::PublicKeyBlock => "PUBLIC KEY BLOCK",
            Self::PrivateKeyBlock => "PRIVATE KEY BLOCK",
            Self::Message => "MESSAGE",
            Self::SignedMessage => "SIGNED MESSAGE",
            Self::Signature => "SIGNATURE",
            Self::Other(label) => label,
        }
    }
}

/// Whether `line` is a `-----BEGIN` / `-----END` delimiter line.
pub(crate) fn is_marker(line: &str) -> bool {
    line.contains(BEGIN_DELIMITER) || line.contains(END_DELIMITER)
}

/// Whether `line` is empty or whitespace only.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
