//! Static bidirectional lookup between plain extensions and masked tokens

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{MaskError, MaskResult};

/// Fixed (extension, token) pairs. Tokens are four lowercase characters
/// chosen to look like no recognizable file type.
pub const MASK_PAIRS: &[(&str, &str)] = &[
    // Images
    ("jpg", "a1b2"),
    ("jpeg", "c3d4"),
    ("png", "e5f6"),
    ("gif", "g7h8"),
    ("webp", "i9j0"),
    // Documents
    ("pdf", "k1l2"),
    ("doc", "m3n4"),
    ("docx", "o5p6"),
    ("xls", "q7r8"),
    ("xlsx", "s9t0"),
    ("ppt", "u1v2"),
    ("pptx", "w3x4"),
    ("txt", "y5z6"),
    ("csv", "a7b8"),
    // Archives
    ("zip", "c9d0"),
    ("rar", "e1f2"),
    ("7z", "g3h4"),
    ("tar", "i5j6"),
    ("gz", "k7l8"),
    // Media
    ("mp3", "m9n0"),
    ("wav", "o1p2"),
    ("mp4", "q3r4"),
    ("avi", "s5t6"),
    ("mkv", "u7v8"),
    // Executables
    ("exe", "w9x0"),
    ("msi", "y1z2"),
    ("dll", "a3b4"),
    ("sys", "c5d6"),
];

static TABLE: Lazy<MaskTable> =
    Lazy::new(|| MaskTable::from_pairs(MASK_PAIRS).expect("built-in mask table is bijective"));

/// Bidirectional extension/token mapping.
///
/// The table is bijective: no two extensions share a token and no two
/// tokens share an extension. Lookups are case-insensitive.
#[derive(Debug)]
pub struct MaskTable {
    encode: HashMap<&'static str, &'static str>,
    decode: HashMap<&'static str, &'static str>,
}

impl MaskTable {
    /// Build a table from (extension, token) pairs, rejecting any pair
    /// that would break the bijection.
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> MaskResult<Self> {
        let mut encode = HashMap::with_capacity(pairs.len());
        let mut decode = HashMap::with_capacity(pairs.len());

        for &(extension, token) in pairs {
            if encode.insert(extension, token).is_some() {
                return Err(MaskError::DuplicateExtension {
                    extension: extension.to_string(),
                });
            }
            if decode.insert(token, extension).is_some() {
                return Err(MaskError::DuplicateToken {
                    token: token.to_string(),
                });
            }
        }

        Ok(Self { encode, decode })
    }

    /// Shared process-wide table built from [`MASK_PAIRS`].
    pub fn global() -> &'static MaskTable {
        &TABLE
    }

    /// Token for a plain extension, matched case-insensitively.
    pub fn lookup_encode(&self, extension: &str) -> Option<&'static str> {
        self.encode
            .get(extension.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Plain extension for a masked token, matched case-insensitively.
    pub fn lookup_decode(&self, token: &str) -> Option<&'static str> {
        self.decode.get(token.to_ascii_lowercase().as_str()).copied()
    }

    /// Number of mapped extensions
    pub fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }
}
