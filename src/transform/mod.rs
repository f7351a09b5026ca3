//! Pure filename transforms selected by masking direction

use std::path::Path;

use crate::mapping::MaskTable;

/// Whether extensions are being masked or restored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

/// Apply the mask table to a file name in the given direction.
///
/// The extension is the segment after the final `.`, matched
/// case-insensitively; dotfiles like `.bashrc` have no extension.
/// Returns `Some(new_name)` when a mapping applies and produces a
/// different name, `None` when the name passes through unchanged.
pub fn apply(name: &str, direction: Direction) -> Option<String> {
    let table = MaskTable::global();
    let path = Path::new(name);

    let extension = path.extension()?.to_str()?;
    let replacement = match direction {
        Direction::Encode => table.lookup_encode(extension)?,
        Direction::Decode => table.lookup_decode(extension)?,
    };

    let stem = path.file_stem()?.to_str()?;
    let new_name = format!("{}.{}", stem, replacement);
    if new_name == name {
        return None;
    }
    Some(new_name)
}

/// Mask the extension of `name`, returning the name unchanged when no
/// mapping applies.
pub fn encode_name(name: &str) -> String {
    apply(name, Direction::Encode).unwrap_or_else(|| name.to_string())
}

/// Restore the extension of `name`, returning the name unchanged when no
/// mapping applies.
pub fn decode_name(name: &str) -> String {
    apply(name, Direction::Decode).unwrap_or_else(|| name.to_string())
}
