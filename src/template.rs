//! Hex template parsing.
//!
//! A template is an even-length hex string scanned two characters at a
//! time. Each group is either a byte literal or the placeholder token
//! `NN` (case-insensitive). Consecutive placeholder groups form the
//! sequence field; a template holds at most one such field.

use crate::BlockgenError;

/// Two-character marker for one byte of the sequence field.
pub const PLACEHOLDER: &str = "NN";

/// Location of the sequence field inside the decoded template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqField {
    /// Byte offset of the first placeholder position.
    pub offset: usize,
    /// Field width in bytes.
    pub width: usize,
}

/// Decoded template buffer plus the optional sequence field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Decoded bytes. Placeholder positions hold zero until substitution.
    pub bytes: Vec<u8>,
    /// Sequence field, if the template contains one.
    pub field: Option<SeqField>,
}

/// Scanner state while collecting a placeholder run.
///
/// A non-placeholder group drops the scanner back to `Idle`; a
/// placeholder group seen in `Idle` after a field already exists is a
/// second disjoint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Idle,
    ExtendingField,
}

impl Template {
    /// Parse a hex template string.
    ///
    /// Scanning operates on raw bytes, so a group that splits a
    /// multi-byte character is reported as malformed rather than
    /// panicking.
    pub fn parse(hexstring: &str) -> Result<Self, BlockgenError> {
        if hexstring.len() % 2 != 0 {
            return Err(BlockgenError::HexLength(hexstring.len()));
        }

        let mut bytes = vec![0u8; hexstring.len() / 2];
        let mut field: Option<SeqField> = None;
        let mut scan = Scan::Idle;

        for (offset, group) in hexstring.as_bytes().chunks_exact(2).enumerate() {
            if group.eq_ignore_ascii_case(PLACEHOLDER.as_bytes()) {
                match scan {
                    Scan::ExtendingField => {
                        if let Some(f) = field.as_mut() {
                            f.width += 1;
                        }
                    }
                    Scan::Idle if field.is_some() => {
                        return Err(BlockgenError::MultipleFields);
                    }
                    Scan::Idle => {
                        field = Some(SeqField { offset, width: 1 });
                        scan = Scan::ExtendingField;
                    }
                }
            } else {
                scan = Scan::Idle;
                let byte = hex::decode(group).map_err(|_| {
                    BlockgenError::NumberFormat(String::from_utf8_lossy(group).into_owned())
                })?;
                bytes[offset] = byte[0];
            }
        }

        Ok(Template { bytes, field })
    }

    /// Field width in bytes, zero when the template has no field.
    pub fn field_width(&self) -> usize {
        self.field.map_or(0, |f| f.width)
    }
}
