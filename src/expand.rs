//! Sequence substitution and the file write loop.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::template::{SeqField, Template};
use crate::BlockgenError;

/// Extension given to every generated file.
pub const OUTPUT_EXT: &str = "bin";

/// Store `index` into the buffer at the sequence field, least-significant
/// byte first.
///
/// Narrow fields truncate the index (wrap, never reject); positions past
/// the index's little-endian bytes are written as zero. The field must
/// lie inside the buffer.
pub fn write_sequence(bytes: &mut [u8], field: &SeqField, index: u32) {
    let le = u64::from(index).to_le_bytes();
    for k in 0..field.width {
        bytes[field.offset + k] = le.get(k).copied().unwrap_or(0);
    }
}

/// Compose `<basename>-<4-digit zero-padded index>.bin`.
///
/// Indices of 10000 and above widen the number past four digits.
pub fn output_path(basename: &str, index: u32) -> PathBuf {
    PathBuf::from(format!("{basename}-{index:04}.{OUTPUT_EXT}"))
}

/// Expand the template once per index and write each buffer to its own
/// numbered file, reporting one `Created <path>` line per file.
///
/// The loop is strictly sequential and each file handle is closed before
/// the next iteration. The first failure aborts the run; files from
/// earlier iterations stay on disk.
pub fn write_files(template: &Template, basename: &str, count: u32) -> Result<(), BlockgenError> {
    let mut bytes = template.bytes.clone();
    for index in 0..count {
        if let Some(field) = &template.field {
            write_sequence(&mut bytes, field, index);
        }

        let path = output_path(basename, index);
        let mut file = File::create(&path).map_err(|source| BlockgenError::FileOpen {
            path: path.display().to_string(),
            source,
        })?;
        file.write_all(&bytes)
            .map_err(|source| BlockgenError::FileWrite {
                path: path.display().to_string(),
                source,
            })?;

        println!("Created {}", path.display());
    }
    Ok(())
}
