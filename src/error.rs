use thiserror::Error;

/// Fatal errors raised while parsing a template or writing output files.
///
/// Every variant aborts the run. Files written by earlier iterations are
/// intentionally left on disk.
#[derive(Error, Debug)]
pub enum BlockgenError {
    /// Hex template string has an odd number of characters.
    #[error("hex string length error: {0} characters")]
    HexLength(usize),

    /// A two-character group is neither a hex byte nor the placeholder token.
    #[error("number format error \"{0}\"")]
    NumberFormat(String),

    /// A second disjoint placeholder run was found in the template.
    #[error("multiple number fields in template")]
    MultipleFields,

    /// Output file could not be created.
    #[error("file open error \"{path}\": {source}")]
    FileOpen {
        path: String,
        source: std::io::Error,
    },

    /// Write to an output file did not complete.
    #[error("file write error \"{path}\": {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },
}
