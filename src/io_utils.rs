//! CLI-facing error message formatting.

use std::io;

use crate::template::PLACEHOLDER;
use crate::BlockgenError;

/// Render an error with a short actionable hint for terminal output.
pub fn cli_hint(err: &BlockgenError) -> String {
    use BlockgenError::*;
    match err {
        HexLength(_) => format!("{err}. Each template byte takes two hex digits."),
        NumberFormat(_) => {
            format!("{err}. Groups must be hex byte pairs or the {PLACEHOLDER} marker.")
        }
        MultipleFields => format!("{err}. Only one placeholder run is allowed."),
        FileOpen { source, .. } | FileWrite { source, .. } => {
            format!("{err}. {}", io_suggestion(source))
        }
    }
}

/// Suggestion matching the I/O failure kind.
fn io_suggestion(err: &io::Error) -> &'static str {
    use io::ErrorKind::*;
    match err.kind() {
        NotFound => "Check that the output directory exists.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    }
}
