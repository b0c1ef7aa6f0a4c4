//! Log lines shared by the reader, the pipeline and the artifact IO

use std::path::Path;
use std::time::Duration;

/// Log that a file operation is starting
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log the row count of a finished file operation
///
/// `verb` reads as a past tense ("read", "wrote", "loaded").
pub fn log_operation_complete(verb: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    let verb = capitalize(verb);
    match elapsed {
        Some(duration) => {
            log::info!("{verb} {rows} rows ({}) in {duration:.2?}", path.display());
        }
        None => log::info!("{verb} {rows} rows ({})", path.display()),
    }
}

/// Log a recoverable problem, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message} [{}]", path.display()),
        None => log::warn!("{message}"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
