//! Resolves the canonical language of a request.
//!
//! Precedence: an explicit `language` hint, then the extension of
//! `code_snippet` when it looks like a file name. There is no content sniffing.

mod detector;
mod table;

pub use detector::{ExtensionDetector, LanguageDetector};
pub use table::{is_supported, language_for_extension, SUPPORTED_LANGUAGES};
