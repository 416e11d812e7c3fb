use std::collections::HashMap;

use lazy_static::lazy_static;

/// Canonical, lowercase language identifiers.
pub const SUPPORTED_LANGUAGES: &[&str] = &["python", "go", "javascript", "typescript"];

lazy_static! {
    static ref EXTENSIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("py", "python");
        m.insert("pyi", "python");
        m.insert("go", "go");
        m.insert("js", "javascript");
        m.insert("mjs", "javascript");
        m.insert("cjs", "javascript");
        m.insert("jsx", "javascript");
        m.insert("ts", "typescript");
        m.insert("tsx", "typescript");
        m
    };
}

/// Looks up an extension (without the dot). Case-insensitive.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    EXTENSIONS.get(ext.to_ascii_lowercase().as_str()).copied()
}

/// `lang` must already be normalized (trimmed, lowercase).
pub fn is_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&lang)
}
