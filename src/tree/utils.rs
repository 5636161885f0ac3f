//! Shared helpers for listing and walking folders

use std::cmp::Ordering;
use std::path::{MAIN_SEPARATOR, Path};

use icu_collator::{CaseFirst, Collator, CollatorOptions, Strength};
use log::warn;

thread_local! {
    static COLLATOR: Option<Collator> = new_collator();
}

/// Root-locale collator at tertiary strength with lowercase first.
fn new_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    options.case_first = Some(CaseFirst::LowerFirst);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("name collation unavailable, falling back to case-insensitive order: {}", e);
            None
        }
    }
}

/// Collation for entry names: locale-aware order from the root locale, then
/// raw order so that distinct names never compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        })
        .then_with(|| a.cmp(b))
}

/// Name shown for a path: its last component, or the whole path for `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Path rendered with a trailing separator, as used for folders in list mode.
pub fn with_trailing_separator(path: &Path) -> String {
    let mut text = path.display().to_string();
    if !text.ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR);
    }
    text
}
