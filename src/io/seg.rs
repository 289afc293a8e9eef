//! `<seg>` segmented text files (source/reference evaluation sets).
//!
//! ```text
//! <refset setid="devtest" srclang="Arasaac" trglang="French">
//! <DOC docid="emails" sysid="orig">
//! <seg>comment être tes frère ?</seg>
//! ```
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref SEG: Regex = Regex::new(r"<seg>(.*?)</seg>").unwrap();
    static ref SPACES: Regex = Regex::new(r" +").unwrap();
}

/// Contents of every `<seg>` element, in file order.
pub fn segments(content: &str) -> Vec<String> {
    SEG.captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn read_segments(path: &Path) -> Result<Vec<String>, Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(segments(&content))
}

/// Lowercase, drop ASCII punctuation except `-` and `'`, collapse spaces.
pub fn normalize_source(segment: &str) -> String {
    let kept: String = segment
        .chars()
        .filter(|c| !c.is_ascii_punctuation() || *c == '-' || *c == '\'')
        .collect();
    SPACES.replace_all(&kept, " ").to_lowercase()
}

/// Drop ` !` and ` ?`, collapse spaces.
pub fn normalize_reference(segment: &str) -> String {
    let s = segment.replace(" !", "").replace(" ?", "");
    SPACES.replace_all(&s, " ").into_owned()
}
