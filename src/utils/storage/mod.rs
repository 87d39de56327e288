mod gcs;
mod memory;

pub use gcs::GcsBlobStore;
pub use memory::MemoryBlobStore;

use async_trait::async_trait;
use bytes::Bytes;
use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Blob {0} does not exist")]
    NotFound(String),
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Storage responded with {status}: {body}")]
    UnexpectedResponse {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A single flat bucket of named objects.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `contents` under `name`, overwriting any existing object.
    async fn put(&self, name: &str, contents: Bytes, content_type: Option<&str>)
        -> Result<(), Error>;

    async fn exists(&self, name: &str) -> Result<bool, Error>;

    async fn delete(&self, name: &str) -> Result<(), Error>;

    /// Grants anonymous read access to the object.
    async fn make_public(&self, name: &str) -> Result<(), Error>;

    fn public_url(&self, name: &str) -> String;
}

fn unsafe_characters() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("static regex"))
}

/// Reduces an uploaded filename to something safe to use as an object name.
///
/// Accented letters are decomposed down to their ASCII base, directory components are dropped,
/// whitespace runs become `_`, anything outside `[A-Za-z0-9_.-]` is removed and leading/trailing
/// `.`/`_` are trimmed. The result may be empty, which callers treat as "no filename".
pub fn sanitize_filename(file_name: &str) -> String {
    let ascii = file_name
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>();

    let base = ascii
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let joined = base.split_whitespace().collect::<Vec<_>>().join("_");

    unsafe_characters()
        .replace_all(&joined, "")
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::sanitize_filename;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(sanitize_filename("pizza.png"), "pizza.png");
        assert_eq!(sanitize_filename("veggie-burger_2.jpg"), "veggie-burger_2.jpg");
    }

    #[test]
    fn strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\chef\\soup.jpg"), "soup.jpg");
    }

    #[test]
    fn replaces_whitespace_and_drops_unsafe_characters() {
        assert_eq!(sanitize_filename("my  best pizza.png"), "my_best_pizza.png");
        assert_eq!(sanitize_filename("pizza (1)!.png"), "pizza_1.png");
    }

    #[test]
    fn transliterates_accented_letters() {
        assert_eq!(sanitize_filename("crème brûlée!.jpg"), "creme_brulee.jpg");
        assert_eq!(sanitize_filename("Ångström.png"), "Angstrom.png");
    }

    #[test]
    fn trims_leading_dots() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
        assert_eq!(sanitize_filename("..."), "");
        assert_eq!(sanitize_filename(""), "");
    }
}
