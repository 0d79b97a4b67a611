//! Filesystem-backed image store standing in for the hosted bucket: a named
//! binary upload lands under the storage directory and resolves through a
//! public URL.

use std::path::PathBuf;

use chrono::Utc;
use tokio::fs;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::AppResult;

pub struct ImageStore {
    root: PathBuf,
    public_base_url: String,
}

impl ImageStore {
    pub fn new(root: PathBuf, public_base_url: String) -> Self {
        Self {
            root,
            public_base_url,
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Store the upload under a sanitized, timestamp-prefixed name and
    /// return its public URL.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<String> {
        let file_name = format!(
            "{}_{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(original_name)
        );
        fs::create_dir_all(&self.root).await?;
        fs::write(self.root.join(&file_name), bytes).await?;
        Ok(format!(
            "{}/uploads/{file_name}",
            self.public_base_url.trim_end_matches('/')
        ))
    }
}

/// Normalize an upload name: diacritics stripped, lower-cased, whitespace
/// collapsed to hyphens, anything outside `[a-z0-9_.-]` removed.
pub fn sanitize_file_name(name: &str) -> String {
    let stripped: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
        .collect()
}
