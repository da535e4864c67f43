use crate::utils::errors::upload_errors::UploadError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub const ACCEPTED_MEDIA_TYPE: &str = "application/pdf";

static UNSAFE_FILENAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]+").unwrap());

/// Strips any path components from a client-supplied file name and replaces
/// everything outside [A-Za-z0-9._-] with '_'. Falls back to "statement.pdf"
/// when nothing usable remains.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim_matches('.');

    let sanitized = UNSAFE_FILENAME_RE.replace_all(base, "_");
    if sanitized.is_empty() {
        return "statement.pdf".to_string();
    }
    sanitized.into_owned()
}

/// Scratch file name: microsecond timestamp plus the sanitized original name,
/// so concurrent uploads of the same file never collide.
pub fn scratch_file_name(original: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}", now.timestamp_micros(), sanitize_file_name(original))
}

/// A statement persisted to the scratch directory. The file is removed exactly
/// once: either through `remove()` or, as a backstop, on drop.
#[derive(Debug)]
pub struct TempStatement {
    path: PathBuf,
    removed: bool,
}

impl TempStatement {
    /// Writes the uploaded bytes under `scratch_dir/file_name` and resolves
    /// the absolute path (the worker argv contract requires one).
    pub fn persist(
        scratch_dir: &Path,
        file_name: &str,
        content: &[u8],
    ) -> Result<TempStatement, UploadError> {
        fs::create_dir_all(scratch_dir).map_err(|e| UploadError::PersistFailure {
            path: scratch_dir.display().to_string(),
            source: e,
        })?;

        let path = scratch_dir.join(file_name);
        if let Err(e) = fs::write(&path, content) {
            // A partially written file must not survive a failed upload.
            let _ = fs::remove_file(&path);
            return Err(UploadError::PersistFailure {
                path: path.display().to_string(),
                source: e,
            });
        }

        let absolute = fs::canonicalize(&path).map_err(|e| {
            let _ = fs::remove_file(&path);
            UploadError::PersistFailure {
                path: path.display().to_string(),
                source: e,
            }
        })?;

        Ok(TempStatement {
            path: absolute,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the staged file. Failures are logged, not surfaced: the import
    /// outcome is already decided by the time cleanup runs.
    pub fn remove(mut self) {
        if !self.removed {
            self.removed = true;
            if let Err(e) = fs::remove_file(&self.path) {
                eprintln!(
                    "⚠️ Could not remove staged statement {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for TempStatement {
    fn drop(&mut self) {
        if !self.removed {
            self.removed = true;
            let _ = fs::remove_file(&self.path);
        }
    }
}
