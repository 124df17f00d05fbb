use std::fs;
use std::path::Path;

/// Result of clearing one directory.
#[derive(Debug, PartialEq)]
pub enum ClearOutcome {
    /// The directory was read and its entries removed. Holds the number
    /// of top-level entries that were removed.
    Cleared(usize),
    /// The path does not exist or could not be read as a directory.
    Missing,
}

/// Remove every entry beneath `dir`, leaving `dir` itself in place.
///
/// This is a force-recursive delete: a missing directory, a path that
/// is not a directory, and entries that fail to be removed are all
/// treated as no-ops. Failures are logged at debug level and never
/// propagated. The directory is not created if it is absent.
pub fn clear_dir(dir: &Path) -> ClearOutcome {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("cannot read directory `{}`: {e}", dir.display());
            return ClearOutcome::Missing;
        }
    };

    let mut removed = 0;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("cannot read entry in `{}`: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        // file_type does not follow symlinks, so a symlink to a
        // directory is removed as a link instead of through its target
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let result = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        match result {
            Ok(_) => {
                removed += 1;
                log::debug!("removed `{}`", path.display());
            }
            Err(e) => {
                log::debug!("cannot remove `{}`: {e}", path.display());
            }
        }
    }

    ClearOutcome::Cleared(removed)
}
