use crate::error::PathError;
use error_stack::{IntoReport, Report, Result};
use std::path::{Path, PathBuf};

/// Representation of an absolute path that exists.
///
/// Using [`PathBuf`] directly in the program can be confusing,
/// since it can represent both relative and absolute paths in different contexts.
/// Hence, we use `AbsPath` wherever we can to indicate that a path is resolved and absolute.
///
/// We still use [`PathBuf`] in places that usually represent input from the user,
/// as it could be relative or absolute and may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsPath {
    p: PathBuf,
}

impl TryFrom<PathBuf> for AbsPath {
    type Error = Report<PathError>;

    /// Convert a [`PathBuf`] to an absolute path.
    ///
    /// This will error if:
    /// - the path doesn't exist
    /// - the path cannot be made absolute for some reason
    ///
    /// If the path is relative, it will be made absolute by
    /// using [`canonicalize`](std::path::Path::canonicalize)
    fn try_from(p: PathBuf) -> Result<Self, PathError> {
        if !p.exists() {
            return Err(Report::new(PathError::from(&p)).attach_printable("path does not exist"));
        }
        let p_abs = p.canonicalize().into_report().map_err(|e| {
            e.change_context(PathError::from(&p))
                .attach_printable("cannot resolve path as absolute")
        })?;

        Ok(Self { p: p_abs })
    }
}

impl AbsPath {
    #[inline]
    pub fn as_path(&self) -> &Path {
        self.p.as_path()
    }
}
