//! Ancestor path computation for `mark back`

use crate::error::{MarkError, Result};
use std::path::{Component, Path, PathBuf};

/// Path reached by walking `levels` directories up from `cwd`.
///
/// `cwd` is split into its named segments. With `remaining` segments left
/// after dropping `levels` from the end, one remaining segment means the
/// filesystem root and zero or fewer is an invalid index. For `/a/b/c/d`,
/// levels 0 through 3 give `/a/b/c/d`, `/a/b/c`, `/a/b` and `/`.
pub fn ancestor(cwd: &Path, levels: i64) -> Result<PathBuf> {
    if levels < 0 {
        return Err(MarkError::invalid_index(levels));
    }

    // prefix and root directory, kept as the base of every result
    let mut base = PathBuf::new();
    let mut segments = Vec::new();
    for component in cwd.components() {
        match component {
            Component::Prefix(_) | Component::RootDir if segments.is_empty() => {
                base.push(component.as_os_str());
            }
            _ => segments.push(component.as_os_str()),
        }
    }

    if segments.is_empty() && levels == 0 {
        return Ok(base);
    }

    let remaining = i64::try_from(segments.len()).unwrap_or(i64::MAX) - levels;
    match remaining {
        r if r <= 0 => Err(MarkError::invalid_index(levels)),
        1 => Ok(base),
        r => {
            let mut path = base;
            // r is positive and no larger than segments.len()
            path.extend(&segments[..r as usize]);
            Ok(path)
        }
    }
}
