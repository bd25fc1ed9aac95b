use std::{io::Write, path::Path};

use tempfile::NamedTempFile;

/// Replaces `path` with `contents` in one step.
///
/// The bytes go to a temp file in the same directory which is then renamed
/// over `path`. If anything fails along the way the temp file is dropped,
/// and dropping it deletes it.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
