use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes `content` to `path`, creating or truncating the file. The
/// handle lives only for the duration of the write, so it is closed even
/// when the write fails partway through.
pub fn write_document(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
