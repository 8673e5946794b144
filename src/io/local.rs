use std::ffi::OsStr;
use std::path::Path;

use log::debug;

use super::{FileSystem, SourceFile};
use crate::error::{ZipError, ZipResult};

/// Reads and writes through `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn read_file(&self, path: &Path) -> ZipResult<SourceFile> {
        let read_err = |source| ZipError::FilesystemRead {
            path: path.to_path_buf(),
            source,
        };

        let metadata = std::fs::metadata(path).map_err(read_err)?;
        let modified = metadata.modified().map_err(read_err)?;
        let data = std::fs::read(path).map_err(read_err)?;

        let name = path.file_name().map(name_bytes).unwrap_or_default();

        debug!(
            "read {} ({} bytes on disk, {} bytes loaded)",
            path.display(),
            metadata.len(),
            data.len()
        );

        Ok(SourceFile {
            name,
            size: metadata.len(),
            modified,
            data,
        })
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> ZipResult<()> {
        std::fs::write(path, bytes).map_err(|source| ZipError::FilesystemWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Raw bytes of a file name. Unix names are stored exactly as on disk.
#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Vec<u8> {
    name.to_string_lossy().into_owned().into_bytes()
}
