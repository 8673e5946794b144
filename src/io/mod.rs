mod local;

pub use local::LocalFileSystem;

use std::borrow::Cow;
use std::path::Path;
use std::time::SystemTime;

use crate::error::ZipResult;

/// A regular file loaded for archiving
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Base name stored in the archive, as the filesystem spells it
    pub name: Vec<u8>,
    /// Size reported by the filesystem
    pub size: u64,
    pub modified: SystemTime,
    pub data: Vec<u8>,
}

impl SourceFile {
    /// The name for log and error messages.
    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }
}

/// Filesystem access needed to build an archive
pub trait FileSystem {
    /// Stat and read a whole file into memory
    fn read_file(&self, path: &Path) -> ZipResult<SourceFile>;

    /// Persist the finished archive
    fn write_file(&self, path: &Path, bytes: &[u8]) -> ZipResult<()>;
}
