//! Local and central directory headers for a single stored file.

use std::path::Path;

use flate2::Crc;
use log::{debug, warn};

use super::dostime::DosDateTime;
use super::structures::{
    CentralDirectoryHeader, CompressionMethod, EntryFields, HostSystem, LocalFileHeader,
    VERSION_NEEDED,
};
use crate::error::{ZipResult, unsupported};
use crate::io::{FileSystem, SourceFile};

/// IEEE CRC-32 of `data`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

/// Builds the pair of headers describing one file.
#[derive(Debug, Clone, Copy)]
pub struct HeaderBuilder {
    host: HostSystem,
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::new(HostSystem::current())
    }
}

impl HeaderBuilder {
    pub fn new(host: HostSystem) -> Self {
        Self { host }
    }

    pub fn host(&self) -> HostSystem {
        self.host
    }

    /// Describe `source` as a stored entry.
    ///
    /// The central directory record carries a local header offset of 0;
    /// the assembler sets it once the preceding bytes are known.
    ///
    /// # Errors
    ///
    /// Fails if the content or name is too large for a non-Zip64 header.
    /// A modification date outside 1980..=2107 is clamped, not rejected.
    pub fn build(
        &self,
        source: &SourceFile,
    ) -> ZipResult<(LocalFileHeader, CentralDirectoryHeader)> {
        let size = match u32::try_from(source.data.len()) {
            Ok(size) => size,
            Err(_) => {
                return unsupported(format!(
                    "{} is {} bytes, entries over 4 GiB need Zip64",
                    source.display_name(),
                    source.data.len()
                ));
            }
        };

        if source.size != u64::from(size) {
            warn!(
                "{} changed while being read: stat said {} bytes, read {size}",
                source.display_name(),
                source.size
            );
        }

        let modified = DosDateTime::from_system_time(source.modified);
        if !modified.is_representable() {
            warn!(
                "{}: modification year {} is outside 1980..=2107, storing the nearest date",
                source.display_name(),
                modified.year()
            );
        }
        let crc32 = crc32(&source.data);

        let fields = EntryFields {
            version_needed: VERSION_NEEDED,
            flags: 0,
            compression_method: CompressionMethod::Stored,
            last_mod_time: modified.msdos_time()?,
            last_mod_date: modified.msdos_date()?,
            crc32,
            compressed_size: size,
            uncompressed_size: size,
            file_name: source.name.clone(),
            extra_field: Vec::new(),
        };

        debug!(
            "{}: crc32={crc32:#010x} size={size} modified={:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            source.display_name(),
            modified.year(),
            modified.month(),
            modified.day(),
            modified.hour(),
            modified.minute(),
            modified.second(),
        );

        let local = LocalFileHeader { fields };
        let central = CentralDirectoryHeader::for_local(&local, self.host);
        Ok((local, central))
    }
}

/// Read `path` and return its encoded (local header, central directory header).
pub fn gen_header<F: FileSystem>(
    fs: &F,
    path: &Path,
    host: HostSystem,
) -> ZipResult<(Vec<u8>, Vec<u8>)> {
    let source = fs.read_file(path)?;
    let (local, central) = HeaderBuilder::new(host).build(&source)?;
    Ok((local.to_bytes()?, central.to_bytes()?))
}
