use std::path::Path;

use log::{debug, info};

use super::footer::gen_footer;
use super::header::HeaderBuilder;
use super::structures::{CentralDirectoryHeader, EndOfCentralDirectory, HostSystem, LocalFileHeader};
use crate::error::{ZipResult, unsupported};
use crate::io::FileSystem;

/// What ended up in a finished archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub file_name: String,
    pub size: u32,
    pub crc32: u32,
    pub central_dir_offset: u32,
    pub archive_len: usize,
}

/// An archive held in memory, not yet written anywhere
#[derive(Debug, Clone)]
pub struct BuiltArchive {
    pub bytes: Vec<u8>,
    pub summary: ArchiveSummary,
}

/// Lay out `[local header | data] [central directory] [end of central directory]`.
///
/// The central directory record's local header offset is set from the
/// bytes preceding the local header.
pub fn assemble(
    local: &LocalFileHeader,
    mut central: CentralDirectoryHeader,
    data: &[u8],
) -> ZipResult<BuiltArchive> {
    if data.len() != local.fields.uncompressed_size as usize {
        return unsupported(format!(
            "header describes {} bytes but {} were given",
            local.fields.uncompressed_size,
            data.len()
        ));
    }

    let mut out = Vec::with_capacity(
        local.encoded_len() + data.len() + central.encoded_len() + EndOfCentralDirectory::SIZE,
    );

    central.local_header_offset = match u32::try_from(out.len()) {
        Ok(offset) => offset,
        Err(_) => return unsupported("local header offset needs Zip64"),
    };
    local.write_to(&mut out)?;
    out.extend_from_slice(data);
    let entries_len = out.len();

    central.write_to(&mut out)?;
    let (entries, central_dir) = out.split_at(entries_len);
    let footer = gen_footer(entries, central_dir)?;
    footer.write_to(&mut out)?;

    debug!(
        "laid out {entries_len} entry bytes, {} central directory bytes, {} total",
        footer.cd_size,
        out.len()
    );

    let summary = ArchiveSummary {
        file_name: String::from_utf8_lossy(&local.fields.file_name).into_owned(),
        size: local.fields.uncompressed_size,
        crc32: local.fields.crc32,
        central_dir_offset: footer.cd_offset,
        archive_len: out.len(),
    };
    Ok(BuiltArchive {
        bytes: out,
        summary,
    })
}

/// Builds single-entry stored archives from files
pub struct ZipBuilder<F: FileSystem> {
    fs: F,
    headers: HeaderBuilder,
}

impl<F: FileSystem> ZipBuilder<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            headers: HeaderBuilder::default(),
        }
    }

    /// Record `host` in "version made by" instead of the current system.
    pub fn with_host(mut self, host: HostSystem) -> Self {
        self.headers = HeaderBuilder::new(host);
        self
    }

    pub fn host(&self) -> HostSystem {
        self.headers.host()
    }

    /// Read `input` and build the archive in memory
    pub fn build(&self, input: &Path) -> ZipResult<BuiltArchive> {
        let source = self.fs.read_file(input)?;
        let (local, central) = self.headers.build(&source)?;
        assemble(&local, central, &source.data)
    }

    /// Build an archive of `input` and write it to `output`.
    ///
    /// Nothing is written unless the whole archive was built.
    pub fn create(&self, input: &Path, output: &Path) -> ZipResult<ArchiveSummary> {
        let archive = self.build(input)?;
        self.fs.write_file(output, &archive.bytes)?;

        info!(
            "wrote {} ({} bytes) containing {}",
            output.display(),
            archive.summary.archive_len,
            archive.summary.file_name
        );
        Ok(archive.summary)
    }
}
