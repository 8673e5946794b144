//! End of central directory record.

use log::debug;

use super::structures::EndOfCentralDirectory;
use crate::error::{ZipResult, unsupported};

/// Footer for a single-entry archive.
///
/// `entries` is every local header with its data, `central_dir` is the
/// central directory that directly follows them. Both counts are fixed at 1.
pub fn gen_footer(entries: &[u8], central_dir: &[u8]) -> ZipResult<EndOfCentralDirectory> {
    let cd_size = offset_u32(central_dir.len(), "central directory size")?;
    let cd_offset = offset_u32(entries.len(), "central directory offset")?;

    debug!("central directory: {cd_size} bytes at offset {cd_offset}");

    Ok(EndOfCentralDirectory {
        disk_number: 0,
        disk_with_cd: 0,
        disk_entries: 1,
        total_entries: 1,
        cd_size,
        cd_offset,
        comment: Vec::new(),
    })
}

fn offset_u32(len: usize, what: &'static str) -> ZipResult<u32> {
    match u32::try_from(len) {
        Ok(v) => Ok(v),
        Err(_) => unsupported(format!("{what} of {len} bytes needs Zip64")),
    }
}
