//! ZIP archive construction.
//!
//! This module writes a stored (uncompressed) single-entry ZIP archive
//! byte by byte.
//!
//! ## Architecture
//!
//! - [`structures`]: the on-disk records (local header, central directory
//!   header, end of central directory) and their serialization
//! - [`dostime`]: MS-DOS packed date and time fields
//! - [`header`]: builds the local/central header pair for one file
//! - [`footer`]: builds the end of central directory record
//! - [`archive`]: lays the records out and hands the result to a
//!   [`FileSystem`](crate::io::FileSystem)
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and file data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! Readers find the EOCD by its trailing signature and follow its offset
//! back to the Central Directory, so the order above is fixed.
//!
//! ## Limitations
//!
//! - One entry per archive; entry counts in the EOCD are always 1
//! - No compression, encryption, Zip64 or multi-disk support

pub mod archive;
pub mod dostime;
pub mod footer;
pub mod header;
pub mod structures;

pub use archive::{ArchiveSummary, BuiltArchive, ZipBuilder, assemble};
pub use dostime::DosDateTime;
pub use footer::gen_footer;
pub use header::{HeaderBuilder, crc32, gen_header};
pub use structures::*;
