//! # mkzip
//!
//! Builds ZIP archives from scratch.
//!
//! This library lays out the bytes of a ZIP archive itself: local file
//! header, central directory header and end of central directory record,
//! on top of its own little-endian integer codec and MS-DOS timestamp
//! encoder. Entries are stored without compression.
//!
//! ## Features
//!
//! - Byte-exact local, central directory and EOCD records
//! - MS-DOS date/time packing from filesystem modification times
//! - IEEE CRC-32 of the stored content
//! - Pluggable filesystem access through the [`FileSystem`] trait
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use mkzip::{HostSystem, LocalFileSystem, ZipBuilder};
//!
//! fn main() -> anyhow::Result<()> {
//!     let builder = ZipBuilder::new(LocalFileSystem).with_host(HostSystem::Unix);
//!     let summary = builder.create(Path::new("data/lorem.txt"), Path::new("data/lorem.zip"))?;
//!     println!("{} ({} bytes)", summary.file_name, summary.size);
//!     Ok(())
//! }
//! ```

pub mod binary;
pub mod cli;
pub mod error;
pub mod io;
pub mod zip;

pub use cli::Cli;
pub use error::{ZipError, ZipResult};
pub use io::{FileSystem, LocalFileSystem, SourceFile};
pub use self::zip::{ArchiveSummary, DosDateTime, HostSystem, ZipBuilder};
