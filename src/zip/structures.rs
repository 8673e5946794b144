use crate::binary::{BufMut, LittleEndian};
use crate::error::{ZipResult, unsupported};

/// Local File Header (LFH) - 30 bytes + name + extra
pub const LFH_SIGNATURE: u32 = 0x04034b50;
pub const LFH_SIZE: usize = 30;

/// Central Directory File Header (CDFH) - 46 bytes + name + extra + comment
pub const CDFH_SIGNATURE: u32 = 0x02014b50;
pub const CDFH_MIN_SIZE: usize = 46;

/// Version 2.0, the lowest that knows about directories and stored entries
pub const VERSION_NEEDED: u16 = 20;

/// MS-DOS "archive" attribute, set on regular files
pub const EXTERNAL_ATTR_FILE: u32 = 0x20;

/// ZIP compression methods this writer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u16)]
pub enum CompressionMethod {
    #[default]
    Stored = 0,
}

impl CompressionMethod {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Host OS recorded in the high byte of "version made by"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HostSystem {
    Unix = 0x03,
    Ntfs = 0x0A,
}

impl HostSystem {
    /// The system this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostSystem::Ntfs
        } else {
            HostSystem::Unix
        }
    }

    /// Host byte over the supported ZIP version.
    pub fn version_made_by(self) -> u16 {
        (u16::from(self as u8) << 8) | VERSION_NEEDED
    }
}

/// Fields a local header and its central directory record must agree on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub version_needed: u16,
    pub flags: u16,
    pub compression_method: CompressionMethod,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
}

impl EntryFields {
    /// version needed .. uncompressed size, identical in both headers
    fn write_fixed(&self, out: &mut Vec<u8>) {
        out.put_u16::<LittleEndian>(self.version_needed);
        out.put_u16::<LittleEndian>(self.flags);
        out.put_u16::<LittleEndian>(self.compression_method.as_u16());
        out.put_u16::<LittleEndian>(self.last_mod_time);
        out.put_u16::<LittleEndian>(self.last_mod_date);
        out.put_u32::<LittleEndian>(self.crc32);
        out.put_u32::<LittleEndian>(self.compressed_size);
        out.put_u32::<LittleEndian>(self.uncompressed_size);
    }

    fn file_name_len(&self) -> ZipResult<u16> {
        field_len(&self.file_name, "file name")
    }

    fn extra_field_len(&self) -> ZipResult<u16> {
        field_len(&self.extra_field, "extra field")
    }
}

fn field_len(field: &[u8], what: &'static str) -> ZipResult<u16> {
    match u16::try_from(field.len()) {
        Ok(len) => Ok(len),
        Err(_) => unsupported(format!("{what} is {} bytes, limit is 65535", field.len())),
    }
}

/// Local File Header, written directly before the entry's data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub fields: EntryFields,
}

impl LocalFileHeader {
    pub const SIGNATURE: u32 = LFH_SIGNATURE;
    pub const SIZE: usize = LFH_SIZE;

    pub fn write_to(&self, out: &mut Vec<u8>) -> ZipResult<()> {
        let f = &self.fields;
        let name_len = f.file_name_len()?;
        let extra_len = f.extra_field_len()?;

        out.put_u32::<LittleEndian>(Self::SIGNATURE);
        f.write_fixed(out);
        out.put_u16::<LittleEndian>(name_len);
        out.put_u16::<LittleEndian>(extra_len);
        out.extend_from_slice(&f.file_name);
        out.extend_from_slice(&f.extra_field);
        Ok(())
    }

    pub fn to_bytes(&self) -> ZipResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out)?;
        Ok(out)
    }

    pub fn encoded_len(&self) -> usize {
        Self::SIZE + self.fields.file_name.len() + self.fields.extra_field.len()
    }
}

/// Central Directory File Header, one per entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralDirectoryHeader {
    pub version_made_by: u16,
    pub fields: EntryFields,
    pub file_comment: Vec<u8>,
    pub disk_number_start: u16,
    pub internal_attributes: u16,
    pub external_attributes: u32,
    pub local_header_offset: u32,
}

impl CentralDirectoryHeader {
    pub const SIGNATURE: u32 = CDFH_SIGNATURE;
    pub const MIN_SIZE: usize = CDFH_MIN_SIZE;

    /// A record describing `local`, with its offset still unset.
    pub fn for_local(local: &LocalFileHeader, host: HostSystem) -> Self {
        Self {
            version_made_by: host.version_made_by(),
            fields: local.fields.clone(),
            file_comment: Vec::new(),
            disk_number_start: 0,
            internal_attributes: 0,
            external_attributes: EXTERNAL_ATTR_FILE,
            local_header_offset: 0,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) -> ZipResult<()> {
        let f = &self.fields;
        let name_len = f.file_name_len()?;
        let extra_len = f.extra_field_len()?;
        let comment_len = field_len(&self.file_comment, "file comment")?;

        out.put_u32::<LittleEndian>(Self::SIGNATURE);
        out.put_u16::<LittleEndian>(self.version_made_by);
        f.write_fixed(out);
        out.put_u16::<LittleEndian>(name_len);
        out.put_u16::<LittleEndian>(extra_len);
        out.put_u16::<LittleEndian>(comment_len);
        out.put_u16::<LittleEndian>(self.disk_number_start);
        out.put_u16::<LittleEndian>(self.internal_attributes);
        out.put_u32::<LittleEndian>(self.external_attributes);
        out.put_u32::<LittleEndian>(self.local_header_offset);
        out.extend_from_slice(&f.file_name);
        out.extend_from_slice(&f.extra_field);
        out.extend_from_slice(&self.file_comment);
        Ok(())
    }

    pub fn to_bytes(&self) -> ZipResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out)?;
        Ok(out)
    }

    pub fn encoded_len(&self) -> usize {
        Self::MIN_SIZE
            + self.fields.file_name.len()
            + self.fields.extra_field.len()
            + self.file_comment.len()
    }
}

/// End of Central Directory (EOCD) - 22 bytes + comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfCentralDirectory {
    pub disk_number: u16,
    pub disk_with_cd: u16,
    pub disk_entries: u16,
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
    pub comment: Vec<u8>,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: u32 = 0x06054b50;
    pub const SIZE: usize = 22;

    pub fn write_to(&self, out: &mut Vec<u8>) -> ZipResult<()> {
        let comment_len = field_len(&self.comment, "archive comment")?;

        out.put_u32::<LittleEndian>(Self::SIGNATURE);
        out.put_u16::<LittleEndian>(self.disk_number);
        out.put_u16::<LittleEndian>(self.disk_with_cd);
        out.put_u16::<LittleEndian>(self.disk_entries);
        out.put_u16::<LittleEndian>(self.total_entries);
        out.put_u32::<LittleEndian>(self.cd_size);
        out.put_u32::<LittleEndian>(self.cd_offset);
        out.put_u16::<LittleEndian>(comment_len);
        out.extend_from_slice(&self.comment);
        Ok(())
    }

    pub fn to_bytes(&self) -> ZipResult<Vec<u8>> {
        let mut out = Vec::with_capacity(Self::SIZE + self.comment.len());
        self.write_to(&mut out)?;
        Ok(out)
    }
}
