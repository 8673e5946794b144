use std::io::{Cursor, Read};
use std::path::Path;

use mkzip::binary::{Buf, LittleEndian};
use mkzip::zip::{CDFH_SIGNATURE, EndOfCentralDirectory, LFH_SIGNATURE};
use mkzip::{DosDateTime, HostSystem, LocalFileSystem, ZipBuilder, ZipError};

const LOREM: &[u8] = b"Hello, world!";
const LOREM_CRC: u32 = 0xebe6c6e6;

fn build_lorem(dir: &Path, host: HostSystem) -> Vec<u8> {
    let input = dir.join("lorem.txt");
    let output = dir.join("lorem.zip");
    std::fs::write(&input, LOREM).unwrap();

    ZipBuilder::new(LocalFileSystem)
        .with_host(host)
        .create(&input, &output)
        .unwrap();
    std::fs::read(&output).unwrap()
}

#[test]
fn local_header_fields() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = build_lorem(dir.path(), HostSystem::Unix);

    let mut buf = Buf::new(&bytes);
    assert_eq!(buf.read_u32::<LittleEndian>(), LFH_SIGNATURE);
    assert_eq!(buf.read_u16::<LittleEndian>(), 0x0014); // version needed
    assert_eq!(buf.read_u16::<LittleEndian>(), 0); // flags
    assert_eq!(buf.read_u16::<LittleEndian>(), 0); // stored
    let time = buf.read_u16::<LittleEndian>();
    let date = buf.read_u16::<LittleEndian>();
    assert_eq!(buf.read_u32::<LittleEndian>(), LOREM_CRC);
    assert_eq!(buf.read_u32::<LittleEndian>(), 13);
    assert_eq!(buf.read_u32::<LittleEndian>(), 13);
    assert_eq!(buf.read_u16::<LittleEndian>(), 9);
    assert_eq!(buf.read_u16::<LittleEndian>(), 0);
    assert_eq!(buf.take(9), b"lorem.txt");
    assert_eq!(buf.take(13), LOREM);

    let modified = std::fs::metadata(dir.path().join("lorem.txt"))
        .unwrap()
        .modified()
        .unwrap();
    let expected = DosDateTime::from_system_time(modified);
    assert_eq!(date, expected.msdos_date().unwrap());
    assert_eq!(time, expected.msdos_time().unwrap());
}

#[test]
fn footer_points_at_central_directory() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = build_lorem(dir.path(), HostSystem::Ntfs);

    let eocd_at = bytes.len() - EndOfCentralDirectory::SIZE;
    let mut eocd = Buf::new(&bytes[eocd_at..]);
    assert_eq!(eocd.read_u32::<LittleEndian>(), EndOfCentralDirectory::SIGNATURE);
    assert_eq!(eocd.len(), 18);
    assert_eq!(eocd.read_u16::<LittleEndian>(), 0);
    assert_eq!(eocd.read_u16::<LittleEndian>(), 0);
    assert_eq!(eocd.read_u16::<LittleEndian>(), 1);
    assert_eq!(eocd.read_u16::<LittleEndian>(), 1);
    let cd_size = eocd.read_u32::<LittleEndian>() as usize;
    let cd_offset = eocd.read_u32::<LittleEndian>() as usize;
    assert_eq!(eocd.read_u16::<LittleEndian>(), 0);
    assert!(eocd.is_empty());

    assert_eq!(cd_offset, 30 + 9 + LOREM.len());
    assert_eq!(cd_offset + cd_size, eocd_at);

    let mut cd = Buf::new(&bytes[cd_offset..cd_offset + cd_size]);
    assert_eq!(cd.read_u32::<LittleEndian>(), CDFH_SIGNATURE);
    assert_eq!(cd.read_u16::<LittleEndian>(), 0x0a14); // made by NTFS, 2.0
    assert_eq!(cd.read_u16::<LittleEndian>(), 0x0014);
    cd.take(2 + 2 + 2 + 2);
    assert_eq!(cd.read_u32::<LittleEndian>(), LOREM_CRC);
    assert_eq!(cd.read_u32::<LittleEndian>(), 13);
    assert_eq!(cd.read_u32::<LittleEndian>(), 13);
    assert_eq!(cd.read_u16::<LittleEndian>(), 9);
    assert_eq!(cd.read_u16::<LittleEndian>(), 0);
    assert_eq!(cd.read_u16::<LittleEndian>(), 0);
    assert_eq!(cd.read_u16::<LittleEndian>(), 0);
    assert_eq!(cd.read_u16::<LittleEndian>(), 0);
    assert_eq!(cd.read_u32::<LittleEndian>(), 0x20);
    assert_eq!(cd.read_u32::<LittleEndian>(), 0); // local header offset
    assert_eq!(cd.remaining(), b"lorem.txt");
}

#[test]
fn readable_by_zip_crate() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = build_lorem(dir.path(), HostSystem::Unix);

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_index(0).unwrap();
    assert_eq!(entry.name(), "lorem.txt");
    assert_eq!(entry.compression(), zip::CompressionMethod::Stored);
    assert_eq!(entry.size(), 13);
    assert_eq!(entry.compressed_size(), 13);
    assert_eq!(entry.crc32(), LOREM_CRC);

    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();
    assert_eq!(content, LOREM);
}

#[test]
fn empty_file_archive() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty");
    std::fs::write(&input, b"").unwrap();

    let archive = ZipBuilder::new(LocalFileSystem).build(&input).unwrap();
    assert_eq!(archive.summary.crc32, 0);
    assert_eq!(archive.summary.size, 0);
    assert_eq!(archive.summary.central_dir_offset, 30 + 5);
    assert_eq!(archive.bytes.len(), 30 + 5 + 46 + 5 + 22);

    let mut reader = zip::ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
    assert_eq!(reader.by_index(0).unwrap().size(), 0);
}

#[test]
fn missing_input_leaves_no_archive() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.zip");

    let err = ZipBuilder::new(LocalFileSystem)
        .create(&dir.path().join("nope.txt"), &output)
        .unwrap_err();
    assert!(matches!(err, ZipError::FilesystemRead { .. }));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lorem.txt");
    std::fs::write(&input, LOREM).unwrap();

    let err = ZipBuilder::new(LocalFileSystem)
        .create(&input, &dir.path().join("missing/dir/out.zip"))
        .unwrap_err();
    assert!(matches!(err, ZipError::FilesystemWrite { .. }));
}

#[test]
fn bundled_lorem_fixture() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/lorem.txt");
    let archive = ZipBuilder::new(LocalFileSystem).build(&fixture).unwrap();

    assert_eq!(&archive.bytes[..4], &LFH_SIGNATURE.to_le_bytes());
    assert_eq!(archive.summary.file_name, "lorem.txt");
    assert_eq!(archive.summary.size, 13);
    assert_eq!(archive.summary.crc32, LOREM_CRC);
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_file_name_stored_raw() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
    std::fs::write(&input, LOREM).unwrap();

    let archive = ZipBuilder::new(LocalFileSystem).build(&input).unwrap();
    let mut buf = Buf::new(&archive.bytes);
    buf.take(26);
    assert_eq!(buf.read_u16::<LittleEndian>(), 8);
    assert_eq!(buf.read_u16::<LittleEndian>(), 0);
    assert_eq!(buf.take(8), b"caf\xe9.txt");

    let cd_offset = archive.summary.central_dir_offset as usize;
    assert_eq!(&archive.bytes[cd_offset + 46..cd_offset + 54], b"caf\xe9.txt");
}
