//! Fixed-width integer encoding.
//!
//! Every multi-byte field in a ZIP record is little-endian. This module
//! provides the [`ByteOrder`] strategy with its [`LittleEndian`] variant,
//! a consuming cursor ([`Buf`]) for walking an encoded stream, and
//! [`BufMut`] for appending encoded fields to a `Vec<u8>`.
//!
//! Wider widths are composed from narrower ones: `u32` is a `u16` plus two
//! shifted bytes, `u64` is a `u32` plus four shifted bytes.

/// Byte-order policy for fixed-width unsigned integers.
///
/// # Panics
///
/// Every method panics if the slice is shorter than the width in bytes.
pub trait ByteOrder {
    fn read_u16(buf: &[u8]) -> u16;
    fn read_u32(buf: &[u8]) -> u32;
    fn read_u64(buf: &[u8]) -> u64;
    fn write_u16(buf: &mut [u8], n: u16);
    fn write_u32(buf: &mut [u8], n: u32);
    fn write_u64(buf: &mut [u8], n: u64);
}

/// Least-significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LittleEndian;

impl ByteOrder for LittleEndian {
    #[inline]
    fn read_u16(buf: &[u8]) -> u16 {
        let b = &buf[..2];
        u16::from(b[0]) | u16::from(b[1]) << 8
    }

    #[inline]
    fn read_u32(buf: &[u8]) -> u32 {
        let b = &buf[..4];
        u32::from(Self::read_u16(b)) | u32::from(b[2]) << 16 | u32::from(b[3]) << 24
    }

    #[inline]
    fn read_u64(buf: &[u8]) -> u64 {
        let b = &buf[..8];
        u64::from(Self::read_u32(b))
            | u64::from(b[4]) << 32
            | u64::from(b[5]) << 40
            | u64::from(b[6]) << 48
            | u64::from(b[7]) << 56
    }

    #[inline]
    fn write_u16(buf: &mut [u8], n: u16) {
        let b = &mut buf[..2];
        b[0] = n as u8;
        b[1] = (n >> 8) as u8;
    }

    #[inline]
    fn write_u32(buf: &mut [u8], n: u32) {
        let b = &mut buf[..4];
        Self::write_u16(b, n as u16);
        b[2] = (n >> 16) as u8;
        b[3] = (n >> 24) as u8;
    }

    #[inline]
    fn write_u64(buf: &mut [u8], n: u64) {
        let b = &mut buf[..8];
        Self::write_u32(b, n as u32);
        b[4] = (n >> 32) as u8;
        b[5] = (n >> 40) as u8;
        b[6] = (n >> 48) as u8;
        b[7] = (n >> 56) as u8;
    }
}

/// A read cursor that drops bytes from the front as they are decoded.
///
/// ```
/// use mkzip::binary::{Buf, LittleEndian};
///
/// let mut buf = Buf::new(&[0x50, 0x4b, 0x03, 0x04, 0x14, 0x00]);
/// assert_eq!(buf.read_u32::<LittleEndian>(), 0x04034b50);
/// assert_eq!(buf.read_u16::<LittleEndian>(), 0x0014);
/// assert!(buf.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Buf<'a> {
    data: &'a [u8],
}

impl<'a> Buf<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the next `n` bytes without decoding them.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes remain.
    pub fn take(&mut self, n: usize) -> &'a [u8] {
        let (head, tail) = self.data.split_at(n);
        self.data = tail;
        head
    }

    /// # Panics
    ///
    /// Panics if fewer than 2 bytes remain.
    pub fn read_u16<B: ByteOrder>(&mut self) -> u16 {
        B::read_u16(self.take(2))
    }

    /// # Panics
    ///
    /// Panics if fewer than 4 bytes remain.
    pub fn read_u32<B: ByteOrder>(&mut self) -> u32 {
        B::read_u32(self.take(4))
    }

    /// # Panics
    ///
    /// Panics if fewer than 8 bytes remain.
    pub fn read_u64<B: ByteOrder>(&mut self) -> u64 {
        B::read_u64(self.take(8))
    }
}

/// Append encoded integers to a growable buffer.
pub trait BufMut {
    fn put_u16<B: ByteOrder>(&mut self, n: u16);
    fn put_u32<B: ByteOrder>(&mut self, n: u32);
    fn put_u64<B: ByteOrder>(&mut self, n: u64);
}

impl BufMut for Vec<u8> {
    fn put_u16<B: ByteOrder>(&mut self, n: u16) {
        let mut b = [0u8; 2];
        B::write_u16(&mut b, n);
        self.extend_from_slice(&b);
    }

    fn put_u32<B: ByteOrder>(&mut self, n: u32) {
        let mut b = [0u8; 4];
        B::write_u32(&mut b, n);
        self.extend_from_slice(&b);
    }

    fn put_u64<B: ByteOrder>(&mut self, n: u64) {
        let mut b = [0u8; 8];
        B::write_u64(&mut b, n);
        self.extend_from_slice(&b);
    }
}
