//! MS-DOS date and time fields.
//!
//! ZIP headers store the modification time as two packed 16-bit words:
//!
//! ```text
//! date: yyyyyyym mmmddddd   year-1980, month, day
//! time: hhhhhmmm mmmsssss   hour, minute, second/2
//! ```
//!
//! Each field is turned into a string of binary digits by repeated halving,
//! padded to its width, and the concatenated 16-digit string is parsed back
//! into the packed word.

use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};

use crate::binary::{ByteOrder, LittleEndian};
use crate::error::ZipResult;

/// Tolerance used when deciding whether a halved value is whole.
const WHOLE_EPSILON: f64 = 1e-10;

/// A calendar timestamp as it is stored in a zip header.
///
/// The resolution of the stored time is 2 seconds, and the stored date
/// is kept within 1980-01-01..=2107-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosDateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Default for DosDateTime {
    /// 1980-01-01 00:00:00
    fn default() -> Self {
        Self::EPOCH
    }
}

impl DosDateTime {
    /// The earliest date the format can represent.
    pub const EPOCH: DosDateTime = DosDateTime {
        year: 1980,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// The latest timestamp the format can represent.
    pub const MAX: DosDateTime = DosDateTime {
        year: 2107,
        month: 12,
        day: 31,
        hour: 23,
        minute: 59,
        second: 58,
    };

    /// Expected bounds: month 1..=12, day 1..=31, hour 0..=23, minute 0..=59,
    /// second 0..=59. Other values fail to pack.
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert a filesystem timestamp using the local time zone.
    pub fn from_system_time(t: SystemTime) -> Self {
        DateTime::<Local>::from(t).naive_local().into()
    }

    /// Decode packed date and time words.
    pub const fn from_msdos(date: u16, time: u16) -> Self {
        Self {
            year: (date >> 9) + 1980,
            month: ((date >> 5) & 0x0f) as u8,
            day: (date & 0x1f) as u8,
            hour: (time >> 11) as u8,
            minute: ((time >> 5) & 0x3f) as u8,
            second: ((time & 0x1f) << 1) as u8,
        }
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Whether the date fits the 7-bit year field without clamping.
    pub const fn is_representable(&self) -> bool {
        self.year >= Self::EPOCH.year && self.year <= Self::MAX.year
    }

    /// The packed date word. Dates before 1980 are written as 1980-01-01,
    /// dates after 2107 as 2107-12-31.
    pub fn msdos_date(&self) -> ZipResult<u16> {
        let (year, month, day) = if self.year < Self::EPOCH.year {
            (Self::EPOCH.year, Self::EPOCH.month, Self::EPOCH.day)
        } else if self.year > Self::MAX.year {
            (Self::MAX.year, Self::MAX.month, Self::MAX.day)
        } else {
            (self.year, self.month, self.day)
        };

        pack(&[
            (u32::from(year - 1980), 7),
            (u32::from(month), 4),
            (u32::from(day), 5),
        ])
    }

    /// The packed time word.
    pub fn msdos_time(&self) -> ZipResult<u16> {
        pack(&[
            (u32::from(self.hour), 5),
            (u32::from(self.minute), 6),
            (u32::from(self.second / 2), 5),
        ])
    }

    /// The date word as it appears on disk.
    pub fn date_bytes(&self) -> ZipResult<[u8; 2]> {
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, self.msdos_date()?);
        Ok(b)
    }

    /// The time word as it appears on disk.
    pub fn time_bytes(&self) -> ZipResult<[u8; 2]> {
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, self.msdos_time()?);
        Ok(b)
    }
}

impl From<NaiveDateTime> for DosDateTime {
    fn from(value: NaiveDateTime) -> Self {
        // out-of-range years clamp when packed
        let year = u16::try_from(value.year().max(0)).unwrap_or(u16::MAX);
        Self::new(
            year,
            value.month() as u8,
            value.day() as u8,
            value.hour() as u8,
            value.minute() as u8,
            value.second().min(59) as u8,
        )
    }
}

/// Concatenate `(value, width)` fields MSB first and parse them as one word.
fn pack(fields: &[(u32, usize)]) -> ZipResult<u16> {
    let digits: String = fields
        .iter()
        .map(|&(value, width)| pad_bits(to_binary_digits(value), width))
        .collect();
    Ok(u16::from_str_radix(&digits, 2)?)
}

/// Binary digits of `value`, most significant first.
///
/// Each halving step yields the next low digit: a whole quotient means the
/// digit is 0, a fractional one means it is 1.
pub(crate) fn to_binary_digits(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = String::new();
    while value > 1 {
        let half = f64::from(value) / 2.0;
        digits.insert(0, if is_whole_number(half) { '0' } else { '1' });
        value = half as u32;
    }
    digits.insert(0, '1');
    digits
}

fn is_whole_number(n: f64) -> bool {
    n.abs() % 1.0 < WHOLE_EPSILON
}

/// Left-pad with zeros up to `width`. Longer strings are left untouched.
pub(crate) fn pad_bits(mut digits: String, width: usize) -> String {
    while digits.len() < width {
        digits.insert(0, '0');
    }
    digits
}
