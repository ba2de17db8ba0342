//! Four-character tags packed into a single `u32`.
//!
//! Chunk headers, file magic and resource kinds are often identified by four
//! ASCII characters such as `"ID01"`. Packing them into one integer turns the
//! comparison into a single `u32` equality instead of a per-character loop.
//!
//! The layout is fixed: the first character occupies the lowest-order byte,
//! so the packed value equals the little-endian reading of the four bytes as
//! they appear in a buffer.
//!
//! ```
//! use t0_utils::tag::{PackedId, encode_tag, tag_matches};
//!
//! const CHUNK: u32 = encode_tag(b'I', b'D', b'0', b'1');
//!
//! assert!(tag_matches(b"ID01", CHUNK));
//! assert!(!tag_matches(b"ID02", CHUNK));
//! assert_eq!(PackedId::from_ascii(b"ID01").to_bits(), CHUNK);
//! ```

mod error;
mod serde;

pub use error::TagError;

use core::fmt::{self, Write};
use core::str::FromStr;

// -----------------------------------------------------------------------------
// Free functions

/// Packs four bytes into a `u32`, `c0` in the lowest-order byte.
#[inline(always)]
pub const fn encode_tag(c0: u8, c1: u8, c2: u8, c3: u8) -> u32 {
    (c0 as u32) | ((c1 as u32) << 8) | ((c2 as u32) << 16) | ((c3 as u32) << 24)
}

/// Unpacks a `u32` into its four bytes, lowest-order byte first.
///
/// Exact inverse of [`encode_tag`].
///
/// ```
/// use t0_utils::tag::{decode_tag, encode_tag};
///
/// assert_eq!(decode_tag(encode_tag(b'R', b'I', b'F', b'F')), *b"RIFF");
/// ```
#[inline(always)]
pub const fn decode_tag(tag: u32) -> [u8; 4] {
    [
        (tag & 0xFF) as u8,
        ((tag >> 8) & 0xFF) as u8,
        ((tag >> 16) & 0xFF) as u8,
        ((tag >> 24) & 0xFF) as u8,
    ]
}

/// Returns `true` if the first four bytes of `buffer` spell `tag`.
///
/// Bytes past the fourth are ignored. A buffer shorter than four bytes never
/// matches.
///
/// ```
/// use t0_utils::tag::{encode_tag, tag_matches};
///
/// let magic = encode_tag(b'V', b'T', b'F', b'\0');
/// assert!(tag_matches(b"VTF\0header...", magic));
/// assert!(!tag_matches(b"VT", magic));
/// ```
#[inline]
pub const fn tag_matches(buffer: &[u8], tag: u32) -> bool {
    match buffer.first_chunk::<4>() {
        Some(head) => u32::from_le_bytes(*head) == tag,
        None => false,
    }
}

/// Writes the four bytes of `tag` to the start of `buffer`.
///
/// The rest of the buffer is left untouched.
///
/// # Errors
///
/// Returns [`TagError::BufferTooShort`] if `buffer` holds fewer than four bytes.
/// Nothing is written in that case.
///
/// ```
/// use t0_utils::tag::{encode_tag, write_tag};
///
/// let mut header = [0u8; 8];
/// write_tag(encode_tag(b'B', b'S', b'P', b'1'), &mut header).unwrap();
/// assert_eq!(&header[..4], b"BSP1");
/// ```
pub fn write_tag(tag: u32, buffer: &mut [u8]) -> Result<(), TagError> {
    let len = buffer.len();
    let head = buffer
        .first_chunk_mut::<4>()
        .ok_or(TagError::BufferTooShort(len))?;
    *head = decode_tag(tag);
    Ok(())
}

// -----------------------------------------------------------------------------
// PackedId

/// A four-character tag stored as one `u32`.
///
/// Equality, ordering and hashing are those of the packed integer.
///
/// ```
/// use t0_utils::PackedId;
///
/// const MODEL: PackedId = PackedId::from_ascii(b"IDST");
///
/// let parsed: PackedId = "IDST".parse().unwrap();
/// assert_eq!(parsed, MODEL);
/// assert!(MODEL.matches(b"IDST\x30\x00\x00\x00"));
/// assert_eq!(format!("{MODEL}"), "IDST");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PackedId(u32);

impl PackedId {
    /// Packs four bytes, `c0` in the lowest-order byte.
    #[inline(always)]
    pub const fn new(c0: u8, c1: u8, c2: u8, c3: u8) -> Self {
        Self(encode_tag(c0, c1, c2, c3))
    }

    /// Packs a four-byte literal such as `b"ID01"`.
    ///
    /// The length is part of the argument type, so a literal of any other
    /// length does not compile.
    #[inline(always)]
    pub const fn from_ascii(bytes: &[u8; 4]) -> Self {
        Self::from_bytes(*bytes)
    }

    /// Packs four bytes in buffer order.
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Wraps an already packed value.
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the packed value.
    #[inline(always)]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Returns the four bytes in buffer order.
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        decode_tag(self.0)
    }

    /// See [`tag_matches`].
    #[inline]
    pub const fn matches(self, buffer: &[u8]) -> bool {
        tag_matches(buffer, self.0)
    }

    /// See [`write_tag`].
    #[inline]
    pub fn write_to(self, buffer: &mut [u8]) -> Result<(), TagError> {
        write_tag(self.0, buffer)
    }

    /// Returns `true` if all four bytes are printable ASCII, space included.
    pub const fn is_printable(self) -> bool {
        let bytes = self.to_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if !is_printable_byte(bytes[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

#[inline(always)]
const fn is_printable_byte(byte: u8) -> bool {
    byte.is_ascii_graphic() || byte == b' '
}

impl From<u32> for PackedId {
    #[inline]
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<PackedId> for u32 {
    #[inline]
    fn from(id: PackedId) -> Self {
        id.0
    }
}

impl From<[u8; 4]> for PackedId {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for PackedId {
    type Error = TagError;

    /// Accepts exactly four bytes.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let head: [u8; 4] = bytes
            .try_into()
            .map_err(|_| TagError::InvalidLength(bytes.len()))?;
        Ok(Self::from_bytes(head))
    }
}

impl FromStr for PackedId {
    type Err = TagError;

    /// Accepts exactly four bytes of UTF-8.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

impl fmt::Display for PackedId {
    /// Printable ASCII is written as is, any other byte as `\xNN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            if is_printable_byte(byte) {
                f.write_char(byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for PackedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PackedId")
            .field(&format_args!("\"{self}\""))
            .finish()
    }
}
