use std::fmt;
use num_enum::TryFromPrimitive;

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Render magic words as ASCII when printable, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

// Little-endian block writers shared by the encoders.
// Callers size `out` to one block and never write past the fixed fields.

#[inline]
pub(crate) fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
    out[*i..*i + 4].copy_from_slice(&v.to_le_bytes());
    *i += 4;
}

#[inline]
pub(crate) fn put_u64(out: &mut [u8], i: &mut usize, v: u64) {
    out[*i..*i + 8].copy_from_slice(&v.to_le_bytes());
    *i += 8;
}

#[inline]
pub(crate) fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
    out[*i..*i + b.len()].copy_from_slice(b);
    *i += b.len();
}
