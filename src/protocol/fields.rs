//! Field primitives shared by every frame section.
//!
//! - `LPText`: 4-byte signed BE length followed by that many raw bytes
//! - Absent optional text: length `0`, no bytes
//! - Lists: `LIST_START`, each record in order, `LIST_END`
//!
//! These writers are crate-private and do not check lengths. Every field
//! passes `frame::measure` first, which caps lengths at
//! `ABSOLUTE_MAX_FIELD_SIZE` so a prefix is never negative.

use bytes::BufMut;

use super::wire_format::{ABSOLUTE_MAX_FIELD_SIZE, INT_SIZE, LIST_END, LIST_START};

/// Write a length-prefixed byte field.
#[inline]
pub(crate) fn put_blob<B: BufMut>(out: &mut B, data: &[u8]) {
    debug_assert!(data.len() <= ABSOLUTE_MAX_FIELD_SIZE as usize);
    out.put_i32(data.len() as i32);
    out.put_slice(data);
}

/// Write a length-prefixed UTF-8 text field.
#[inline]
pub(crate) fn put_text<B: BufMut>(out: &mut B, text: &str) {
    put_blob(out, text.as_bytes());
}

/// Write optional text; `None` is encoded exactly like `""`.
#[inline]
pub(crate) fn put_opt_text<B: BufMut>(out: &mut B, text: Option<&str>) {
    put_text(out, text.unwrap_or(""));
}

/// Write a framed list, calling `put_item` for each record in order.
///
/// An empty slice still produces both sentinels.
pub(crate) fn put_list<B, T, F>(out: &mut B, items: &[T], mut put_item: F)
where
    B: BufMut,
    F: FnMut(&mut B, &T),
{
    out.put_i32(LIST_START);
    for item in items {
        put_item(&mut *out, item);
    }
    out.put_i32(LIST_END);
}

/// Encoded size of a length-prefixed field holding `len` bytes.
#[inline]
pub(crate) fn blob_size(len: usize) -> usize {
    INT_SIZE + len
}

/// Encoded size of the two list sentinels.
#[inline]
pub(crate) fn list_overhead() -> usize {
    2 * INT_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_text_length_prefix() {
        let mut buf: Vec<u8> = Vec::new();
        put_text(&mut buf, "resnet");

        assert_eq!(&buf[..4], &[0, 0, 0, 6]);
        assert_eq!(&buf[4..], b"resnet");
        assert_eq!(buf.len(), blob_size(6));
    }

    #[test]
    fn test_put_text_counts_utf8_bytes_not_chars() {
        let mut buf: Vec<u8> = Vec::new();
        put_text(&mut buf, "héllo"); // 5 chars, 6 bytes

        assert_eq!(&buf[..4], &[0, 0, 0, 6]);
        assert_eq!(&buf[4..], "héllo".as_bytes());
    }

    #[test]
    fn test_put_opt_text_none_matches_empty() {
        let mut absent: Vec<u8> = Vec::new();
        put_opt_text(&mut absent, None);

        let mut empty: Vec<u8> = Vec::new();
        put_opt_text(&mut empty, Some(""));

        assert_eq!(absent, vec![0, 0, 0, 0]);
        assert_eq!(absent, empty);
    }

    #[test]
    fn test_put_blob_preserves_all_byte_values() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let mut buf: Vec<u8> = Vec::new();
        put_blob(&mut buf, &all_bytes);

        assert_eq!(&buf[..4], &256i32.to_be_bytes());
        assert_eq!(&buf[4..], &all_bytes[..]);
    }

    #[test]
    fn test_put_list_empty_still_framed() {
        let mut buf: Vec<u8> = Vec::new();
        put_list(&mut buf, &[] as &[i32], |out, v| out.put_i32(*v));

        assert_eq!(buf.len(), list_overhead());
        assert_eq!(&buf[..4], &LIST_START.to_be_bytes());
        assert_eq!(&buf[4..], &LIST_END.to_be_bytes());
    }

    #[test]
    fn test_put_list_preserves_order() {
        let mut buf: Vec<u8> = Vec::new();
        put_list(&mut buf, &[7, 8, 9], |out, v| out.put_i32(*v));

        let ints: Vec<i32> = buf
            .chunks(4)
            .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(ints, vec![LIST_START, 7, 8, 9, LIST_END]);
    }

    #[test]
    fn test_writers_only_append() {
        let mut buf = vec![0xAA, 0xBB];
        put_text(&mut buf, "x");

        assert_eq!(&buf[..2], &[0xAA, 0xBB]);
        assert_eq!(&buf[2..], &[0, 0, 0, 1, b'x']);
    }
}
