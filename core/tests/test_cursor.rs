#[cfg(test)]
mod tests {
    use unicv_core::{cursor::BinaryCursor, types::ParseError};

    #[test]
    fn reads_little_endian_fields_in_order() {
        let bytes = [1u8, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, b'A', b'B'];
        let mut cur = BinaryCursor::new(&bytes);
        assert_eq!(cur.read_u32_le().unwrap(), 1);
        assert_eq!(cur.read_u64_le().unwrap(), 2);
        assert_eq!(cur.read_array::<2>().unwrap(), *b"AB");
        assert_eq!(cur.offset(), bytes.len());
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn read_past_end_reports_offset() {
        let bytes = [0u8; 6];
        let mut cur = BinaryCursor::new(&bytes);
        cur.read_u32_le().unwrap();
        let err = cur.read_u32_le().unwrap_err();
        assert!(matches!(
            err,
            ParseError::TruncatedInput { offset: 4, needed: 4, available: 2 }
        ));
        assert_eq!(err.offset(), Some(4));
        // failed reads do not move the cursor
        assert_eq!(cur.offset(), 4);
    }

    #[test]
    fn skip_to_block_boundary_aligns_forward() {
        let bytes = [0u8; 16];
        let mut cur = BinaryCursor::new(&bytes);
        cur.read_bytes(3).unwrap();
        cur.skip_to_block_boundary(8).unwrap();
        assert_eq!(cur.offset(), 8);
        assert!(cur.is_block_aligned(8));

        // already aligned: no-op
        cur.skip_to_block_boundary(8).unwrap();
        assert_eq!(cur.offset(), 8);
    }

    #[test]
    fn skip_into_missing_bytes_is_truncated() {
        let bytes = [0u8; 10];
        let mut cur = BinaryCursor::new(&bytes);
        cur.read_bytes(2).unwrap();
        let err = cur.skip_to_block_boundary(16).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TruncatedInput { offset: 2, needed: 14, available: 8 }
        ));
    }

    #[test]
    fn zero_block_size_is_a_config_error() {
        let bytes = [0u8; 4];
        let mut cur = BinaryCursor::new(&bytes);
        cur.read_bytes(1).unwrap();
        assert!(matches!(
            cur.skip_to_block_boundary(0).unwrap_err(),
            ParseError::InvalidConfig(_)
        ));
    }

    #[test]
    fn empty_source() {
        let cur = BinaryCursor::new(&[]);
        assert!(cur.is_empty());
        assert_eq!(cur.len(), 0);
        assert_eq!(cur.remaining(), 0);
    }
}
