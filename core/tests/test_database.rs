// End-to-end suite over synthetic databases: ordering, bounds, atomic failure, round-trip.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use unicv_core::{
        config::{FormatConfig, ParseOptions},
        constants::EXPECTED_BLOCK_SIZE,
        database::{encode_database, Database, DbEntry},
        parse, parse_bytes, parse_with,
        signatures::{Digest, SignatureChain},
        table::{EntryKind, FileTableEntry},
        types::ParseError,
    };

    const BLOCK: usize = EXPECTED_BLOCK_SIZE as usize;

    fn digests(n: u32, seed: u8) -> Vec<Digest> {
        (0..n)
            .map(|i| {
                let mut d = [seed; 20];
                d[..4].copy_from_slice(&i.to_le_bytes());
                d
            })
            .collect()
    }

    fn file(cfg: &FormatConfig, chunks: u32, seed: u8) -> DbEntry {
        DbEntry::file(
            FileTableEntry::file(cfg, chunks, [seed; 20], [seed.wrapping_add(1); 20]),
            SignatureChain::from_digests(&digests(chunks, seed), cfg),
        )
    }

    fn dir(cfg: &FormatConfig) -> DbEntry {
        DbEntry::directory(FileTableEntry::directory(cfg))
    }

    /// dir, file(75), dir, file(100), file(3)
    fn sample() -> Database {
        let cfg = FormatConfig::default();
        Database::from_entries(
            2,
            vec![dir(&cfg), file(&cfg, 75, 0x10), dir(&cfg), file(&cfg, 100, 0x20), file(&cfg, 3, 0x30)],
            &cfg,
        )
    }

    fn patch_u32(bytes: &mut [u8], at: usize, v: u32) {
        bytes[at..at + 4].copy_from_slice(&v.to_le_bytes());
    }

    // ## 1️⃣ Well-formed inputs

    #[test]
    fn entries_come_back_in_order() {
        let db = sample();
        let parsed = parse_bytes(&db.to_bytes().unwrap(), &ParseOptions::default()).unwrap();
        let kinds: Vec<EntryKind> = parsed.entries.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![EntryKind::Directory, EntryKind::File, EntryKind::Directory, EntryKind::File, EntryKind::File]
        );
        let chunks: Vec<u32> = parsed.entries.iter().map(|e| e.table().total_chunk_count).collect();
        assert_eq!(chunks, vec![0, 75, 0, 100, 3]);
    }

    #[test]
    fn round_trip_is_structurally_equal() {
        let db = sample();
        let bytes = encode_database(&db).unwrap();
        let parsed = parse_bytes(&bytes, &ParseOptions::default()).unwrap();
        assert_eq!(parsed, db);
        assert_eq!(parsed.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn page_indices_follow_layout() {
        let db = sample();
        // header=0, dir=1, file(75)=2..4, dir=5, file(100)=6..8, file(3)=9..10
        let pages: Vec<u64> = db.entries.iter().map(|e| e.page()).collect();
        assert_eq!(pages, vec![1, 2, 5, 6, 9]);
        assert_eq!(db.header.data_size, 10 * BLOCK as u64);

        let parsed = parse_bytes(&db.to_bytes().unwrap(), &ParseOptions::default()).unwrap();
        let parsed_pages: Vec<u64> = parsed.entries.iter().map(|e| e.page()).collect();
        assert_eq!(parsed_pages, pages);
    }

    #[test]
    fn chain_shapes() {
        let parsed = parse_bytes(&sample().to_bytes().unwrap(), &ParseOptions::default()).unwrap();
        let shapes: Vec<Vec<u32>> = parsed
            .files()
            .map(|(_, chain)| chain.pages.iter().map(|p| p.signature_count()).collect())
            .collect();
        assert_eq!(shapes, vec![vec![50, 25], vec![50, 50], vec![3]]);
        assert!(parsed.entries[0].chain().is_none());
    }

    #[test]
    fn directory_aux_bytes_do_not_matter() {
        let cfg = FormatConfig::default();
        let mut table = FileTableEntry::directory(&cfg);
        table.aux_data = [0xEE; 20];
        let db = Database::from_entries(1, vec![DbEntry::directory(table)], &cfg);
        let parsed = parse_bytes(&db.to_bytes().unwrap(), &ParseOptions::default()).unwrap();
        assert_eq!(parsed.entries[0].kind(), EntryKind::Directory);
        assert_eq!(parsed.entries[0].table().aux_data, [0xEE; 20]);
    }

    #[test]
    fn empty_database() {
        let cfg = FormatConfig::default();
        let db = Database::from_entries(2, Vec::new(), &cfg);
        let parsed = parse_bytes(&db.to_bytes().unwrap(), &ParseOptions::default()).unwrap();
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.header.data_size, 0);
    }

    // ## 2️⃣ Bounds

    #[test]
    fn expected_entry_count_bounds_the_scan() {
        let bytes = sample().to_bytes().unwrap();
        let opts = ParseOptions::default().with_expected_entries(2);
        let parsed = parse_bytes(&bytes, &opts).unwrap();
        assert_eq!(parsed.entries.len(), 2);
    }

    #[test]
    fn expected_entry_count_beyond_input_is_truncated() {
        let bytes = sample().to_bytes().unwrap();
        let opts = ParseOptions::default().with_expected_entries(6);
        assert!(matches!(
            parse_bytes(&bytes, &opts).unwrap_err(),
            ParseError::TruncatedInput { .. }
        ));
    }

    #[test]
    fn data_size_bounds_the_scan() {
        let mut bytes = sample().to_bytes().unwrap();
        // trailing garbage after the declared data is never read
        bytes.extend_from_slice(&vec![0xFF; BLOCK]);
        let parsed = parse_bytes(&bytes, &ParseOptions::default()).unwrap();
        assert_eq!(parsed.entries.len(), 5);
    }

    #[test]
    fn input_over_limit_is_refused() {
        let bytes = sample().to_bytes().unwrap();
        let opts = ParseOptions::default().with_max_input_len(BLOCK as u64);
        assert!(matches!(
            parse_bytes(&bytes, &opts).unwrap_err(),
            ParseError::LimitExceeded { what: "input", .. }
        ));
    }

    #[test]
    fn declared_data_size_over_limit_is_refused() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[24..32].copy_from_slice(&u64::MAX.to_le_bytes());
        let opts = ParseOptions::default().with_max_input_len(1 << 20);
        assert!(matches!(
            parse_bytes(&bytes, &opts).unwrap_err(),
            ParseError::LimitExceeded { what: "declared data size", .. }
        ));
    }

    #[test]
    fn entry_running_past_data_size_is_rejected() {
        let cfg = FormatConfig::default();
        let mut bytes = Database::from_entries(2, vec![file(&cfg, 75, 0x40)], &cfg)
            .to_bytes()
            .unwrap();
        bytes[24..32].copy_from_slice(&1u64.to_le_bytes());
        assert!(matches!(
            parse_bytes(&bytes, &ParseOptions::default()).unwrap_err(),
            ParseError::SizeMismatch { offset: 0x1000, expected: 0x401, actual: 0x1000, .. }
        ));
    }

    #[test]
    fn chain_running_past_data_size_is_rejected() {
        let mut bytes = sample().to_bytes().unwrap();
        // declared end now falls inside the last file's chain
        bytes[24..32].copy_from_slice(&(9 * BLOCK as u64).to_le_bytes());
        let err = parse_bytes(&bytes, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::SizeMismatch { expected: 0x2800, actual: 0x2C00, .. }));
    }

    #[test]
    fn huge_chunk_count_fails_without_reserving_pages() {
        let cfg = FormatConfig::default();
        let mut bytes = Database::from_entries(2, vec![file(&cfg, 75, 0x50)], &cfg)
            .to_bytes()
            .unwrap();
        // totalChunkCount of the only entry, at block 1
        patch_u32(&mut bytes, BLOCK + 20, u32::MAX);
        assert!(matches!(
            parse_bytes(&bytes, &ParseOptions::default()).unwrap_err(),
            ParseError::CountMismatch { offset: 0xC08, expected: 50, actual: 25, .. }
        ));
    }

    // ## 3️⃣ Atomic failure

    #[test]
    fn corrupted_header_magic() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[0] ^= 0xFF;
        let err = parse_bytes(&bytes, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::MagicMismatch { offset: 0, .. }));
    }

    #[test]
    fn truncated_mid_last_page() {
        let bytes = sample().to_bytes().unwrap();
        // last file has 3 chunks: its page starts at block 10
        let cut = 10 * BLOCK + 40;
        let err = parse_bytes(&bytes[..cut], &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::TruncatedInput { .. }));
    }

    #[test]
    fn corrupted_entry_magic_reports_its_offset() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[5 * BLOCK] = b'X';
        let err = parse_bytes(&bytes, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::MagicMismatch { offset: 0x1400, .. }));
        assert_eq!(err.offset(), Some(0x1400));
    }

    #[test]
    fn count_mismatch_in_second_page() {
        let mut bytes = sample().to_bytes().unwrap();
        // file(75): entry at block 2, pages at 3 and 4
        patch_u32(&mut bytes, 4 * BLOCK + 8, 26);
        assert!(matches!(
            parse_bytes(&bytes, &ParseOptions::default()).unwrap_err(),
            ParseError::CountMismatch { .. }
        ));
    }

    #[test]
    fn invalid_format_config_fails_before_reading() {
        let bytes = sample().to_bytes().unwrap();
        let mut cfg = FormatConfig::default();
        cfg.supported_versions.clear();
        let opts = ParseOptions::default().with_format(cfg);
        assert!(matches!(
            parse_bytes(&bytes, &opts).unwrap_err(),
            ParseError::InvalidConfig(_)
        ));
    }

    // ## 4️⃣ Catalog cross-check

    #[test]
    fn catalog_counts() {
        let db = sample();
        assert_eq!(db.directory_count(), 2);
        assert_eq!(db.file_count(), 3);
        db.check_catalog_counts(2, 3).unwrap();
        assert!(matches!(
            db.check_catalog_counts(2, 4).unwrap_err(),
            ParseError::CountMismatch { field: "file entries", expected: 4, actual: 3, .. }
        ));
        assert!(matches!(
            db.check_catalog_counts(1, 3).unwrap_err(),
            ParseError::CountMismatch { field: "directory entries", .. }
        ));
    }

    // ## 5️⃣ Path entry points

    #[test]
    fn parse_from_path() {
        let db = sample();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&db.to_bytes().unwrap()).unwrap();
        file.flush().unwrap();

        assert_eq!(parse(file.path()).unwrap(), db);

        let opts = ParseOptions::default().with_expected_entries(5);
        assert_eq!(parse_with(file.path(), &opts).unwrap(), db);
    }

    #[test]
    fn parse_path_over_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&sample().to_bytes().unwrap()).unwrap();
        file.flush().unwrap();

        let opts = ParseOptions::default().with_max_input_len(16);
        assert!(matches!(
            parse_with(file.path(), &opts).unwrap_err(),
            ParseError::LimitExceeded { what: "input file", .. }
        ));
    }

    #[test]
    fn parse_path_checks_format_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&sample().to_bytes().unwrap()).unwrap();
        file.flush().unwrap();

        let cfg = FormatConfig {
            max_signatures_per_page: 0,
            ..FormatConfig::default()
        };
        let opts = ParseOptions::default().with_format(cfg);
        assert!(matches!(
            parse_with(file.path(), &opts).unwrap_err(),
            ParseError::InvalidConfig(_)
        ));
    }

    #[test]
    fn missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse(dir.path().join("unicv.db")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn parsed_tree_serializes() {
        let cfg = FormatConfig::default();
        let db = Database::from_entries(2, vec![dir(&cfg), file(&cfg, 2, 1)], &cfg);
        let json = serde_json::to_value(&db).unwrap();
        assert_eq!(json["header"]["version"], 2);
        assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    }
}
