mod common {
    use crate::core::db::Database;
    use crate::types::{Config, Vocabulary, Word};
    use tempfile::TempDir;

    pub(super) fn create_test_db() -> (Database, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            base_path: temp_dir.path().to_path_buf(),
        };
        let db = Database::open(&config).unwrap();
        (db, temp_dir)
    }

    pub(super) fn make_word(s: &str) -> Word {
        Word::try_from(s).unwrap()
    }

    pub(super) fn sample_vocabulary() -> Vocabulary {
        let mut vocabulary = Vocabulary::new();
        vocabulary.add(make_word("cat"), 5);
        vocabulary.add(make_word("cats"), 2);
        vocabulary.add(make_word("car"), 1);
        vocabulary
    }
}

mod open {
    use super::common::create_test_db;
    use crate::core::db::Database;
    use crate::types::Config;

    #[test]
    fn test_root_exists_after_open() {
        let (db, _temp) = create_test_db();

        let root = db.root().unwrap();
        assert!(root.parent.is_none());
        assert!(root.letter.is_none());
        assert_eq!(root.path, "");
        assert_eq!(root.completion_count, 0);
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let (mut db, temp) = create_test_db();
        db.upsert_path(&super::common::make_word("cat"), 5).unwrap();
        let root_id = db.root().unwrap().id;
        drop(db);

        let config = Config {
            base_path: temp.path().to_path_buf(),
        };
        let db = Database::open(&config).unwrap();

        assert_eq!(db.root().unwrap().id, root_id);
        let record = db.find_path("cat").unwrap().unwrap();
        assert_eq!(record.completion_count, 5);
        assert_eq!(db.total_count().unwrap(), 5);
    }
}

mod upsert {
    use super::common::{create_test_db, make_word};

    #[test]
    fn test_upsert_then_find_path() {
        let (mut db, _temp) = create_test_db();

        db.upsert_path(&make_word("cat"), 5).unwrap();

        let record = db.find_path("cat").unwrap().unwrap();
        assert_eq!(record.completion_count, 5);
        assert_eq!(record.path, "cat");
        assert_eq!(record.letter, Some('t'));
    }

    #[test]
    fn test_counts_accumulate() {
        let (mut db, _temp) = create_test_db();

        db.upsert_path(&make_word("a"), 3).unwrap();
        db.upsert_path(&make_word("a"), 2).unwrap();

        let record = db.find_path("a").unwrap().unwrap();
        assert_eq!(record.completion_count, 5);
        assert_eq!(db.total_count().unwrap(), 5);
    }

    #[test]
    fn test_intermediate_records_are_placeholders() {
        let (mut db, _temp) = create_test_db();

        db.upsert_path(&make_word("cat"), 5).unwrap();

        // "c" and "ca" exist with zero counts: prefix-only, not words.
        let c = db.find_path("c").unwrap().unwrap();
        assert_eq!(c.completion_count, 0);
        let ca = db.find_path("ca").unwrap().unwrap();
        assert_eq!(ca.completion_count, 0);
        assert_eq!(ca.parent, Some(c.id));
    }

    #[test]
    fn test_shared_prefixes_share_records() {
        let (mut db, _temp) = create_test_db();

        db.upsert_path(&make_word("cat"), 5).unwrap();
        db.upsert_path(&make_word("cats"), 2).unwrap();

        let cat = db.find_path("cat").unwrap().unwrap();
        let cats = db.find_path("cats").unwrap().unwrap();
        assert_eq!(cats.parent, Some(cat.id));
        assert_eq!(cat.completion_count, 5);
        assert_eq!(cats.completion_count, 2);
    }
}

mod read {
    use super::common::{create_test_db, make_word, sample_vocabulary};

    #[test]
    fn test_find_path_empty_prefix_is_root() {
        let (db, _temp) = create_test_db();

        let record = db.find_path("").unwrap().unwrap();
        assert!(record.parent.is_none());
    }

    #[test]
    fn test_find_path_miss_returns_none() {
        let (mut db, _temp) = create_test_db();
        db.upsert_path(&make_word("cat"), 1).unwrap();

        assert!(db.find_path("dog").unwrap().is_none());
        assert!(db.find_path("cats").unwrap().is_none());
    }

    #[test]
    fn test_missing_partition_reads_as_empty() {
        let (db, _temp) = create_test_db();

        // No shard table exists yet for any letter.
        let root = db.root().unwrap();
        assert!(db.enumerate_children(&root).unwrap().is_empty());
        assert!(db.find_child(root.id, 'z', "z").unwrap().is_none());
        assert!(db.find_path("zebra").unwrap().is_none());
    }

    #[test]
    fn test_characters_outside_the_alphabet_never_match() {
        let (mut db, _temp) = create_test_db();
        db.upsert_path(&make_word("aa"), 4).unwrap();

        // 'š' (U+0161) shares its low byte with 'a'; the single-byte key
        // encoding must not let it alias the stored letter.
        assert!(db.find_path("a\u{161}").unwrap().is_none());

        let root = db.root().unwrap();
        let a = db.find_child(root.id, 'a', "a").unwrap().unwrap();
        assert!(
            db.find_child(a.id, '\u{161}', "a\u{161}")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_find_child_routed_lookup() {
        let (mut db, _temp) = create_test_db();
        db.upsert_path(&make_word("cat"), 5).unwrap();

        let root = db.root().unwrap();
        let c = db.find_child(root.id, 'c', "c").unwrap().unwrap();
        assert_eq!(c.path, "c");
        let ca = db.find_child(c.id, 'a', "ca").unwrap().unwrap();
        assert_eq!(ca.path, "ca");
        assert!(db.find_child(c.id, 'o', "co").unwrap().is_none());
    }

    #[test]
    fn test_enumerate_children_of_root_probes_all_letters() {
        let (mut db, _temp) = create_test_db();
        db.load(&sample_vocabulary()).unwrap();
        db.upsert_path(&make_word("dog"), 1).unwrap();

        let root = db.root().unwrap();
        let mut letters: Vec<_> = db
            .enumerate_children(&root)
            .unwrap()
            .into_iter()
            .map(|record| record.path)
            .collect();
        letters.sort();
        assert_eq!(letters, vec!["c".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_enumerate_children_single_partition() {
        let (mut db, _temp) = create_test_db();
        db.load(&sample_vocabulary()).unwrap();

        let ca = db.find_path("ca").unwrap().unwrap();
        let mut paths: Vec<_> = db
            .enumerate_children(&ca)
            .unwrap()
            .into_iter()
            .map(|record| record.path)
            .collect();
        paths.sort();
        assert_eq!(paths, vec!["car".to_string(), "cat".to_string()]);
    }
}

mod load {
    use super::common::{create_test_db, make_word, sample_vocabulary};
    use crate::types::Vocabulary;

    #[test]
    fn test_load_writes_all_words() {
        let (mut db, _temp) = create_test_db();

        let stats = db.load(&sample_vocabulary()).unwrap();

        assert_eq!(stats.words, 3);
        assert_eq!(stats.occurrences, 8);
        assert_eq!(db.find_path("cat").unwrap().unwrap().completion_count, 5);
        assert_eq!(db.find_path("cats").unwrap().unwrap().completion_count, 2);
        assert_eq!(db.find_path("car").unwrap().unwrap().completion_count, 1);
        assert_eq!(db.total_count().unwrap(), 8);
    }

    #[test]
    fn test_load_is_equivalent_to_single_upserts() {
        let (mut bulk, _temp1) = create_test_db();
        bulk.load(&sample_vocabulary()).unwrap();

        let (mut single, _temp2) = create_test_db();
        single.upsert_path(&make_word("cat"), 5).unwrap();
        single.upsert_path(&make_word("cats"), 2).unwrap();
        single.upsert_path(&make_word("car"), 1).unwrap();

        for prefix in ["cat", "cats", "car", "ca", "c"] {
            assert_eq!(
                bulk.find_path(prefix).unwrap().unwrap().completion_count,
                single.find_path(prefix).unwrap().unwrap().completion_count,
            );
        }
        assert_eq!(bulk.total_count().unwrap(), single.total_count().unwrap());
    }

    #[test]
    fn test_repeated_loads_accumulate() {
        let (mut db, _temp) = create_test_db();

        db.load(&sample_vocabulary()).unwrap();
        let mut more = Vocabulary::new();
        more.add(make_word("cat"), 4);
        db.load(&more).unwrap();

        assert_eq!(db.find_path("cat").unwrap().unwrap().completion_count, 9);
        assert_eq!(db.total_count().unwrap(), 12);
    }

    #[test]
    fn test_load_empty_vocabulary() {
        let (mut db, _temp) = create_test_db();

        let stats = db.load(&Vocabulary::new()).unwrap();

        assert_eq!(stats.words, 0);
        assert_eq!(db.total_count().unwrap(), 0);
    }
}
