use rusqlite::Connection;
use ya::db::*;
use ya::error::YaError;
use ya::model::*;

fn setup() -> Connection {
    let conn = schema::test_connection();

    contact_repo::insert_contact(&conn, ContactId::new(1), Some("Doe"), Some("Jane")).unwrap();
    contact_repo::insert_phone(&conn, ContactId::new(1), "555-1").unwrap();
    contact_repo::insert_phone(&conn, ContactId::new(1), "555-2").unwrap();
    contact_repo::insert_email(&conn, ContactId::new(1), "jane@x.com").unwrap();
    contact_repo::insert_email(&conn, ContactId::new(1), "jd@work.com").unwrap();

    contact_repo::insert_contact(&conn, ContactId::new(7), Some("Smith"), Some("Ann")).unwrap();
    contact_repo::insert_email(&conn, ContactId::new(7), "ann@smith.org").unwrap();

    contact_repo::insert_contact(&conn, ContactId::new(8), Some("Smithson"), Some("Bo")).unwrap();

    contact_repo::insert_contact(&conn, ContactId::new(9), None, Some("Cher")).unwrap();

    conn
}

fn ids(rows: &[ContactRow]) -> Vec<i64> {
    let mut ids: Vec<i64> = rows.iter().map(|r| r.contact_id.value).collect();
    ids.dedup();
    ids
}

// ==========================================================================
// SCHEMA TESTS
// ==========================================================================

#[test]
fn initialize_is_idempotent() {
    let conn = schema::test_connection();
    schema::initialize(&conn).unwrap();
    schema::initialize(&conn).unwrap();
    assert!(schema::table_exists(&conn, "exclude_list").unwrap());
}

#[test]
fn verify_accepts_complete_address_book() {
    let conn = schema::test_connection();
    assert!(schema::verify(&conn).is_ok());
}

#[test]
fn verify_reports_missing_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE ZABCDRECORD (Z_PK INTEGER PRIMARY KEY, ZLASTNAME, ZFIRSTNAME);")
        .unwrap();

    match schema::verify(&conn) {
        Err(YaError::MissingTable { table }) => assert_eq!(table, "ZABCDPHONENUMBER"),
        other => panic!("expected MissingTable, got {:?}", other),
    }
}

#[test]
fn open_refuses_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.abcddb");

    let err = schema::open(&path).unwrap_err();
    assert!(matches!(err, YaError::DatabaseNotFound { .. }));
    assert!(!path.exists(), "opening must not create the database");
}

#[test]
fn open_rejects_file_that_is_not_a_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("AddressBook-v22.abcddb");
    std::fs::write(&path, "just some notes, not sqlite\n".repeat(20)).unwrap();

    match schema::open(&path) {
        Err(YaError::Connectivity { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Connectivity, got {:?}", other.map(|_| ())),
    }
    assert!(matches!(schema::connect(&path), Err(YaError::Connectivity { .. })));
}

#[test]
fn connect_works_with_legacy_exclude_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.abcddb");
    {
        let conn = Connection::open(&path).unwrap();
        schema::create_address_book_tables(&conn).unwrap();
        conn.execute_batch("CREATE TABLE exclude_list (uid data_type PRIMARY KEY);").unwrap();
    }

    let conn = schema::connect(&path).unwrap();
    assert!(exclude_repo::insert(&conn, ContactId::new(3)).unwrap());
    assert!(!exclude_repo::insert(&conn, ContactId::new(3)).unwrap());
    assert!(exclude_repo::contains(&conn, ContactId::new(3)).unwrap());
}

// ==========================================================================
// CONTACT REPO TESTS
// ==========================================================================

#[test]
fn find_rows_fans_out_phones_and_emails() {
    let conn = setup();
    let rows = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("Doe")), InclusionMode::IncludeKnown)
        .unwrap();

    // 2 phones x 2 emails
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.contact_id == ContactId::new(1)));
}

#[test]
fn find_rows_keeps_contacts_without_children() {
    let conn = setup();
    let rows = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("Smithson")), InclusionMode::IncludeKnown)
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].phone, None);
    assert_eq!(rows[0].email, None);
}

#[test]
fn find_rows_is_prefix_and_case_insensitive() {
    let conn = setup();
    let rows = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("smith")), InclusionMode::IncludeKnown)
        .unwrap();
    assert_eq!(ids(&rows), vec![7, 8]);
}

#[test]
fn find_rows_leading_wildcard_matches_anywhere() {
    let conn = setup();
    let rows = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("%son")), InclusionMode::IncludeKnown)
        .unwrap();
    assert_eq!(ids(&rows), vec![8]);
}

#[test]
fn find_rows_sorted_by_last_then_first_name() {
    let conn = setup();
    let rows = contact_repo::find_rows(&conn, &SearchSpec::everyone(), InclusionMode::IncludeKnown).unwrap();

    // NULL last names sort first in SQLite.
    assert_eq!(ids(&rows), vec![9, 1, 7, 8]);
}

#[test]
fn find_rows_folds_ascii_case_only() {
    let conn = setup();
    contact_repo::insert_contact(&conn, ContactId::new(20), Some("Ørsted"), Some("Hans")).unwrap();

    let exact = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("Ørsted")), InclusionMode::IncludeKnown)
        .unwrap();
    assert_eq!(ids(&exact), vec![20]);

    let folded = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("ørsted")), InclusionMode::IncludeKnown)
        .unwrap();
    assert!(folded.is_empty());
}

#[test]
fn find_rows_first_name_matching_is_opt_in() {
    let conn = setup();

    let last_only = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("cher")), InclusionMode::IncludeKnown)
        .unwrap();
    assert!(last_only.is_empty());

    let any = contact_repo::find_rows(&conn, &SearchSpec::any_name(Some("cher")), InclusionMode::IncludeKnown)
        .unwrap();
    assert_eq!(ids(&any), vec![9]);
}

#[test]
fn find_rows_hides_excluded_unless_included() {
    let conn = setup();
    exclude_repo::insert(&conn, ContactId::new(7)).unwrap();

    let hidden = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("Smith")), InclusionMode::ExcludeKnown)
        .unwrap();
    assert_eq!(ids(&hidden), vec![8]);

    let shown = contact_repo::find_rows(&conn, &SearchSpec::last_name(Some("Smith")), InclusionMode::IncludeKnown)
        .unwrap();
    assert_eq!(ids(&shown), vec![7, 8]);
}

#[test]
fn find_rows_by_id_ignores_exclude_list() {
    let conn = setup();
    exclude_repo::insert(&conn, ContactId::new(7)).unwrap();

    let rows = contact_repo::find_rows_by_id(&conn, ContactId::new(7)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email.as_deref(), Some("ann@smith.org"));
}

#[test]
fn find_rows_by_id_unknown_is_empty() {
    let conn = setup();
    assert!(contact_repo::find_rows_by_id(&conn, ContactId::new(404)).unwrap().is_empty());
}

#[test]
fn count_respects_inclusion_mode() {
    let conn = setup();
    exclude_repo::insert(&conn, ContactId::new(1)).unwrap();
    exclude_repo::insert(&conn, ContactId::new(404)).unwrap();

    assert_eq!(contact_repo::count(&conn, InclusionMode::IncludeKnown).unwrap(), 4);
    assert_eq!(contact_repo::count(&conn, InclusionMode::ExcludeKnown).unwrap(), 3);
}

// ==========================================================================
// EXCLUDE REPO TESTS
// ==========================================================================

#[test]
fn exclude_insert_is_idempotent() {
    let conn = setup();

    assert!(exclude_repo::insert(&conn, ContactId::new(7)).unwrap());
    assert_eq!(exclude_repo::count(&conn).unwrap(), 1);

    assert!(!exclude_repo::insert(&conn, ContactId::new(7)).unwrap());
    assert_eq!(exclude_repo::count(&conn).unwrap(), 1);
}

#[test]
fn exclude_contains() {
    let conn = setup();
    exclude_repo::insert(&conn, ContactId::new(8)).unwrap();

    assert!(exclude_repo::contains(&conn, ContactId::new(8)).unwrap());
    assert!(!exclude_repo::contains(&conn, ContactId::new(7)).unwrap());
}

#[test]
fn exclusions_persist_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.abcddb");
    {
        let conn = Connection::open(&path).unwrap();
        schema::create_address_book_tables(&conn).unwrap();
    }

    {
        let conn = schema::connect(&path).unwrap();
        conn.add(ContactId::new(42)).unwrap();
    }

    let conn = schema::connect(&path).unwrap();
    assert!(conn.contains(ContactId::new(42)).unwrap());
    assert_eq!(conn.count_excluded().unwrap(), 1);
}

// ==========================================================================
// LOCATE TESTS
// ==========================================================================

#[test]
fn locate_prefers_explicit_path() {
    let loc = locate::resolve(Some(std::path::Path::new("/tmp/custom.abcddb")), Some("paul")).unwrap();
    assert_eq!(loc.path, std::path::PathBuf::from("/tmp/custom.abcddb"));
    assert_eq!(loc.user, "paul");
}

#[test]
fn locate_finds_source_database_first() {
    let dir = tempfile::tempdir().unwrap();
    let b = dir.path().join("Sources").join("B-SOURCE");
    let a = dir.path().join("Sources").join("A-SOURCE");
    std::fs::create_dir_all(&a).unwrap();
    std::fs::create_dir_all(&b).unwrap();
    std::fs::write(b.join(locate::DATABASE_FILE), b"").unwrap();
    std::fs::write(a.join(locate::DATABASE_FILE), b"").unwrap();
    std::fs::write(dir.path().join(locate::DATABASE_FILE), b"").unwrap();

    let found = locate::find_in(dir.path()).unwrap();
    assert_eq!(found, a.join(locate::DATABASE_FILE));
}

#[test]
fn locate_falls_back_to_top_level_database() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("Sources").join("EMPTY")).unwrap();
    std::fs::write(dir.path().join(locate::DATABASE_FILE), b"").unwrap();

    let found = locate::find_in(dir.path()).unwrap();
    assert_eq!(found, dir.path().join(locate::DATABASE_FILE));
}

#[test]
fn locate_reports_missing_address_book() {
    let dir = tempfile::tempdir().unwrap();
    let err = locate::find_in(dir.path()).unwrap_err();
    assert!(matches!(err, YaError::NoAddressBook { .. }));
}
