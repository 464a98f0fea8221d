use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{init_db, setup_test_db, sl};

const HEADER: &str =
    "Date,Employer,Site,Postal Code,Start Time,End Time,Hours in Decimal,Hourly Rate,Total,Status";

fn write_csv(name: &str, rows: &[String]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftledger.csv", name));
    let p = path.to_string_lossy().to_string();
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&p, content).expect("write csv fixture");
    p
}

fn open_db(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}

#[test]
fn test_import_creates_shifts_employers_and_sites() {
    let db_path = setup_test_db("import_basic");
    init_db(&db_path);

    let csv = write_csv(
        "import_basic",
        &[
            "1/5/2024,Acme Ltd,Warehouse A,AB1 2CD,09:00,17:00,7.5,12.50,£93.75,".to_string(),
            "1/6/2024,Northline,Depot,,08:00,14:00,6,14.00,£84.00,".to_string(),
        ],
    );

    sl().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .success()
        .stdout(contains("2 shifts"))
        .stdout(contains("2 employers"))
        .stdout(contains("2 sites"));

    let conn = open_db(&db_path);
    let shifts: i64 = conn
        .query_row("SELECT COUNT(*) FROM shifts", [], |r| r.get(0))
        .expect("count shifts");
    assert_eq!(shifts, 2);

    // Dates are normalized from M/D/YYYY to ISO on the way in.
    let date: String = conn
        .query_row(
            "SELECT date FROM shifts ORDER BY id LIMIT 1",
            [],
            |r| r.get(0),
        )
        .expect("load date");
    assert_eq!(date, "2024-01-05");
}

#[test]
fn test_import_deduplicates_employers_case_insensitively() {
    let db_path = setup_test_db("import_dedupe");
    init_db(&db_path);

    let csv = write_csv(
        "import_dedupe",
        &[
            "1/5/2024,Acme Ltd,Depot,,09:00,17:00,8,10,£80,".to_string(),
            "1/6/2024,ACME LTD,Depot,,09:00,17:00,8,10,£80,".to_string(),
            "1/7/2024,  acme ltd ,Depot,,09:00,17:00,8,10,£80,".to_string(),
        ],
    );

    sl().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .success()
        .stdout(contains("3 shifts"))
        .stdout(contains("1 employers"))
        .stdout(contains("1 sites"));

    let conn = open_db(&db_path);
    let employers: i64 = conn
        .query_row("SELECT COUNT(*) FROM employers", [], |r| r.get(0))
        .expect("count employers");
    assert_eq!(employers, 1);
}

#[test]
fn test_import_reuses_existing_records() {
    let db_path = setup_test_db("import_reuse");
    init_db(&db_path);

    // Pre-existing employer and site, different casing in the file.
    common::add_shift(&db_path, "2025-09-01", "Acme Ltd", "Depot", "8", "10");

    let csv = write_csv(
        "import_reuse",
        &["1/5/2024,ACME LTD,depot,,09:00,17:00,8,10,£80,".to_string()],
    );

    sl().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .success()
        .stdout(contains("1 shifts"))
        .stdout(contains("0 employers"))
        .stdout(contains("0 sites"));
}

#[test]
fn test_import_derives_status_from_date() {
    let db_path = setup_test_db("import_status");
    init_db(&db_path);

    let today = chrono::Local::now()
        .date_naive()
        .format("%-m/%-d/%Y")
        .to_string();

    let csv = write_csv(
        "import_status",
        &[
            format!("{},Acme Ltd,Depot,,09:00,17:00,8,10,£80,", today),
            "12/31/2099,Acme Ltd,Depot,,09:00,17:00,8,10,£80,".to_string(),
            "1/5/2024,Acme Ltd,Depot,,09:00,17:00,8,10,£80,".to_string(),
            "1/6/2024,Acme Ltd,Depot,,09:00,17:00,8,10,£80,Cancelled".to_string(),
        ],
    );

    sl().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .success();

    let conn = open_db(&db_path);
    let status_for = |date: &str| -> String {
        conn.query_row(
            "SELECT status FROM shifts WHERE date = ?1",
            [date],
            |r| r.get(0),
        )
        .expect("load status")
    };

    let today_iso = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(status_for(&today_iso), "on site");
    assert_eq!(status_for("2099-12-31"), "pending");
    assert_eq!(status_for("2024-01-05"), "completed");
    assert_eq!(status_for("2024-01-06"), "cancelled");
}

#[test]
fn test_import_skips_rows_missing_mandatory_fields() {
    let db_path = setup_test_db("import_skips");
    init_db(&db_path);

    let csv = write_csv(
        "import_skips",
        &[
            "1/5/2024,Acme Ltd,Depot,,09:00,17:00,8,10,£80,".to_string(),
            ",Acme Ltd,Depot,,09:00,17:00,8,10,£80,".to_string(),
            "1/7/2024,,Depot,,09:00,17:00,8,10,£80,".to_string(),
        ],
    );

    sl().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .success()
        .stdout(contains("1 shifts"))
        .stdout(contains("2 rows skipped"));
}

#[test]
fn test_import_strips_currency_and_thousands_separators() {
    let db_path = setup_test_db("import_currency");
    init_db(&db_path);

    let csv = write_csv(
        "import_currency",
        &["1/5/2024,Acme Ltd,Depot,,09:00,17:00,100,12.35,\"£1,234.50\",".to_string()],
    );

    sl().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .success();

    let conn = open_db(&db_path);
    let total: f64 = conn
        .query_row("SELECT total_earnings FROM shifts WHERE id = 1", [], |r| {
            r.get(0)
        })
        .expect("load total");
    assert!((total - 1234.50).abs() < 1e-9);
}

#[test]
fn test_import_missing_file_fails() {
    let db_path = setup_test_db("import_missing_file");
    init_db(&db_path);

    sl().args(["--db", &db_path, "import", "--file", "/no/such/file.csv"])
        .assert()
        .failure()
        .stderr(contains("cannot open"));
}

#[test]
fn test_import_only_unusable_rows_imports_nothing() {
    let db_path = setup_test_db("import_nothing");
    init_db(&db_path);

    let csv = write_csv(
        "import_nothing",
        &[",,,,,,,,,".to_string(), ",Acme,,,,,,,,".to_string()],
    );

    sl().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .success()
        .stdout(contains("Nothing to import"));

    let conn = open_db(&db_path);
    let shifts: i64 = conn
        .query_row("SELECT COUNT(*) FROM shifts", [], |r| r.get(0))
        .expect("count shifts");
    assert_eq!(shifts, 0);
}

#[test]
fn test_failed_commit_leaves_no_partial_records() {
    use shiftledger::core::import::{ImportBatch, RecordRef, StagedEmployer, StagedShift};
    use shiftledger::db::queries::commit_import_batch;
    use shiftledger::models::status::ShiftStatus;

    let db_path = setup_test_db("import_atomic");
    init_db(&db_path);

    // A shift referencing a staged site that was never staged makes the
    // commit fail after the employer insert.
    let batch = ImportBatch {
        employers: vec![StagedEmployer {
            name: "Acme Ltd".into(),
        }],
        sites: vec![],
        shifts: vec![StagedShift {
            date: "2024-01-05".into(),
            start_time: "09:00".into(),
            end_time: "17:00".into(),
            hours: 8.0,
            hourly_rate: 10.0,
            total_earnings: 80.0,
            status: ShiftStatus::Completed,
            employer: RecordRef::Staged(0),
            site: RecordRef::Staged(99),
        }],
        skipped: 0,
    };

    let mut conn = open_db(&db_path);
    assert!(commit_import_batch(&mut conn, "default", &batch).is_err());

    let employers: i64 = conn
        .query_row("SELECT COUNT(*) FROM employers", [], |r| r.get(0))
        .expect("count employers");
    assert_eq!(employers, 0);
}
