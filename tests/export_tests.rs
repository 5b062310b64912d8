use predicates::str::contains;
use std::fs;

mod common;
use common::{bd, init_db_with_data, init_empty_db, setup_test_db, temp_out};

#[test]
fn test_export_invoices_csv() {
    let db = setup_test_db("export_csv");
    init_db_with_data(&db);
    let out = temp_out("export_csv", "csv");

    bd().args(["--db", &db, "export", "invoice", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("ID,Number,Date,Amount,Status"));
    assert!(content.contains(r#"INV002,INV-2024-002,2024-02-20,"$2,450.50",Pending"#));
}

#[test]
fn test_export_json_keeps_header_order_and_search() {
    let db = setup_test_db("export_json");
    init_db_with_data(&db);
    let out = temp_out("export_json", "json");

    bd().args([
        "--db", &db, "export", "employee", "--format", "json", "--file", &out, "--search",
        "finance",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array of rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["ID"], "E002");
    assert!(content.find("\"ID\"").unwrap() < content.find("\"Salary\"").unwrap());
}

#[test]
fn test_export_french_pdf_and_xlsx() {
    let db = setup_test_db("export_binary");
    init_db_with_data(&db);

    let pdf = temp_out("export_binary", "pdf");
    bd().args(["--db", &db, "--lang", "fr", "export", "task", "--format", "pdf", "--file", &pdf])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));

    let xlsx = temp_out("export_binary", "xlsx");
    bd().args(["--db", &db, "export", "project", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    let bytes = fs::read(&xlsx).expect("read xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_nothing_when_empty() {
    let db = setup_test_db("export_empty");
    init_empty_db(&db);
    let out = temp_out("export_empty", "csv");

    bd().args(["--db", &db, "export", "client", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No client records to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db = setup_test_db("export_relative");
    init_db_with_data(&db);

    bd().args(["--db", &db, "export", "invoice", "--file", "relative/out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_overwrite_needs_force() {
    let db = setup_test_db("export_force");
    init_db_with_data(&db);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed file");

    // declined at the prompt
    bd().args(["--db", &db, "export", "invoice", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old content");

    bd().args(["--db", &db, "export", "invoice", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("INV-2024-001"));
}
