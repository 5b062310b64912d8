use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bd, init_db_with_data, init_empty_db, setup_test_db};

fn add_invoice(db: &str, id: &str, number: &str, amount: &str, status: &str) {
    bd().args([
        "--db", db, "add", "invoice", "--id", id, "--number", number, "--date", "2024-03-01",
        "--amount", amount, "--status", status,
    ])
    .assert()
    .success();
}

#[test]
fn test_invoice_add_list_edit_delete() {
    let db = setup_test_db("invoice_crud");
    init_empty_db(&db);

    bd().args([
        "--db", &db, "add", "invoice", "--id", "001", "--number", "INV-2024-001", "--date",
        "2024-03-01", "--amount", "$25,000", "--status", "pending",
    ])
    .assert()
    .success()
    .stdout(contains("Added invoice '001'"));

    bd().args(["--db", &db, "list", "invoice"])
        .assert()
        .success()
        .stdout(contains("INV-2024-001"))
        .stdout(contains("$25,000.00"))
        .stdout(contains("Pending"));

    // only the status changes
    bd().args(["--db", &db, "edit", "invoice", "--id", "001", "--status", "Paid"])
        .assert()
        .success();

    bd().args(["--db", &db, "show", "invoice", "001"])
        .assert()
        .success()
        .stdout(contains("Paid"))
        .stdout(contains("$25,000.00"))
        .stdout(contains("2024-03-01"));

    bd().args(["--db", &db, "del", "invoice", "001", "--yes"])
        .assert()
        .success();

    bd().args(["--db", &db, "list", "invoice"])
        .assert()
        .success()
        .stdout(contains("No invoice records"));
}

#[test]
fn test_duplicate_id_is_refused() {
    let db = setup_test_db("duplicate_id");
    init_empty_db(&db);
    add_invoice(&db, "001", "INV-2024-001", "100", "Paid");

    bd().args([
        "--db", &db, "add", "invoice", "--id", "001", "--number", "INV-2024-002", "--date",
        "2024-03-02", "--amount", "200", "--status", "Paid",
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));
}

#[test]
fn test_invalid_invoice_fields() {
    let db = setup_test_db("invalid_invoice");
    init_empty_db(&db);

    bd().args([
        "--db", &db, "add", "invoice", "--id", "002", "--number", "INV-24-1", "--date",
        "2024-03-01", "--amount", "10", "--status", "Paid",
    ])
    .assert()
    .failure()
    .stderr(contains("INV-YYYY-NNN"));

    bd().args([
        "--db", &db, "add", "invoice", "--id", "002", "--number", "INV-2024-002", "--date",
        "01/03/2024", "--amount", "10", "--status", "Paid",
    ])
    .assert()
    .failure()
    .stderr(contains("YYYY-MM-DD"));

    bd().args([
        "--db", &db, "add", "invoice", "--id", "002", "--number", "INV-2024-002", "--date",
        "2024-03-01", "--amount", "10", "--status", "lost",
    ])
    .assert()
    .failure()
    .stderr(contains("Paid, Pending, Overdue"));

    bd().args([
        "--db", &db, "add", "invoice", "--id", "002", "--number", "INV-2024-002", "--date",
        "2024-03-01", "--status", "Paid",
    ])
    .assert()
    .failure()
    .stderr(contains("--amount"));
}

#[test]
fn test_client_and_task_id_patterns() {
    let db = setup_test_db("id_patterns");
    init_empty_db(&db);

    bd().args([
        "--db", &db, "add", "client", "--id", "C01", "--last-name", "Jaziri", "--first-name",
        "Sami", "--phone", "22333444", "--email", "sami@example.com", "--project", "Villa",
        "--invoice-amount", "1000", "--deadline", "2024-12-01",
    ])
    .assert()
    .failure()
    .stderr(contains("C followed by 3 digits"));

    bd().args([
        "--db", &db, "add", "client", "--id", "C001", "--last-name", "Jaziri", "--first-name",
        "Sami", "--phone", "22333444", "--email", "sami@example.com", "--project", "Villa",
        "--invoice-amount", "1000", "--deadline", "2024-12-01",
    ])
    .assert()
    .success();

    bd().args([
        "--db", &db, "add", "task", "--id", "T1", "--name", "Paint", "--status", "To Do",
        "--priority", "Low", "--start-date", "2024-05-01", "--end-date", "2024-05-02",
        "--assigned-to", "Karim",
    ])
    .assert()
    .failure()
    .stderr(contains("T followed by 3 digits"));

    bd().args([
        "--db", &db, "add", "task", "--id", "T010", "--name", "Paint", "--status", "To Do",
        "--priority", "Low", "--start-date", "2024-05-03", "--end-date", "2024-05-02",
        "--assigned-to", "Karim",
    ])
    .assert()
    .failure()
    .stderr(contains("before start date"));
}

#[test]
fn test_employee_email_must_be_unique() {
    let db = setup_test_db("employee_email");
    init_db_with_data(&db);

    bd().args([
        "--db", &db, "add", "employee", "--id", "E010", "--first-name", "Nour", "--last-name",
        "Karoui", "--position", "Driver", "--department", "Logistics", "--email",
        "lina.haddad@example.com", "--salary", "1800", "--hire-date", "2023-01-02",
    ])
    .assert()
    .failure()
    .stderr(contains("already used"));

    // keeping one's own email on edit is fine
    bd().args([
        "--db", &db, "edit", "employee", "--id", "E003", "--email", "lina.haddad@example.com",
        "--salary", "3900",
    ])
    .assert()
    .success();
}

#[test]
fn test_edit_and_delete_unknown_record() {
    let db = setup_test_db("unknown_record");
    init_empty_db(&db);

    bd().args(["--db", &db, "edit", "material", "--id", "M404", "--stock", "3"])
        .assert()
        .failure()
        .stderr(contains("No material found with id 'M404'"));

    bd().args(["--db", &db, "del", "project", "P404", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No project found"));
}

#[test]
fn test_material_with_image_and_stock() {
    let db = setup_test_db("material_image");
    init_empty_db(&db);

    bd().args([
        "--db", &db, "add", "material", "--id", "M010", "--name", "Gravel", "--category",
        "Aggregates", "--supplier", "Quarry", "--unit-cost", "4.20", "--unit-type", "m3",
        "--stock", "75", "--image", "/tmp/gravel.txt",
    ])
    .assert()
    .failure()
    .stderr(contains("png, jpg"));

    bd().args([
        "--db", &db, "add", "material", "--id", "M010", "--name", "Gravel", "--category",
        "Aggregates", "--supplier", "Quarry", "--unit-cost", "4.20", "--unit-type", "m3",
        "--stock", "75", "--image", "/tmp/gravel.png",
    ])
    .assert()
    .success();

    bd().args(["--db", &db, "show", "material", "M010"])
        .assert()
        .success()
        .stdout(contains("Gravel"))
        .stdout(contains("75"))
        .stdout(contains("gravel.png"));
}

#[test]
fn test_actions_are_audited() {
    let db = setup_test_db("audit_trail");
    init_empty_db(&db);
    add_invoice(&db, "A-1", "INV-2024-010", "50", "Pending");

    bd().args(["--db", &db, "del", "invoice", "A-1", "-y"])
        .assert()
        .success();

    bd().args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add (invoice A-1)").and(contains("del (invoice A-1)")))
        .stdout(contains("init"));
}

#[test]
fn test_show_includes_timestamps_where_kept() {
    let db = setup_test_db("show_timestamps");
    init_db_with_data(&db);

    bd().args(["--db", &db, "show", "task", "T002"])
        .assert()
        .success()
        .stdout(contains("Created"))
        .stdout(contains("Updated"));

    bd().args(["--db", &db, "--lang", "fr", "show", "client", "C001"])
        .assert()
        .success()
        .stdout(contains("Créé le"));

    // invoices have no timestamp columns
    bd().args(["--db", &db, "show", "invoice", "INV001"])
        .assert()
        .success()
        .stdout(contains("Created").not());
}
