use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bd, init_db_with_data, pos, setup_test_db, temp_dir};
use std::fs;

#[test]
fn test_search_is_case_insensitive_over_all_cells() {
    let db = setup_test_db("search_rows");
    init_db_with_data(&db);

    bd().args(["--db", &db, "list", "employee", "--search", "ENGINEERING"])
        .assert()
        .success()
        .stdout(contains("E001").and(contains("E003")))
        .stdout(contains("E002").not());

    bd().args(["--db", &db, "list", "invoice", "-s", "nothing-like-this"])
        .assert()
        .success()
        .stdout(contains("No invoice records"));
}

#[test]
fn test_sort_money_column_numerically() {
    let db = setup_test_db("sort_rows");
    init_db_with_data(&db);

    let out = bd()
        .args(["--db", &db, "list", "invoice", "--sort", "amount", "--desc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    // 2,450.50 > 1,500.00 > 780.00
    assert!(pos(&text, "INV002") < pos(&text, "INV001"));
    assert!(pos(&text, "INV001") < pos(&text, "INV003"));

    bd().args(["--db", &db, "list", "invoice", "--sort", "colour"])
        .assert()
        .failure()
        .stderr(contains("Unknown column 'colour'"));
}

#[test]
fn test_french_listing() {
    let db = setup_test_db("french_listing");
    init_db_with_data(&db);

    bd().args(["--db", &db, "--lang", "fr", "list", "invoice"])
        .assert()
        .success()
        .stdout(contains("Rapport des factures"))
        .stdout(contains("Numéro"))
        .stdout(contains("Payé"))
        .stdout(contains("En attente"));

    // French labels are accepted as input
    bd().args(["--db", &db, "edit", "invoice", "--id", "INV003", "--status", "Payé"])
        .assert()
        .success();

    bd().args(["--db", &db, "show", "invoice", "INV003"])
        .assert()
        .success()
        .stdout(contains("Paid"));
}

#[test]
fn test_stats_prints_charts() {
    let db = setup_test_db("stats_charts");
    init_db_with_data(&db);

    bd().args(["--db", &db, "stats", "invoice"])
        .assert()
        .success()
        .stdout(contains("Pending"))
        .stdout(contains("Overdue"))
        .stdout(contains("2024-02"));

    bd().args(["--db", &db, "stats", "material", "--search", "no-such-material"])
        .assert()
        .success()
        .stdout(contains("No material records to chart"));
}

#[test]
fn test_predictions_are_deterministic() {
    let db = setup_test_db("predictions");
    init_db_with_data(&db);

    bd().args(["--db", &db, "predict", "invoice"])
        .assert()
        .success()
        .stdout(contains("INV-2024-002"))
        .stdout(contains("$2,450.50"));

    bd().args(["--db", &db, "predict", "employee", "--today", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("E001"))
        .stdout(contains("Amira"));

    bd().args(["--db", &db, "predict", "client", "--today", "2024-12-01"])
        .assert()
        .success()
        .stdout(contains("C001"))
        .stdout(contains("C002").not());

    bd().args(["--db", &db, "predict", "client", "--today", "2024-12-01", "--top", "2"])
        .assert()
        .success()
        .stdout(contains("C001").and(contains("C002")));

    // T001 is completed and never proposed
    bd().args(["--db", &db, "predict", "task", "--today", "2024-05-05", "--top", "5"])
        .assert()
        .success()
        .stdout(contains("T002").and(contains("T003")))
        .stdout(contains("T001").not());
}

#[test]
fn test_predict_without_pending_invoice() {
    let db = setup_test_db("no_pending");
    init_db_with_data(&db);

    bd().args(["--db", &db, "edit", "invoice", "--id", "INV002", "--status", "Paid"])
        .assert()
        .success();

    bd().args(["--db", &db, "predict", "invoice"])
        .assert()
        .success()
        .stdout(contains("No pending invoices"));
}

#[test]
fn test_word_currency_symbol_sorts_and_charts_numerically() {
    let db = setup_test_db("word_currency");
    init_db_with_data(&db);
    let dir = temp_dir("word_currency");
    let cfg_dir = dir.to_string_lossy().to_string();
    fs::write(
        dir.join("bizdesk.conf"),
        format!("database: {}\ncurrency_symbol: \"DT \"\n", db),
    )
    .unwrap();

    let out = bd()
        .env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["list", "invoice", "--sort", "amount", "--desc"])
        .assert()
        .success()
        .stdout(contains("DT 2,450.50"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    // "DT 780.00" would come first in text order
    assert!(pos(&text, "INV002") < pos(&text, "INV001"));
    assert!(pos(&text, "INV001") < pos(&text, "INV003"));

    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["stats", "employee"])
        .assert()
        .success()
        .stdout(contains("DT 6,800.00"))
        .stdout(contains("DT 2,600.00"));
}
