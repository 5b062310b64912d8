use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bd, init_db_with_data, init_empty_db, setup_test_db, temp_dir};

#[test]
fn test_init_writes_config_and_schema() {
    let dir = temp_dir("init_config");
    let db = dir.join("business.sqlite");
    let db = db.to_string_lossy().to_string();
    let cfg_dir = dir.to_string_lossy().to_string();

    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["--db", &db, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conf = dir.join("bizdesk.conf");
    let content = fs::read_to_string(&conf).expect("config file written");
    assert!(content.contains("business.sqlite"));
    assert!(content.contains("currency_symbol"));

    // the database now comes from the config file
    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["list", "task"])
        .assert()
        .success()
        .stdout(contains("No task records"));

    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn test_config_migrate_adds_missing_sections() {
    let dir = temp_dir("config_migrate");
    let cfg_dir = dir.to_string_lossy().to_string();
    let conf = dir.join("bizdesk.conf");
    fs::write(&conf, "database: /tmp/old.sqlite\nlanguage: fr\n").unwrap();

    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("email")));

    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("language: fr"));
    assert!(content.contains("device:"));

    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("/tmp/old.sqlite"));
}

#[test]
fn test_db_info_and_integrity() {
    let db = setup_test_db("db_info");
    init_db_with_data(&db);

    bd().args(["--db", &db, "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Schema version"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_backup_compressed() {
    let db = setup_test_db("backup_zip");
    init_db_with_data(&db);
    let dir = temp_dir("backup_zip");
    let target = dir.join("copy.sqlite");

    bd().args([
        "--db",
        &db,
        "backup",
        "--file",
        &target.to_string_lossy(),
        "--compress",
        "--force",
    ])
    .assert()
    .success();

    let zip = dir.join("copy.zip");
    assert!(zip.exists());
    assert!(!target.exists());
    assert!(fs::read(&zip).unwrap().starts_with(b"PK"));
}

#[test]
fn test_notify_dry_run_prints_email() {
    let db = setup_test_db("notify_dry_run");
    init_db_with_data(&db);

    bd().args(["--db", &db, "notify", "client", "C001", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("sami.jaziri@example.com"))
        .stdout(contains("Payment reminder"))
        .stdout(contains("$25,000.00"));

    bd().args(["--db", &db, "notify", "project", "P404", "--dry-run"])
        .assert()
        .failure()
        .stderr(contains("No project found"));
}

#[test]
fn test_notify_without_credentials_fails() {
    let db = setup_test_db("notify_no_user");
    init_db_with_data(&db);

    bd().args(["--db", &db, "notify", "employee", "E001"])
        .assert()
        .failure()
        .stderr(contains("BIZDESK_EMAIL_USER_ID"));
}

#[test]
fn test_chat_without_key_fails() {
    let db = setup_test_db("chat_no_key");
    init_empty_db(&db);

    bd().args(["--db", &db, "chat", "Which invoices are late?"])
        .assert()
        .failure()
        .stderr(contains("BIZDESK_CHAT_API_KEY"));
}

#[test]
fn test_device_listen_completes_task() {
    let db = setup_test_db("device_listen");
    init_db_with_data(&db);
    let dir = temp_dir("device_listen");
    let port = dir.join("tty");
    fs::write(&port, "HELLO\r\n\r\nTASK_COMPLETED\r\n").unwrap();

    bd().args([
        "--db",
        &db,
        "device",
        "listen",
        "--port",
        &port.to_string_lossy(),
        "--task",
        "T003",
    ])
    .assert()
    .success()
    .stdout(contains("Ignoring unknown device message: HELLO"))
    .stdout(contains("Task T003 marked Completed"));

    bd().args(["--db", &db, "show", "task", "T003"])
        .assert()
        .success()
        .stdout(contains("Completed"));
}

#[test]
fn test_device_listen_without_token_leaves_task_open() {
    let db = setup_test_db("device_no_token");
    init_db_with_data(&db);
    let dir = temp_dir("device_no_token");
    let port = dir.join("tty");
    fs::write(&port, "PING\n").unwrap();

    bd().args([
        "--db",
        &db,
        "device",
        "listen",
        "--port",
        &port.to_string_lossy(),
        "--task",
        "T002",
    ])
    .assert()
    .success()
    .stdout(contains("before signalling completion"));

    bd().args(["--db", &db, "show", "task", "T002"])
        .assert()
        .success()
        .stdout(contains("In Progress"));
}

#[test]
fn test_device_notify_writes_line() {
    let dir = temp_dir("device_notify");
    let port = dir.join("tty");
    fs::write(&port, "").unwrap();

    bd().args(["device", "notify", "--port", &port.to_string_lossy()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&port).unwrap(), "NOTIFICATION\n");
}

#[test]
fn test_device_without_port_fails() {
    bd().args(["device", "notify"])
        .assert()
        .failure()
        .stderr(contains("no device port"));
}

#[test]
fn test_config_print_masks_credentials() {
    bd().env("BIZDESK_CHAT_API_KEY", "sk-test-SECRET")
        .env("BIZDESK_EMAIL_USER_ID", "emailjs-user-SECRET")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_key: '***'").or(contains("api_key: \"***\"")))
        .stdout(contains("SECRET").not());
}

#[test]
fn test_device_uses_configured_baud() {
    let dir = temp_dir("device_baud");
    let cfg_dir = dir.to_string_lossy().to_string();
    let port = dir.join("tty");
    fs::write(&port, "").unwrap();
    fs::write(dir.join("bizdesk.conf"), "device:\n  baud: 0\n").unwrap();

    bd().env("BIZDESK_CONFIG_DIR", &cfg_dir)
        .args(["device", "notify", "--port", &port.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("device.baud"));

    bd().args(["device", "notify", "--port", "/dev/bizdesk-no-such-tty"])
        .assert()
        .failure()
        .stderr(contains("9600 baud"));
}
