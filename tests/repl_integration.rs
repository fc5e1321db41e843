use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn addrbook(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.env("ADDRBOOK_HOME", home)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_prompt_session_persists_contacts() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Ann +380501111111 07.03.1990\nadd Bob +380672222222\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains(
            "Added <Ann> with phone <+380501111111>. Birthday: 07.03.1990",
        ))
        .stdout(predicate::str::contains("Good bye"));

    let saved = fs::read_to_string(temp_dir.path().join("contacts.json")).unwrap();
    assert!(saved.contains("\"contacts\""));
    assert!(saved.contains("+380672222222"));

    // A fresh process sees both contacts, in the order they were added.
    addrbook(temp_dir.path())
        .write_stdin("show all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ann : +380501111111 : 07.03.1990\nBob : +380672222222 : not indicated",
        ));
}

#[test]
fn test_show_all_pages() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin(
            "add A1 +380500000001\nadd A2 +380500000002\nadd A3 +380500000003\nshow all 2\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[A1 : +380500000001 : not indicated\nA2 : +380500000002 : not indicated] \
             [A3 : +380500000003 : not indicated]",
        ));
}

#[test]
fn test_input_mistakes_do_not_end_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Ann 12345\nadd Ann\nphone Nobody\ndance\nshow all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number is incorrect"))
        .stdout(predicate::str::contains("Give me a name and phone please"))
        .stdout(predicate::str::contains("There is no contact with that name"))
        .stdout(predicate::str::contains("Invalid command"))
        .stdout(predicate::str::contains("list of contacts is empty..."));

    assert!(!temp_dir.path().join("contacts.json").exists());
}

#[test]
fn test_run_single_command() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .args(["run", "add", "Ann", "+380501111111"])
        .assert()
        .success();

    addrbook(temp_dir.path())
        .args(["run", "phone", "Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann : +380501111111 : not indicated"));

    addrbook(temp_dir.path())
        .args(["run", "phone", "Bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is no contact with that name"));

    addrbook(temp_dir.path())
        .args(["run", "add", "Bob", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::diff("Number is incorrect\n"));
}

#[test]
fn test_file_override() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = temp_dir.path().join("elsewhere").join("book.json");

    addrbook(temp_dir.path())
        .arg("--file")
        .arg(&book)
        .args(["run", "add", "Ann", "+380501111111"])
        .assert()
        .success();

    assert!(book.exists());
    assert!(!temp_dir.path().join("contacts.json").exists());

    addrbook(temp_dir.path())
        .arg("--file")
        .arg(&book)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("book.json"));
}

#[test]
fn test_config_page_size_applies_to_show_all() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .args(["config", "page-size", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 1"));

    addrbook(temp_dir.path())
        .write_stdin("add A1 +380500000001\nadd A2 +380500000002\nshow all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[A1 : +380500000001 : not indicated] [A2 : +380500000002 : not indicated]",
        ));

    addrbook(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = contacts.json"))
        .stdout(predicate::str::contains("page-size = 1"));
}

#[test]
fn test_corrupt_book_fails_fast() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("contacts.json"), "not json").unwrap();

    addrbook(temp_dir.path())
        .write_stdin("show all\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_config_and_path_ignore_corrupt_book() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("contacts.json"), "not json").unwrap();

    addrbook(temp_dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.json"));

    addrbook(temp_dir.path())
        .args(["config", "data-file", "fresh.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to fresh.json"));

    // The book now lives in the fresh file, so commands work again.
    addrbook(temp_dir.path())
        .args(["run", "add", "Ann", "+380501111111"])
        .assert()
        .success();

    assert!(temp_dir.path().join("fresh.json").exists());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("contacts.json")).unwrap(),
        "not json"
    );
}

#[test]
fn test_input_mistakes_are_not_logged_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Ann 123\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number is incorrect"))
        .stderr(predicate::str::is_empty());
}
