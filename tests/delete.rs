use assert_cmd::Command;
use predicates::prelude::*;

fn listing_format(
    i: usize,
    name: &str,
    email: &str,
    phone: &str,
    status: &str,
    priority: &str,
) -> String {
    format!("{i:>3}. {name:<20} {email:^30} {phone:15} {status:<10} {priority:<10}")
}

#[test]
fn delete_with_confirmation_removes_the_contact() {
    // After deleting Ada, Grace moves up to position 1
    let script = "\
1\nAda Lovelace\nada@example.com\n07911123456\n\n\n\
1\nGrace Hopper\ngrace@example.com\n+12025550143\n\n\n\
4\n1\ny\n2\n6\n8\n";

    Command::cargo_bin("contact-desk")
        .unwrap()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"))
        .stdout(predicate::str::contains(listing_format(
            1,
            "Grace Hopper",
            "grace@example.com",
            "+12025550143",
            "pending",
            "normal",
        )))
        .stdout(predicate::str::contains("Total contacts: 1"));
}

#[test]
fn declining_the_confirmation_keeps_the_contact() {
    let script = "\
1\nAda Lovelace\nada@example.com\n07911123456\n\n\n\
4\n1\nn\n6\n8\n";

    Command::cargo_bin("contact-desk")
        .unwrap()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled"))
        .stdout(predicate::str::contains("Total contacts: 1"))
        .stdout(predicate::str::contains("Contact deleted successfully").not());
}

#[test]
fn assume_yes_flag_skips_the_confirmation() {
    let script = "\
1\nAda Lovelace\nada@example.com\n07911123456\n\n\n\
4\n1\n6\n8\n";

    Command::cargo_bin("contact-desk")
        .unwrap()
        .arg("--assume-yes")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"))
        .stdout(predicate::str::contains("Total contacts: 0"));
}

#[test]
fn assume_yes_env_var_skips_the_confirmation() {
    let script = "\
1\nAda Lovelace\nada@example.com\n07911123456\n\n\n\
4\n1\n6\n8\n";

    Command::cargo_bin("contact-desk")
        .unwrap()
        .env("CONTACT_DESK_ASSUME_YES", "true")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"))
        .stdout(predicate::str::contains("Total contacts: 0"));
}

#[test]
fn deleting_from_an_empty_store_prints_placeholder() {
    Command::cargo_bin("contact-desk")
        .unwrap()
        .write_stdin("4\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet"));
}
