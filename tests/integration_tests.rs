use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_staff, rsh_data, setup_test_data};

#[test]
fn test_init_creates_empty_employees_file() {
    let data = setup_test_data("cli_init");

    rsh_data(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed (0 employee(s) on file)"));

    let content = fs::read_to_string(&data).expect("employees file");
    assert_eq!(content.trim(), "Name,Position,Salary,Hours,PayDue,Project");
}

#[test]
fn test_init_sample_seeds_demo_staff() {
    let data = setup_test_data("cli_init_sample");

    rsh_data(&data)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(contains("3 employee(s) on file"));

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Ivan"))
        .stdout(contains("Maria"))
        .stdout(contains("Alexei"))
        .stdout(contains("Mobile app"));
}

#[test]
fn test_add_hours_and_list_pay() {
    let data = setup_test_data("cli_add_list");
    init_with_staff(&data);

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Company website"))
        .stdout(contains("100 000.00"))
        .stdout(contains("25 000.00"))
        .stdout(contains("2 employee(s), 240 h"));
}

#[test]
fn test_hours_reports_new_total() {
    let data = setup_test_data("cli_hours_total");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["hours", "Bob", "4.5"])
        .assert()
        .success()
        .stdout(contains("Added 4.5 h to Bob. Total: 84.5 h"));
}

#[test]
fn test_hours_default_comes_from_config() {
    let data = setup_test_data("cli_hours_default");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["hours", "1"])
        .assert()
        .success()
        .stdout(contains("Total: 168 h"));
}

#[test]
fn test_negative_hours_fail_and_change_nothing() {
    let data = setup_test_data("cli_negative_hours");
    init_with_staff(&data);
    let before = fs::read_to_string(&data).unwrap();

    rsh_data(&data)
        .args(["hours", "Alice", "-1"])
        .assert()
        .failure()
        .stderr(contains("hours must be a positive number"));

    assert_eq!(fs::read_to_string(&data).unwrap(), before);
}

#[test]
fn test_add_rejects_non_positive_salary() {
    let data = setup_test_data("cli_bad_salary");
    rsh_data(&data).arg("init").assert().success();

    rsh_data(&data)
        .args(["add", "Zed", "--salary", "0"])
        .assert()
        .failure()
        .stderr(contains("salary must be a positive number"));

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No employees on file"));
}

#[test]
fn test_unknown_employee_is_an_error() {
    let data = setup_test_data("cli_unknown_employee");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["hours", "Carol", "8"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: Carol"));

    rsh_data(&data)
        .args(["hours", "7", "8"])
        .assert()
        .failure()
        .stderr(contains("Employee not found"));
}

#[test]
fn test_assign_project_describes_transition() {
    let data = setup_test_data("cli_assign");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["assign", "Bob", "Testing"])
        .assert()
        .success()
        .stdout(contains("Bob moved from project 'unassigned' to 'Testing'"));

    rsh_data(&data)
        .args(["assign", "Bob", "Moonshot"])
        .assert()
        .success()
        .stdout(contains("not in the configured project list"))
        .stdout(contains("from project 'Testing' to 'Moonshot'"));
}

#[test]
fn test_edit_updates_fields() {
    let data = setup_test_data("cli_edit");
    init_with_staff(&data);

    rsh_data(&data)
        .args([
            "edit",
            "Bob",
            "--name",
            "Robert",
            "--salary",
            "64000",
            "--project",
            "Testing",
        ])
        .assert()
        .success()
        .stdout(contains("Employee Bob updated"));

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Robert"))
        .stdout(contains("32 000.00"))
        .stdout(contains("Bob").not());
}

#[test]
fn test_invalid_edit_is_rejected_as_a_whole() {
    let data = setup_test_data("cli_edit_rollback");
    init_with_staff(&data);
    let before = fs::read_to_string(&data).unwrap();

    rsh_data(&data)
        .args(["edit", "1", "--position", "CTO", "--salary", "-100"])
        .assert()
        .failure()
        .stderr(contains("salary must be a positive number"));

    rsh_data(&data)
        .args(["edit", "1", "--hours", "-3"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&data).unwrap(), before);
}

#[test]
fn test_reset_single_and_all() {
    let data = setup_test_data("cli_reset");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["reset", "Alice"])
        .assert()
        .success()
        .stdout(contains("Pay period closed for Alice: 160 h cleared"));

    rsh_data(&data)
        .args(["reset", "--all"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Hours reset for 2 employee(s)"));

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2 employee(s), 0 h"));
}

#[test]
fn test_del_asks_for_confirmation() {
    let data = setup_test_data("cli_del_confirm");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["del", "Alice"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rsh_data(&data)
        .args(["del", "Alice"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Employee Alice has been deleted"));

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Alice").not());
}

#[test]
fn test_del_yes_skips_prompt() {
    let data = setup_test_data("cli_del_yes");
    init_with_staff(&data);

    rsh_data(&data).args(["del", "2", "--yes"]).assert().success();

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.contains("Alice"));
    assert!(!content.contains("Bob"));
}

#[test]
fn test_clear_removes_data_file() {
    let data = setup_test_data("cli_clear");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed"));

    assert!(!std::path::Path::new(&data).exists());

    rsh_data(&data)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Nothing to clear"));
}

#[test]
fn test_list_on_missing_file_is_empty() {
    let data = setup_test_data("cli_list_missing");

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No employees on file"));
}

#[test]
fn test_corrupt_file_soft_for_reads_loud_for_writes() {
    let data = setup_test_data("cli_corrupt");
    fs::write(&data, "Name,Position,Salary\nAlice,Dev,abc\n").unwrap();

    rsh_data(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Failed to read employee data"))
        .stdout(contains("No employees on file"));

    rsh_data(&data)
        .args(["add", "Bob"])
        .assert()
        .failure()
        .stderr(contains("Failed to read employee data"));

    // the corrupt file is left as it was
    assert_eq!(
        fs::read_to_string(&data).unwrap(),
        "Name,Position,Salary\nAlice,Dev,abc\n"
    );
}

#[test]
fn test_list_raw_shows_stored_pay_column() {
    let data = setup_test_data("cli_list_raw");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["list", "--raw"])
        .assert()
        .success()
        .stdout(contains("PayDue"))
        .stdout(contains("100000.0"))
        .stdout(contains("25000.0"));
}

#[test]
fn test_chart_shows_both_panels() {
    let data = setup_test_data("cli_chart");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["chart", "--width", "20"])
        .assert()
        .success()
        .stdout(contains("Pay due (RUB)"))
        .stdout(contains("Hours worked (h)"))
        .stdout(contains("100 000"))
        .stdout(contains("Alice"))
        .stdout(contains("80"));
}

#[test]
fn test_chart_without_data() {
    let data = setup_test_data("cli_chart_empty");

    rsh_data(&data)
        .arg("chart")
        .assert()
        .success()
        .stdout(contains("No data to display"));
}

#[test]
fn test_activity_log_records_operations() {
    let data = setup_test_data("cli_log");
    init_with_staff(&data);

    rsh_data(&data)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("(Alice)"))
        .stdout(contains("Added Alice (Developer)"))
        .stdout(contains("Added 80 h to Bob. Total: 80 h"));
}
