mod common;
use common::setup_test_data;
use rstaffhours::errors::AppError;
use rstaffhours::models::Employee;
use rstaffhours::storage::{EmployeeStore, read_table};
use std::fs;

fn staff() -> Vec<Employee> {
    let mut a = Employee::new("Ivan", "Developer", 100_000.0).unwrap();
    a.add_hours(160.0).unwrap();
    a.assign_project("Company website");

    let mut b = Employee::new("Мария", "Designer, senior", 80_000.0).unwrap();
    b.add_hours(120.5).unwrap();

    let c = Employee::new("Alexei", "Tester", 70_000.0).unwrap();

    vec![a, b, c]
}

#[test]
fn test_save_then_load_round_trip() {
    let data = setup_test_data("storage_round_trip");
    let store = EmployeeStore::new(&data);
    let original = staff();

    store.save_all(&original).expect("save");
    let loaded = store.try_load_all().expect("load");

    assert_eq!(loaded.len(), original.len());
    for (a, b) in original.iter().zip(loaded.iter()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.position(), b.position());
        assert_eq!(a.salary(), b.salary());
        assert_eq!(a.hours_worked(), b.hours_worked());
        assert_eq!(a.project(), b.project());
        assert_eq!(a.calculate_pay(), b.calculate_pay());
    }
}

#[test]
fn test_round_trip_keeps_whitespace_and_csv_special_characters() {
    let data = setup_test_data("storage_round_trip_exact");
    let store = EmployeeStore::new(&data);

    let mut padded = Employee::new(" Ann ", " Dev", 90_000.0).unwrap();
    padded.assign_project(" Site ");
    padded.add_hours(12.25).unwrap();

    let mut quoted = Employee::new("Smith, \"Jr.\"", "Lead, \"QA\"", 75_000.0).unwrap();
    quoted.assign_project("Web, \"v2\"");

    let saved = vec![padded, quoted];
    store.save_all(&saved).expect("save");

    let back = store.try_load_all().expect("load");
    assert_eq!(back, saved);
}

#[test]
fn test_save_writes_header_and_pay_column() {
    let data = setup_test_data("storage_header");
    let store = EmployeeStore::new(&data);

    store.save_all(&staff()).unwrap();
    let content = fs::read_to_string(&data).unwrap();

    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Name,Position,Salary,Hours,PayDue,Project")
    );
    assert!(content.contains("Ivan,Developer,100000.0,160.0,100000.0,Company website"));
    assert!(content.contains("\"Designer, senior\""));
}

#[test]
fn test_save_overwrites_previous_content() {
    let data = setup_test_data("storage_overwrite");
    let store = EmployeeStore::new(&data);

    store.save_all(&staff()).unwrap();
    store.save_all(&staff()[..1]).unwrap();

    assert_eq!(store.try_load_all().unwrap().len(), 1);

    store.save_all(&[]).unwrap();
    assert!(store.exists());
    assert!(store.try_load_all().unwrap().is_empty());
}

#[test]
fn test_pay_column_is_ignored_on_load() {
    let data = setup_test_data("storage_pay_ignored");
    fs::write(
        &data,
        "Name,Position,Salary,Hours,PayDue,Project\nA,Dev,100000,160,not-a-number,Mobile app\n",
    )
    .unwrap();

    let loaded = EmployeeStore::new(&data).try_load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].calculate_pay(), 100_000.0);
    assert_eq!(loaded[0].project(), "Mobile app");
}

#[test]
fn test_missing_project_column_defaults_to_unassigned() {
    let data = setup_test_data("storage_no_project");
    fs::write(
        &data,
        "Name,Position,Salary,Hours,PayDue\nA,Dev,100000,10,6250\nB,QA,50000,0,0\n",
    )
    .unwrap();

    let loaded = EmployeeStore::new(&data).try_load_all().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.iter().all(|e| e.project() == "unassigned"));
    assert_eq!(loaded[0].hours_worked(), 10.0);
}

#[test]
fn test_empty_project_cell_defaults_to_unassigned() {
    let data = setup_test_data("storage_empty_project");
    fs::write(
        &data,
        "Name,Position,Salary,Hours,PayDue,Project\nA,Dev,100000,10,6250,\n",
    )
    .unwrap();

    let loaded = EmployeeStore::new(&data).try_load_all().unwrap();
    assert_eq!(loaded[0].project(), "unassigned");
}

#[test]
fn test_missing_file_loads_empty() {
    let data = setup_test_data("storage_missing_file");
    let store = EmployeeStore::new(&data);

    assert!(!store.exists());
    assert!(store.try_load_all().unwrap().is_empty());
    assert!(store.load_all().is_empty());
}

#[test]
fn test_malformed_file_fails_strict_and_soft_loads_empty() {
    let data = setup_test_data("storage_malformed");
    fs::write(
        &data,
        "Name,Position,Salary,Hours,PayDue,Project\nA,Dev,lots,10,0,x\n",
    )
    .unwrap();

    let store = EmployeeStore::new(&data);
    assert!(matches!(store.try_load_all(), Err(AppError::StorageRead(_))));
    assert!(store.load_all().is_empty());
}

#[test]
fn test_invalid_values_on_file_are_rejected() {
    let data = setup_test_data("storage_invalid_values");
    let store = EmployeeStore::new(&data);

    fs::write(&data, "Name,Position,Salary,Hours,PayDue\nA,Dev,0,10,0\n").unwrap();
    assert!(matches!(store.try_load_all(), Err(AppError::StorageRead(_))));

    fs::write(&data, "Name,Position,Salary,Hours,PayDue\nA,Dev,1000,-3,0\n").unwrap();
    assert!(matches!(store.try_load_all(), Err(AppError::StorageRead(_))));

    fs::write(&data, "Name,Salary\nA,1000\n").unwrap();
    assert!(matches!(store.try_load_all(), Err(AppError::StorageRead(_))));
    assert!(store.load_all().is_empty());
}

#[test]
fn test_save_creates_parent_directories() {
    let mut dir = std::env::temp_dir();
    dir.push("rstaffhours_nested_dir_test");
    fs::remove_dir_all(&dir).ok();

    let store = EmployeeStore::new(dir.join("deeper").join("employees.csv"));
    store.save_all(&staff()).unwrap();

    assert!(store.exists());
    assert_eq!(store.try_load_all().unwrap().len(), 3);
}

#[test]
fn test_save_into_unwritable_target_is_storage_write() {
    let mut dir = std::env::temp_dir();
    dir.push("rstaffhours_target_is_dir");
    fs::create_dir_all(&dir).unwrap();

    // the target path is an existing directory
    let store = EmployeeStore::new(&dir);
    assert!(matches!(
        store.save_all(&staff()),
        Err(AppError::StorageWrite(_))
    ));
}

#[test]
fn test_clear_removes_file() {
    let data = setup_test_data("storage_clear");
    let store = EmployeeStore::new(&data);

    assert!(!store.clear().unwrap());

    store.save_all(&staff()).unwrap();
    assert!(store.clear().unwrap());
    assert!(!store.exists());
}

#[test]
fn test_log_path_sits_next_to_data_file() {
    let store = EmployeeStore::new("/tmp/some/where/employees.csv");
    assert_eq!(
        store.log_path(),
        std::path::PathBuf::from("/tmp/some/where/employees.log")
    );
}

#[test]
fn test_read_table_drops_incomplete_rows() {
    let path = setup_test_data("read_table_incomplete");
    fs::write(&path, "a,b,c\n1,2,3\n4,,6\n7,8\n9,10,11\n , x, y\n").unwrap();

    let table = read_table(&path);

    assert_eq!(table.headers, vec!["a", "b", "c"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0], vec!["1", "2", "3"]);
    assert_eq!(table.rows[1], vec!["9", "10", "11"]);
    assert_eq!(table.column("b"), Some(1));
    assert_eq!(table.column("z"), None);
}

#[test]
fn test_read_table_missing_file_is_empty() {
    let path = setup_test_data("read_table_missing");

    let table = read_table(&path);
    assert!(table.is_empty());
    assert!(table.headers.is_empty());
}
