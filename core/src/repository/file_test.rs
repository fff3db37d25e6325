use std::fs;

use tempfile::TempDir;

use crate::error::StoreError;
use crate::model::employee::Employee;
use crate::repository::{FileRecordRepository, RecordRepository};
use crate::service::record_service::RecordService;

fn setup() -> (TempDir, FileRecordRepository) {
    let dir = TempDir::new().unwrap();
    let repo = FileRecordRepository::new(dir.path().join("reports").join("wfh.csv")).unwrap();
    (dir, repo)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn weekdays() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

#[test]
fn test_new_creates_parent_but_not_file() {
    let (dir, repo) = setup();
    assert!(dir.path().join("reports").is_dir());
    assert!(!repo.path().exists());
}

#[test]
fn test_fetch_missing_file_is_not_found() {
    let (_dir, repo) = setup();
    assert!(matches!(repo.fetch(0), Err(StoreError::NotFound(_))));
    assert!(matches!(repo.fetch(3), Err(StoreError::NotFound(_))));
}

#[test]
fn test_fetch_empty_file_returns_nothing() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), "").unwrap();
    assert!(repo.fetch(0).unwrap().is_empty());
    assert!(repo.fetch(5).unwrap().is_empty());
}

#[test]
fn test_prepend_on_missing_file_starts_empty() {
    let (_dir, repo) = setup();
    repo.prepend(&lines(&["a", "b"])).unwrap();
    assert_eq!(fs::read_to_string(repo.path()).unwrap(), "a\nb\n");
}

#[test]
fn test_prepend_keeps_prior_content_after_new_lines() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), "old1\nold2\nold3\n").unwrap();

    repo.prepend(&lines(&["new1", "new2"])).unwrap();

    let all = repo.fetch(0).unwrap();
    assert_eq!(all, lines(&["new1", "new2", "old1", "old2", "old3"]));
    assert_eq!(all.len(), 2 + 3);
}

#[test]
fn test_prepend_terminates_unterminated_last_line() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), "old1\nold2").unwrap();

    repo.prepend(&lines(&["new"])).unwrap();

    assert_eq!(fs::read_to_string(repo.path()).unwrap(), "new\nold1\nold2\n");
}

#[test]
fn test_prepend_nothing_leaves_content() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), "old\n").unwrap();
    repo.prepend(&[]).unwrap();
    assert_eq!(fs::read_to_string(repo.path()).unwrap(), "old\n");
}

#[test]
fn test_prepend_leaves_no_temp_file() {
    let (dir, repo) = setup();
    repo.prepend(&lines(&["x"])).unwrap();
    let names: Vec<_> = fs::read_dir(dir.path().join("reports"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("wfh.csv")]);
}

#[test]
fn test_unreadable_target_is_io_error_and_untouched() {
    let (_dir, repo) = setup();
    // A directory at the record path cannot be read as text.
    fs::create_dir(repo.path()).unwrap();

    assert!(matches!(repo.prepend(&lines(&["x"])), Err(StoreError::Io { .. })));
    assert!(repo.path().is_dir());
}

#[test]
fn test_bounded_fetch() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), "l1\nl2\nl3\nl4\n").unwrap();

    assert_eq!(repo.fetch(1).unwrap(), lines(&["l1"]));
    assert_eq!(repo.fetch(3).unwrap(), lines(&["l1", "l2", "l3"]));
    assert_eq!(repo.fetch(4).unwrap().len(), 4);
    assert_eq!(repo.fetch(10).unwrap().len(), 4);
    assert_eq!(repo.fetch(0).unwrap().len(), 4);
}

#[test]
fn test_two_batches_end_to_end() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), "").unwrap();
    let service = RecordService::new(repo);
    let days = weekdays();

    let first = vec![
        Employee::new(1, "Ann", vec![8, 8, 8, 8, 8]),
        Employee::new(2, "Ben", vec![2, 9, 9, 12, 6]),
    ];
    service.write_records(&first, 1, &days).unwrap();
    assert_eq!(
        service.fetch(0).unwrap(),
        lines(&["week 1, 1, Ann, 8, 8, 8, 8, 8", "week 1, 2, Ben, 2, 9, 9, 12, 6"])
    );

    let second = vec![Employee::new(3, "Cy", vec![7, 7, 7, 7, 7])];
    service.write_records(&second, 2, &days).unwrap();

    assert_eq!(service.fetch(1).unwrap(), lines(&["week 2, 3, Cy, 7, 7, 7, 7, 7"]));
    let all = service.fetch(0).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], "week 2, 3, Cy, 7, 7, 7, 7, 7");
    assert_eq!(all[1], "week 1, 1, Ann, 8, 8, 8, 8, 8");

    let decoded = service.fetch_decoded(0, Some(days.len())).unwrap();
    assert!(decoded.corrupt.is_empty());
    assert_eq!(decoded.records[2].hours, vec![2, 9, 9, 12, 6]);
}

#[test]
fn test_prepend_carries_non_utf8_content_verbatim() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), b"week 1, 1, Jos\xe9, 8\n").unwrap();
    let service = RecordService::new(repo.clone());

    service
        .write_records(&[Employee::new(2, "Ann", vec![8])], 2, &lines(&["Monday"]))
        .unwrap();

    assert_eq!(
        fs::read(repo.path()).unwrap(),
        b"week 2, 2, Ann, 8\nweek 1, 1, Jos\xe9, 8\n".to_vec()
    );
    let all = repo.fetch(0).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1], "week 1, 1, Jos\u{FFFD}, 8");
}

#[test]
fn test_fetch_strips_crlf() {
    let (_dir, repo) = setup();
    fs::write(repo.path(), "l1\r\nl2\r\n").unwrap();
    assert_eq!(repo.fetch(0).unwrap(), lines(&["l1", "l2"]));
}

#[cfg(unix)]
#[test]
fn test_prepend_keeps_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, repo) = setup();
    fs::write(repo.path(), "old\n").unwrap();
    fs::set_permissions(repo.path(), fs::Permissions::from_mode(0o600)).unwrap();

    repo.prepend(&lines(&["new"])).unwrap();

    let mode = fs::metadata(repo.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(fs::read_to_string(repo.path()).unwrap(), "new\nold\n");
}
