// Tests for recording distances to disk.

use point_distance::{record_distance, PointsInput, DATA_FILE};

fn input(x1: &str, y1: &str, x2: &str, y2: &str) -> PointsInput {
    PointsInput {
        x1: x1.into(),
        y1: y1.into(),
        x2: x2.into(),
        y2: y2.into(),
    }
}

#[tokio::test]
async fn creates_directory_and_writes_both_lines() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("dataPoints");

    let path = record_distance(&dir, &input("0", "0", "3", "4")).await.unwrap();

    assert_eq!(path, dir.join(DATA_FILE));
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "0, 0, 3, 4\nThe distance between your two points: (0,0), (3,4) is 5"
    );
}

#[tokio::test]
async fn rerun_replaces_previous_result() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("dataPoints");

    record_distance(&dir, &input("0", "0", "3", "4")).await.unwrap();
    let path = record_distance(&dir, &input("1", "1", "1", "2")).await.unwrap();

    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        text,
        "1, 1, 1, 2\nThe distance between your two points: (1,1), (1,2) is 1"
    );
}

#[tokio::test]
async fn non_numeric_input_written_as_nan() {
    let tmp = tempfile::tempdir().unwrap();
    let path = record_distance(tmp.path(), &input("x", "0", "3", "4"))
        .await
        .unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("x, 0, 3, 4\n"));
    assert!(text.ends_with(" is NaN"));
}

#[tokio::test]
async fn unwritable_directory_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("file");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = record_distance(&blocker.join("dataPoints"), &input("0", "0", "3", "4"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("dataPoints"));
}
