use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use std::fs;
mod test_env;

fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    let board_path = temp_dir.path().join("stickers.json");
    let config_dir = temp_dir.path().join(".stickerboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), format!("data.location={}\n", board_path.display())).unwrap();
    (temp_dir, guard)
}

fn get_board_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stickerboard").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn read_board(temp_dir: &TempDir) -> serde_json::Value {
    let contents = fs::read_to_string(temp_dir.path().join("stickers.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_add_appends_to_queue_and_persists() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["add", "Write", "release", "notes"]).assert()
        .success()
        .stdout(predicate::str::contains("Added sticker to Queue [0]: Write release notes"));
    get_board_cmd(&temp_dir).args(["add", "Fix login"]).assert()
        .success()
        .stdout(predicate::str::contains("Added sticker to Queue [1]: Fix login"));

    let board = read_board(&temp_dir);
    let queue = board["Queue"].as_array().unwrap();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0]["text"], "Write release notes");
    assert_eq!(queue[0]["bg_color"], "gray75");
    assert_eq!(queue[0]["state"], "Queue");
    assert_eq!(queue[1]["text"], "Fix login");
}

#[test]
fn test_add_to_column_with_color() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["add", "--column", "review", "--color", "#ffcc00", "Check PR"]).assert()
        .success()
        .stdout(predicate::str::contains("Added sticker to Review [0]: Check PR"));

    let board = read_board(&temp_dir);
    assert_eq!(board["Review"][0]["bg_color"], "#ffcc00");
    assert_eq!(board["Review"][0]["state"], "Review");
}

#[test]
fn test_file_has_all_columns_in_order() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["list"]).assert().success();

    let contents = fs::read_to_string(temp_dir.path().join("stickers.json")).unwrap();
    assert_eq!(
        contents,
        "{\n    \"Queue\": [],\n    \"In Progress\": [],\n    \"Review\": [],\n    \"Done\": []\n}"
    );
}

#[test]
fn test_list_shows_columns_and_stickers() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["list"]).assert()
        .success()
        .stdout(predicate::str::contains("Queue (0)"))
        .stdout(predicate::str::contains("In Progress (0)"))
        .stdout(predicate::str::contains("(no stickers)"));

    get_board_cmd(&temp_dir).args(["add", "Buy milk"]).assert().success();
    get_board_cmd(&temp_dir).args(["board"]).assert()
        .success()
        .stdout(predicate::str::contains("Queue (1)"))
        .stdout(predicate::str::contains("0: Buy milk"));
}

#[test]
fn test_move_walks_the_pipeline_and_saturates() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["add", "Ship it"]).assert().success();

    get_board_cmd(&temp_dir).args(["move", "queue", "0", "left"]).assert()
        .success()
        .stdout(predicate::str::contains("'Ship it' is already in Queue; cannot move left"));
    assert_eq!(read_board(&temp_dir)["Queue"].as_array().unwrap().len(), 1);

    get_board_cmd(&temp_dir).args(["move", "queue", "0", "right"]).assert()
        .success()
        .stdout(predicate::str::contains("Moved 'Ship it' from Queue to In Progress"));
    get_board_cmd(&temp_dir).args(["right", "in-progress", "0"]).assert().success();
    get_board_cmd(&temp_dir).args(["right", "review", "0"]).assert()
        .success()
        .stdout(predicate::str::contains("Moved 'Ship it' from Review to Done"));

    get_board_cmd(&temp_dir).args(["right", "done", "0"]).assert()
        .success()
        .stdout(predicate::str::contains("already in Done"));

    let board = read_board(&temp_dir);
    assert_eq!(board["Done"][0]["text"], "Ship it");
    assert_eq!(board["Done"][0]["state"], "Done");
    assert!(board["Queue"].as_array().unwrap().is_empty());
}

#[test]
fn test_moved_sticker_lands_at_tail() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["add", "--column", "wip", "Existing"]).assert().success();
    get_board_cmd(&temp_dir).args(["add", "First"]).assert().success();
    get_board_cmd(&temp_dir).args(["add", "Second"]).assert().success();

    get_board_cmd(&temp_dir).args(["move", "queue", "0", "r"]).assert().success();

    let board = read_board(&temp_dir);
    assert_eq!(board["In Progress"][0]["text"], "Existing");
    assert_eq!(board["In Progress"][1]["text"], "First");
    assert_eq!(board["Queue"][0]["text"], "Second");
}

#[test]
fn test_transfer_between_any_columns() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["add", "--column", "done", "Reopened"]).assert().success();
    get_board_cmd(&temp_dir).args(["transfer", "done", "queue", "0"]).assert()
        .success()
        .stdout(predicate::str::contains("Moved 'Reopened' from Done to Queue"));

    get_board_cmd(&temp_dir).args(["transfer", "queue", "queue", "0"]).assert()
        .success()
        .stdout(predicate::str::contains("Sticker is already in Queue"));

    let board = read_board(&temp_dir);
    assert_eq!(board["Queue"][0]["text"], "Reopened");
    assert_eq!(board["Queue"][0]["state"], "Queue");
    assert!(board["Done"].as_array().unwrap().is_empty());
}

#[test]
fn test_delete_shifts_later_stickers() {
    let (temp_dir, _guard) = setup_test_env();

    for text in ["a", "b", "c"] {
        get_board_cmd(&temp_dir).args(["add", text]).assert().success();
    }
    get_board_cmd(&temp_dir).args(["delete", "queue", "1"]).assert()
        .success()
        .stdout(predicate::str::contains("Deleted sticker Queue [1]: b"));

    let board = read_board(&temp_dir);
    let texts: Vec<&str> = board["Queue"].as_array().unwrap().iter()
        .map(|s| s["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["a", "c"]);
}

#[test]
fn test_color_changes_background() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["add", "Paint me"]).assert().success();
    get_board_cmd(&temp_dir).args(["color", "queue", "0", "gray40"]).assert()
        .success()
        .stdout(predicate::str::contains("Recolored Queue [0] to gray40"));

    assert_eq!(read_board(&temp_dir)["Queue"][0]["bg_color"], "gray40");
}

#[test]
fn test_list_json_matches_file() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["add", "One"]).assert().success();
    let output = get_board_cmd(&temp_dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let contents = fs::read_to_string(temp_dir.path().join("stickers.json")).unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), contents);
}

#[test]
fn test_path_prints_data_location() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["path"]).assert()
        .success()
        .stdout(predicate::str::contains("stickers.json"));
}
