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

#[test]
fn test_version_flag() {
    let (temp_dir, _guard) = setup_test_env();
    get_board_cmd(&temp_dir).arg("--version").assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_column_suggests_closest() {
    let (temp_dir, _guard) = setup_test_env();
    get_board_cmd(&temp_dir).args(["add", "x"]).assert().success();

    get_board_cmd(&temp_dir).args(["delete", "Reveiw", "0"]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("Unknown column 'Reveiw'"))
        .stderr(predicate::str::contains("Did you mean 'Review'?"));
}

#[test]
fn test_index_out_of_range_changes_nothing() {
    let (temp_dir, _guard) = setup_test_env();
    get_board_cmd(&temp_dir).args(["add", "only"]).assert().success();
    let before = fs::read_to_string(temp_dir.path().join("stickers.json")).unwrap();

    get_board_cmd(&temp_dir).args(["delete", "queue", "3"]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No sticker at index 3 in column 'Queue' (column has 1)"));

    let after = fs::read_to_string(temp_dir.path().join("stickers.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_non_numeric_index_is_user_error() {
    let (temp_dir, _guard) = setup_test_env();
    get_board_cmd(&temp_dir).args(["move", "queue", "first", "right"]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid sticker index: 'first'"));
}

#[test]
fn test_invalid_direction_and_color() {
    let (temp_dir, _guard) = setup_test_env();
    get_board_cmd(&temp_dir).args(["add", "x"]).assert().success();

    get_board_cmd(&temp_dir).args(["move", "queue", "0", "up"]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid direction 'up'"));

    get_board_cmd(&temp_dir).args(["color", "queue", "0", "#12345"]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid color '#12345'"));
}

#[test]
fn test_blank_text_is_rejected() {
    let (temp_dir, _guard) = setup_test_env();
    get_board_cmd(&temp_dir).args(["add", "   "]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Sticker text cannot be empty"));
}

#[test]
fn test_command_abbreviations() {
    let (temp_dir, _guard) = setup_test_env();

    get_board_cmd(&temp_dir).args(["a", "abbreviated"]).assert()
        .success()
        .stdout(predicate::str::contains("Added sticker to Queue [0]: abbreviated"));
    get_board_cmd(&temp_dir).args(["tr", "q", "d", "0"]).assert()
        .success()
        .stdout(predicate::str::contains("Moved 'abbreviated' from Queue to Done"));
    get_board_cmd(&temp_dir).args(["de", "done", "0"]).assert().success();
}

#[test]
fn test_ambiguous_abbreviation() {
    let (temp_dir, _guard) = setup_test_env();
    get_board_cmd(&temp_dir).args(["l"]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Ambiguous command 'l'"))
        .stderr(predicate::str::contains("list"))
        .stderr(predicate::str::contains("left"));
}

#[test]
fn test_default_color_from_config() {
    let (temp_dir, _guard) = setup_test_env();
    let rc = temp_dir.path().join(".stickerboard").join("rc");
    let board_path = temp_dir.path().join("stickers.json");
    fs::write(&rc, format!("data.location={}\nsticker.color=#ffe08a\n", board_path.display())).unwrap();

    get_board_cmd(&temp_dir).args(["add", "tinted"]).assert().success();

    let board: serde_json::Value = serde_json::from_str(&fs::read_to_string(&board_path).unwrap()).unwrap();
    assert_eq!(board["Queue"][0]["bg_color"], "#ffe08a");
}
