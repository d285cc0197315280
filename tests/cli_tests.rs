use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Builds a `locale-helper` command bound to a private preference file and a
/// pinned system locale, so the host environment never leaks in.
fn helper(prefs: &Path) -> Command {
    let mut cmd = Command::cargo_bin("locale-helper").unwrap();
    cmd.arg("--prefs")
        .arg(prefs)
        .arg("--system-locale")
        .arg("en_US")
        .env("NO_COLOR", "1")
        .env_remove("LOCALE_HELPER_LOG");
    cmd
}

/// `set` stores the code and a later `get`, in a new process, reports it.
///
/// `set` 保存代码，之后在新进程中执行 `get` 会报告它。
#[test]
fn test_set_then_get() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs)
        .args(["--lang", "en", "set", "it_IT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language set to it_IT."));

    helper(&prefs)
        .args(["--lang", "en", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("it_IT"))
        .stdout(predicate::str::contains("from preference"));
}

/// Without `--lang` the confirmation comes out in the language just chosen.
///
/// 没有 `--lang` 时，确认消息使用刚选择的语言。
#[test]
fn test_messages_follow_chosen_language() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs)
        .args(["set", "it_IT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lingua impostata su it_IT."));
}

#[test]
fn test_reset_restores_system_default() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs).args(["set", "fr_FR"]).assert().success();
    helper(&prefs)
        .args(["--lang", "en", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language reset to system default en_US."));

    helper(&prefs)
        .args(["--lang", "en", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en_US (system default)"));
}

#[test]
fn test_set_without_code_clears_preference() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs).args(["set", "de_DE"]).assert().success();
    helper(&prefs)
        .args(["--lang", "en", "set"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using system default en_US"));

    let content = std::fs::read_to_string(&prefs).unwrap();
    assert!(!content.contains("settings_language"));
}

#[test]
fn test_string_resolves_under_requested_locale() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs)
        .args(["string", "it_IT", "add_note"])
        .assert()
        .success()
        .stdout("Aggiungi nota\n");

    helper(&prefs)
        .args(["string", "fr_FR", "0x7f0f0000"])
        .assert()
        .success()
        .stdout("Ajouter une note\n");

    // Resolving never writes the preference file.
    assert!(!prefs.exists());
}

#[test]
fn test_string_json_output() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    let output = helper(&prefs)
        .args(["string", "de_DE", "add_note", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["value"], "Notiz hinzufügen");
    assert_eq!(json["resource"], "add_note");
    assert_eq!(json["id"], 0x7f0f_0000);
}

#[test]
fn test_unknown_resource_fails() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs)
        .args(["--lang", "en", "string", "it_IT", "remove_everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown string resource 'remove_everything'"));
}

#[test]
fn test_get_json_reports_source() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs).args(["set", "ja_JP"]).assert().success();
    let output = helper(&prefs).args(["get", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["active"], "ja_JP");
    assert_eq!(json["source"], "preference");
    assert_eq!(json["stored"], "ja_JP");
    assert_eq!(json["system"], "en_US");
}

#[test]
fn test_malformed_code_warns_but_succeeds() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs)
        .args(["--lang", "en", "set", "??"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not a valid locale code"));

    helper(&prefs)
        .args(["--lang", "en", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en_US (system default)"));
}

#[test]
fn test_list_marks_current_language() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    helper(&prefs).args(["set", "pt_PT"]).assert().success();
    let output = helper(&prefs).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let languages = json.as_array().unwrap();
    let current: Vec<_> = languages.iter().filter(|l| l["current"] == true).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["tag"], "pt");
    assert!(languages.iter().any(|l| l["name"] == "Italiano"));
}

#[test]
fn test_prefs_env_variable_is_honored() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("from-env.toml");

    let mut cmd = Command::cargo_bin("locale-helper").unwrap();
    cmd.env("LOCALE_HELPER_PREFS", &prefs)
        .env("LOCALE_HELPER_SYSTEM_LOCALE", "en_US")
        .args(["set", "uk_UA"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&prefs).unwrap();
    assert!(content.contains("uk_UA"));
}

/// A preference file that is not UTF-8 does not block recovery with `reset`.
///
/// 非 UTF-8 的偏好文件不会妨碍使用 `reset` 恢复。
#[test]
fn test_reset_recovers_from_non_utf8_preferences() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");
    std::fs::write(&prefs, [0xff, 0xfe, b'a', b'=', 0x80]).unwrap();

    helper(&prefs)
        .args(["--lang", "en", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language reset to system default en_US."));

    helper(&prefs)
        .args(["--lang", "en", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("system default"));
}
