use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GOBLIN: &str = "---\nstatblock: true\npublished: true\nname: Goblin Warrior\nlevel: -1\nsize: small\nstrikes:\n  - name: __Melee__ ⬻ dogslicer\n    desc: +8 (agile, finesse), __Damage__ 1d6 slashing\n---\nSneaky.\n";
const DRAFT: &str = "---\nstatblock: true\nname: Goblin Draft\n---\n";
const TOWN: &str = "---\ntitle: Sandpoint\npublished: true\n---\nA quiet town.\n";
const BROKEN: &str = "---\nname: [oops\n---\n";

fn vault(notes: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in notes {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg("--list-formats");
    cmd.assert().success().stdout(
        predicate::str::contains("foundry").and(predicate::str::contains("statblock")),
    );
}

#[test]
fn convert_vault_to_stdout() {
    let dir = vault(&[("bestiary/goblin.md", GOBLIN), ("lore/sandpoint.md", TOWN)]);
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path());

    cmd.assert().success().stdout(
        predicate::str::contains("\"type\": \"npc\"")
            .and(predicate::str::contains("\"name\": \"Goblin Warrior\""))
            .and(predicate::str::contains("\"name\": \"Sandpoint\""))
            .and(predicate::str::contains("dogslicer")),
    );
}

#[test]
fn statblock_format_skips_lore() {
    let dir = vault(&[("goblin.md", GOBLIN), ("sandpoint.md", TOWN)]);
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path()).arg("--to").arg("statblock");

    cmd.assert().success().stdout(
        predicate::str::contains("\"size\": \"sm\"")
            .and(predicate::str::contains("Sandpoint").not()),
    );
}

#[test]
fn unpublished_notes_are_skipped_by_default() {
    let dir = vault(&[("draft.md", DRAFT)]);
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Goblin Draft").not());

    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path()).arg("--include-unpublished");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Goblin Draft"));
}

#[test]
fn out_dir_gets_one_file_per_document() {
    let dir = vault(&[("goblin.md", GOBLIN), ("sandpoint.md", TOWN)]);
    let out = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path()).arg("--out").arg(out.path());
    cmd.assert().success().stdout(predicate::str::is_empty());

    let actor = read_json(&out.path().join("goblin-warrior.json"));
    assert_eq!(actor["type"], "npc");
    assert_eq!(actor["items"][0]["name"], "dogslicer");
    let journal = read_json(&out.path().join("sandpoint.json"));
    assert_eq!(journal["pages"][0]["text"]["content"], "<p>A quiet town.</p>");
}

#[test]
fn out_dir_keeps_documents_with_shared_slug() {
    let creature = "---\nstatblock: true\npublished: true\nname: Goblin\nlevel: -1\n---\n";
    let lore = "---\ntitle: Goblin\npublished: true\n---\nGoblins sing.\n";
    let dir = vault(&[("a/goblin.md", creature), ("b/goblin.md", lore)]);
    let out = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path()).arg("--out").arg(out.path());
    cmd.assert().success();

    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 2);
    let actor = read_json(&out.path().join("goblin.json"));
    assert_eq!(actor["type"], "npc");

    let journals: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.file_name().unwrap() != "goblin.json")
        .collect();
    let journal = read_json(&journals[0]);
    assert_eq!(journal["name"], "Goblin");
    assert_eq!(
        journals[0],
        out.path()
            .join(format!("goblin-{}.json", journal["_id"].as_str().unwrap()))
    );
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = vault(&[("goblin.md", GOBLIN)]);
    let run = || {
        let mut cmd = cargo_bin_cmd!("codex");
        cmd.arg(dir.path());
        cmd.output().unwrap().stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn config_file_changes_namespace_and_layout() {
    let dir = vault(&[("goblin.md", GOBLIN)]);
    let config = dir.path().join("codex.toml");
    fs::write(&config, "[ids]\nnamespace = \"other\"\n\n[convert]\npretty = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path().join("goblin.md"));
    let default = cmd.output().unwrap().stdout;

    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path().join("goblin.md")).arg("--config").arg(&config);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let compact = String::from_utf8(output.stdout).unwrap();
    assert_eq!(compact.lines().count(), 1);
    let other: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let default: serde_json::Value = serde_json::from_slice(&default).unwrap();
    assert_eq!(other["name"], default["name"]);
    assert_ne!(other["_id"], default["_id"]);
}

#[test]
fn broken_note_fails_the_run_but_not_the_others() {
    let dir = vault(&[("broken.md", BROKEN), ("goblin.md", GOBLIN)]);
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Goblin Warrior"))
        .stderr(predicate::str::contains("1 file(s) failed"));
}

#[test]
fn unknown_format_is_an_error() {
    let dir = vault(&[("goblin.md", GOBLIN)]);
    let mut cmd = cargo_bin_cmd!("codex");
    cmd.arg(dir.path()).arg("--to").arg("pdf");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'pdf' not found"));
}
