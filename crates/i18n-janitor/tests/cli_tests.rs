use assert_fs::prelude::*;
use predicates::prelude::*;

/// Lay out the fixture tree the tool expects: a `scripts` working directory
/// next to `src/strings`, with `en-us.json` as the source locale.
fn setup_tree(locales: &[(&str, &str)]) -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("scripts").create_dir_all().unwrap();
    for (name, content) in locales {
        temp.child(format!("src/strings/{name}")).write_str(content).unwrap();
    }
    temp
}

fn janitor(temp: &assert_fs::TempDir, args: &[&str]) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("i18n-janitor");
    cmd.current_dir(temp.child("scripts").path());
    cmd.args(args);
    cmd
}

fn read(temp: &assert_fs::TempDir, rel: &str) -> String {
    std::fs::read_to_string(temp.child(rel).path()).unwrap()
}

#[test]
fn duplicates_reports_values_shared_by_multiple_keys() {
    let temp = setup_tree(&[(
        "en-us.json",
        "{\n    \"a\": \"hello\",\n    \"b\": \"hello\",\n    \"c\": \"bye\"\n}\n",
    )]);

    janitor(&temp, &["duplicates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 duplicated value(s)"));

    assert_eq!(
        read(&temp, "scripts/duplicates.txt"),
        "\"hello\": [\"a\",\"b\"]\n"
    );
}

#[test]
fn duplicates_with_unique_values_writes_an_empty_report() {
    let temp = setup_tree(&[("en-us.json", "{\n  \"a\": \"x\",\n  \"b\": \"y\"\n}\n")]);

    janitor(&temp, &["duplicates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 duplicated value(s)"));

    assert_eq!(read(&temp, "scripts/duplicates.txt"), "");
}

#[test]
fn duplicates_fails_without_a_source_locale() {
    let temp = setup_tree(&[("fr-fr.json", "{}\n")]);

    janitor(&temp, &["duplicates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("en-us.json"));
}

#[test]
fn remove_applies_the_key_list_to_every_locale() {
    let temp = setup_tree(&[
        (
            "en-us.json",
            "{\n    \"a\": \"1\",\n    \"b\": \"2\",\n    \"c\": \"3\"\n}\n",
        ),
        ("fr-fr.json", "{\n  \"a\": \"un\",\n  \"b\": \"deux\"\n}\n"),
    ]);
    temp.child("scripts/unused.txt").write_str("b\nz\n").unwrap();

    janitor(&temp, &["remove"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DONE"));

    // Unknown key `z` is a no-op; indentation stays as detected per file.
    assert_eq!(
        read(&temp, "src/strings/en-us.json"),
        "{\n    \"a\": \"1\",\n    \"c\": \"3\"\n}\n"
    );
    assert_eq!(
        read(&temp, "src/strings/fr-fr.json"),
        "{\n  \"a\": \"un\"\n}\n"
    );
}

#[test]
fn remove_is_idempotent() {
    let temp = setup_tree(&[(
        "en-us.json",
        "{\n  \"a\": \"1\",\n  \"b\": \"2\"\n}\n",
    )]);
    temp.child("scripts/unused.txt").write_str("b\n").unwrap();

    janitor(&temp, &["remove"]).assert().success();
    let after_first = read(&temp, "src/strings/en-us.json");

    janitor(&temp, &["remove"]).assert().success();
    assert_eq!(read(&temp, "src/strings/en-us.json"), after_first);
}

#[test]
fn remove_without_a_key_list_fails() {
    let temp = setup_tree(&[("en-us.json", "{}\n")]);

    janitor(&temp, &["remove"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unused.txt"));
}

#[test]
fn remove_dry_run_leaves_files_untouched() {
    let original = "{\n  \"a\": \"1\",\n  \"b\": \"2\"\n}\n";
    let temp = setup_tree(&[("en-us.json", original)]);
    temp.child("scripts/unused.txt").write_str("b\n").unwrap();

    janitor(&temp, &["remove", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove 1 key(s)"));

    assert_eq!(read(&temp, "src/strings/en-us.json"), original);
}

#[test]
fn prune_clips_other_locales_to_the_source_key_set() {
    let temp = setup_tree(&[
        ("en-us.json", "{\n    \"a\": \"hello\",\n    \"c\": \"bye\"\n}\n"),
        (
            "fr-fr.json",
            "{\n    \"a\": \"bonjour\",\n    \"b\": \"salut\",\n    \"x\": \"vieux\"\n}\n",
        ),
        ("de-de.json", "{\n  \"x\": \"alt\",\n  \"a\": \"hallo\"\n}\n"),
    ]);

    janitor(&temp, &["prune", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 orphaned key(s)"));

    // Source untouched, others clipped with their own indent preserved.
    assert_eq!(
        read(&temp, "src/strings/en-us.json"),
        "{\n    \"a\": \"hello\",\n    \"c\": \"bye\"\n}\n"
    );
    assert_eq!(
        read(&temp, "src/strings/fr-fr.json"),
        "{\n    \"a\": \"bonjour\"\n}\n"
    );
    assert_eq!(
        read(&temp, "src/strings/de-de.json"),
        "{\n  \"a\": \"hallo\"\n}\n"
    );

    // Dropped keys are reported once each, in first-seen order across the
    // locale files (sorted by filename, so de-de is visited first).
    assert_eq!(read(&temp, "scripts/missing.txt"), "x\nb\n");
}

#[test]
fn prune_aborts_when_the_operator_declines() {
    let original = "{\n  \"a\": \"bonjour\",\n  \"b\": \"salut\"\n}\n";
    let temp = setup_tree(&[
        ("en-us.json", "{\n  \"a\": \"hello\"\n}\n"),
        ("fr-fr.json", original),
    ]);

    janitor(&temp, &["prune"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("aborted"));

    assert_eq!(read(&temp, "src/strings/fr-fr.json"), original);
    assert!(!temp.child("scripts/missing.txt").path().exists());
}

#[test]
fn prune_dry_run_reports_without_writing() {
    let original = "{\n  \"a\": \"bonjour\",\n  \"b\": \"salut\"\n}\n";
    let temp = setup_tree(&[
        ("en-us.json", "{\n  \"a\": \"hello\"\n}\n"),
        ("fr-fr.json", original),
    ]);

    janitor(&temp, &["prune", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would drop 1 key(s)"));

    assert_eq!(read(&temp, "src/strings/fr-fr.json"), original);
    assert!(!temp.child("scripts/missing.txt").path().exists());
}

#[cfg(unix)]
mod unused_command {
    use super::*;
    use std::os::unix::fs::PermissionsExt as _;

    /// An rg-compatible stub built on grep, so the tests don't depend on
    /// ripgrep being installed. It honors `-e` patterns and the trailing
    /// search root, and keeps rg's exit-code contract.
    const STUB: &str = r#"#!/bin/sh
root="."
pat1=""; pat2=""; pat3=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    -e)
      shift
      if [ -z "$pat1" ]; then pat1="$1"
      elif [ -z "$pat2" ]; then pat2="$1"
      else pat3="$1"; fi
      ;;
    --glob) shift ;;
    --*) ;;
    *) root="$1" ;;
  esac
  shift
done
if grep -rFq -e "$pat1" -e "$pat2" -e "$pat3" \
    --include='*.js' --include='*.ts' --include='*.html' \
    --exclude-dir=strings "$root"; then
  exit 0
fi
exit 1
"#;

    fn install_stub(temp: &assert_fs::TempDir, content: &str) -> String {
        let child = temp.child("scripts/fake-rg");
        child.write_str(content).unwrap();
        std::fs::set_permissions(child.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        child.path().display().to_string()
    }

    #[test]
    fn unused_writes_only_unreferenced_keys() {
        let temp = setup_tree(&[(
            "en-us.json",
            "{\n    \"kept\": \"Hello\",\n    \"gone\": \"Bye\"\n}\n",
        )]);
        temp.child("ui/app.js")
            .write_str("element.textContent = translate(\"kept\");\n")
            .unwrap();
        let stub = install_stub(&temp, STUB);

        janitor(&temp, &["unused", "--search-tool", &stub])
            .assert()
            .success()
            .stdout(predicate::str::contains("DONE: kept"))
            .stdout(predicate::str::contains("UNUSED: gone"))
            .stdout(predicate::str::contains("1 unused key(s)"));

        assert_eq!(read(&temp, "scripts/unused.txt"), "gone\n");
    }

    #[test]
    fn unused_fails_when_the_search_tool_errors() {
        let temp = setup_tree(&[("en-us.json", "{\n  \"a\": \"x\"\n}\n")]);
        let stub = install_stub(&temp, "#!/bin/sh\necho 'disk on fire' >&2\nexit 2\n");

        janitor(&temp, &["unused", "--search-tool", &stub])
            .assert()
            .failure()
            .stderr(predicate::str::contains("search for key 'a' failed"));

        assert!(
            !temp.child("scripts/unused.txt").path().exists(),
            "a failed search must not produce a key list"
        );
    }

    #[test]
    fn unused_fails_when_the_search_tool_is_missing() {
        let temp = setup_tree(&[("en-us.json", "{\n  \"a\": \"x\"\n}\n")]);

        janitor(&temp, &["unused", "--search-tool", "definitely-not-installed"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not be spawned"));
    }
}
