use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn groupsort(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_groupsort"))
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

fn write(path: &Path, contents: &str) -> String {
    std::fs::write(path, contents).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn sorts_groups_by_file_count() {
    let dir = tempdir().unwrap();
    let groups = write(
        &dir.path().join("groups.toml"),
        r#"
        [[group]]
        value = "/a"
        size = 3

        [[group]]
        value = "/b"
        size = 1

        [[group]]
        value = "/c"
        size = 2
        hash_hits = 1
        "#,
    );

    let (ok, stdout) = groupsort(&["sort", &groups, "--by", "file_count", "--order", "desc"]);
    assert!(ok);
    assert_eq!(stdout, "/a\t3\t-\n/c\t2\t0.50\n/b\t1\t-\n");
}

#[test]
fn sort_defaults_come_from_config() {
    let dir = tempdir().unwrap();
    let conf = write(
        &dir.path().join("groupsort.toml"),
        r#"
        [sorting]
        strategy = "group_by_value"
        order = "descending"
        "#,
    );
    let groups = write(
        &dir.path().join("groups.toml"),
        r#"
        tags = ["Zebra", "Apple"]

        [[group]]
        value = "Apple"
        size = 1

        [[group]]
        value = "Zebra"
        size = 1
        "#,
    );

    let (ok, stdout) = groupsort(&["-c", &conf, "sort", &groups, "--attr", "tags"]);
    assert!(ok);
    assert_eq!(stdout, "Zebra\t1\t-\nApple\t1\t-\n");
}

#[test]
fn unknown_tag_fails() {
    let dir = tempdir().unwrap();
    let groups = write(
        &dir.path().join("groups.toml"),
        r#"
        [[group]]
        value = "Notable"
        size = 1
        "#,
    );

    let (ok, stdout) = groupsort(&["sort", &groups, "--attr", "tags"]);
    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn lists_strategies_with_icons() {
    let dir = tempdir().unwrap();
    let icons = dir.path().join("icons");
    std::fs::create_dir(&icons).unwrap();
    std::fs::write(icons.join("folder-open-image.png"), b"png").unwrap();
    let conf = write(
        &dir.path().join("groupsort.toml"),
        &format!("[resources]\nicon_dir = {:?}\n", icons.to_str().unwrap()),
    );

    let (ok, stdout) = groupsort(&["-c", &conf, "list"]);
    assert!(ok);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("file_count      Group Size  toggle  "));
    assert!(lines[0].ends_with("folder-open-image.png"));
    assert!(lines[2].starts_with("none            None        fixed   -"));
}

#[test]
fn list_fails_without_icon_dir() {
    let dir = tempdir().unwrap();
    let icons = dir.path().join("icons");
    let conf = write(
        &dir.path().join("groupsort.toml"),
        &format!("[resources]\nicon_dir = {:?}\n", icons.to_str().unwrap()),
    );

    let (ok, stdout) = groupsort(&["-c", &conf, "list"]);
    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn duplicate_group_fails() {
    let dir = tempdir().unwrap();
    let groups = write(
        &dir.path().join("groups.toml"),
        r#"
        [[group]]
        value = "/a"
        size = 1

        [[group]]
        value = "/a"
        size = 2
        "#,
    );

    let (ok, stdout) = groupsort(&["sort", &groups]);
    assert!(!ok);
    assert!(stdout.is_empty());
}
