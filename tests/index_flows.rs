mod common;

use common::{TestEnv, HEADER};
use predicates::str::contains;

#[test]
fn index_lists_documents_in_path_order() {
    let env = TestEnv::new();
    env.write("docs/b.md", "# B\nStatus: Draft\nSummary: The `b` doc\n");
    env.write("docs/a.md", "# A\n\nIntro with *emphasis*.\n");
    env.write("docs/sub/c.md", HEADER);

    env.cmd()
        .arg("index")
        .assert()
        .success()
        .stdout(contains("Generated docs/DOCS_INDEX.md"));

    let index = env.read("docs/DOCS_INDEX.md");
    let expected = "\
# DOCS_INDEX

Document list (Status / Created / Updated). Dates come from git log.

| No | Path | Status | Description | Created (ISO) | Updated (ISO) |
| --- | --- | --- | --- | --- | --- |
| 1 | `docs/a.md` | - | Intro with emphasis. | - | - |
| 2 | `docs/b.md` | Draft | The b doc | - | - |
| 3 | `docs/sub/c.md` | Active | Example document | - | - |
";
    assert_eq!(index, expected);
}

#[test]
fn regenerating_never_lists_the_index_itself() {
    let env = TestEnv::new();
    env.write("docs/a.md", HEADER);

    env.cmd().arg("index").assert().success();
    env.cmd().arg("index").assert().success();

    let index = env.read("docs/DOCS_INDEX.md");
    assert!(!index.contains("`docs/DOCS_INDEX.md`"));
    assert_eq!(index.lines().filter(|l| l.starts_with("| 1 |")).count(), 1);
    assert!(!index.contains("| 2 |"));
}

#[test]
fn stdout_flag_prints_without_writing() {
    let env = TestEnv::new();
    env.write("docs/a.md", HEADER);

    env.cmd()
        .args(["index", "--stdout"])
        .assert()
        .success()
        .stdout(contains("| 1 | `docs/a.md` | Active | Example document | - | - |"));

    assert!(!env.root.join("docs/DOCS_INDEX.md").exists());
}

#[test]
fn index_without_docs_dir_fails_without_output() {
    let env = TestEnv::bare();

    env.cmd()
        .arg("index")
        .assert()
        .code(2)
        .stderr(contains("error: docs/ directory not found"));
    assert!(!env.root.join("docs").exists());
}

#[test]
fn index_dates_come_from_git_history() {
    let env = TestEnv::new();
    if !env.git_init() {
        eprintln!("git unavailable; skipping");
        return;
    }
    env.write("docs/a.md", HEADER);
    env.write("docs/b.md", HEADER);
    assert!(env.git(&["add", "docs/a.md"]));
    assert!(env.git(&[
        "-c",
        "user.name=Docs Bot",
        "-c",
        "user.email=docs@example.com",
        "commit",
        "-q",
        "-m",
        "add a",
    ]));

    let data = env.run_json(&["index", "--stdout"], 0);
    let rows = data["data"]["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 2);

    let created = rows[0]["created_at"].as_str().expect("created_at for committed doc");
    let updated = rows[0]["updated_at"].as_str().expect("updated_at for committed doc");
    assert!(chrono_like_iso(created), "{created}");
    assert_eq!(created, updated);

    assert!(rows[1]["created_at"].is_null());
    assert!(rows[1]["updated_at"].is_null());
}

fn chrono_like_iso(s: &str) -> bool {
    s.len() >= 25 && s.as_bytes()[4] == b'-' && s.as_bytes()[10] == b'T'
}
