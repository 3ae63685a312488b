//! `emojiforge build` failure paths.

mod common;

use common::*;

#[test]
fn unreadable_fallback_font_aborts_before_building() {
    let env = TestEnv::with_project();

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 2);
    assert!(
        result.stderr.contains("unable to load font"),
        "stderr: {}",
        result.stderr
    );
    assert!(!env.project_path("static/generated/emoji").exists());
    let entries = std::fs::read_dir(env.cache_root.path()).unwrap().count();
    assert_eq!(entries, 0);
}

#[test]
fn missing_fallback_font_is_reported_as_missing_input() {
    let env = TestEnv::with_project();
    env.remove_project_file("fonts/DejaVuSans.ttf");

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 2);
    assert!(
        result.stderr.contains("input file not found"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn structural_error_is_a_json_event_in_json_mode() {
    let env = TestEnv::with_project();

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 2);
    let lines = result.json_lines();
    let last = lines.last().unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["command"], "build");
    assert!(last["message"]
        .as_str()
        .unwrap()
        .contains("DejaVuSans.ttf"));
}

/// Project whose color font dump only knows 1f600 and whose fallback font is
/// real. `thumbs_up` (1f44d) is in neither font.
#[cfg(unix)]
fn project_with_unrenderable_emoji() -> TestEnv {
    let env = TestEnv::with_project();
    env.use_fixture_fallback_font();
    let ttx = env.write_stub_ttx(&[(0x1f600, "u1F600")]);
    env.write_project_file(
        "emojiforge.toml",
        format!(
            "[build]\nemoji_sets = [\"google\"]\nttx_command = \"{}\"\n",
            ttx.display()
        ),
    );
    env
}

#[cfg(unix)]
#[test]
fn unrenderable_glyph_fails_build_with_exit_code_one() {
    let env = project_with_unrenderable_emoji();

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1, "stderr: {}", result.stderr);
    assert!(
        result.stderr.contains("Errors dumping emoji!"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("thumbs_up"), "stderr: {}", result.stderr);
    assert!(env.success_stamps().is_empty());
    assert!(std::fs::symlink_metadata(env.project_path("static/generated/emoji")).is_err());
}

#[cfg(unix)]
#[test]
fn unrenderable_glyph_is_reported_in_json_mode() {
    let env = project_with_unrenderable_emoji();

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 1, "stderr: {}", result.stderr);
    assert!(
        result.stderr.contains("Errors dumping emoji!"),
        "stderr: {}",
        result.stderr
    );

    let lines = result.json_lines();
    let failed: Vec<_> = lines
        .iter()
        .filter(|l| l["event"] == "glyph_failed")
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["codepoint"], "1f44d");
    assert!(lines
        .iter()
        .any(|l| l["event"] == "glyph_fallback" && l["codepoint"] == "2764"));
    let last = lines.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["success"], false);

    assert!(env.success_stamps().is_empty());
    assert!(std::fs::symlink_metadata(env.project_path("static/generated/emoji")).is_err());
}
