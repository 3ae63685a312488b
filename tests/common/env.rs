//! Test environment for isolated emojiforge runs.
//!
//! Provides `TestEnv` - a project directory and a cache root in temp
//! directories, plus helpers to run the CLI against them.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::default_project_files;

/// Result of running an emojiforge CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub cache_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn empty() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            cache_root: tempfile::tempdir().expect("Failed to create cache dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_emojiforge")),
        }
    }

    /// Project with every input at its default path
    pub fn with_project() -> Self {
        let env = Self::empty();
        for (path, content) in default_project_files() {
            env.write_project_file(path, content);
        }
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative_path: &str, content: impl AsRef<[u8]>) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn remove_project_file(&self, relative_path: &str) {
        std::fs::remove_file(self.project_path(relative_path)).expect("Failed to remove file");
    }

    /// Replace the placeholder fallback font with the real fixture font
    pub fn use_fixture_fallback_font(&self) {
        let font = fixture_path("fonts/DejaVuSans.ttf");
        std::fs::copy(font, self.project_path("fonts/DejaVuSans.ttf"))
            .expect("Failed to copy fixture font");
    }

    /// Write an executable standing in for `ttx`.
    ///
    /// It dumps a `cmap_format_12` table holding `glyphs` and one solid
    /// bitmap per glyph, the way `ttx -z extfile -d <dir> <font>` does.
    /// Returns the script's absolute path for `build.ttx_command`.
    #[cfg(unix)]
    pub fn write_stub_ttx(&self, glyphs: &[(u32, &str)]) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bitmap = self.project_path("stub/glyph.png");
        std::fs::create_dir_all(bitmap.parent().unwrap()).expect("Failed to create directories");
        image::RgbaImage::from_pixel(16, 16, image::Rgba([255, 200, 0, 255]))
            .save(&bitmap)
            .expect("Failed to write bitmap");

        let mut maps = String::new();
        let mut copies = String::new();
        for (code, name) in glyphs {
            maps.push_str(&format!("      <map code=\"{:#x}\" name=\"{}\"/>\n", code, name));
            copies.push_str(&format!(
                "cp '{}' \"$dir/bitmaps/strike0/{}.png\"\n",
                bitmap.display(),
                name
            ));
        }

        let script = format!(
            r#"#!/bin/sh
# -q -z extfile -d <dir> <font>
dir="$5"
stem=$(basename "$6" .ttf)
mkdir -p "$dir/bitmaps/strike0"
cat > "$dir/$stem.ttx" <<'XML'
<?xml version="1.0" encoding="UTF-8"?>
<ttFont>
  <cmap>
    <cmap_format_12 platformID="3" platEncID="10" format="12" reserved="0" length="0" language="0" nGroups="{count}">
{maps}    </cmap_format_12>
  </cmap>
</ttFont>
XML
{copies}"#,
            count = glyphs.len(),
            maps = maps,
            copies = copies,
        );

        let path = self.project_path("stub/ttx");
        std::fs::write(&path, script).expect("Failed to write stub");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub executable");
        path
    }

    /// Every `.success-stamp` under the cache root
    pub fn success_stamps(&self) -> Vec<PathBuf> {
        fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
            let Ok(entries) = std::fs::read_dir(dir) else {
                return;
            };
            for entry in entries.filter_map(Result::ok) {
                let path = entry.path();
                if path.is_dir() {
                    walk(&path, found);
                } else if entry.file_name() == ".success-stamp" {
                    found.push(path);
                }
            }
        }

        let mut found = Vec::new();
        walk(self.cache_root.path(), &mut found);
        found
    }

    /// Run the CLI from the project root with the cache root pinned
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("EMOJIFORGE_CACHE_ROOT", self.cache_root.path())
            .env_remove("TRAVIS")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute emojiforge");
        output_to_result(output)
    }
}

/// Path of a file under `tests/fixtures`
pub fn fixture_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
