//! Build Use Case Tests

use super::*;
use crate::application::testing::{solid_png, FakeFallback, FakeGlyphSource, FakeLoader, RecordingSink};
use crate::config::{BuildContext, Config, DEFAULT_CONFIG_FILE};
use crate::domain::ports::BuildEvent;
use crate::domain::value_objects::CacheStamp;
use crate::error::ForgeError;
use crate::infrastructure::fs::LocalFs;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const EMOJI_MAP: &str = r#"{"grinning": "1f600", "heart": "2764", "thumbs_up": "1f44d"}"#;

const DATASET: &str = r#"[
  {"short_name": "grinning", "short_names": ["grinning"], "unified": "1F600",
   "category": "Smileys & Emotion", "sort_order": 1, "sheet_x": 32, "sheet_y": 20,
   "has_img_google": true},
  {"short_name": "heart", "short_names": ["heart"], "unified": "2764",
   "category": "Smileys & Emotion", "sort_order": 2, "sheet_x": 56, "sheet_y": 10,
   "has_img_google": true},
  {"short_name": "thumbs_up", "short_names": ["thumbs_up", "+1"], "unified": "1F44D",
   "category": "People & Body", "sort_order": 3, "sheet_x": 13, "sheet_y": 34,
   "has_img_google": true}
]"#;

struct Project {
    _dir: TempDir,
    ctx: BuildContext,
}

impl Project {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let write = |rel: &str, content: &[u8]| {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        };
        write("fonts/NotoColorEmoji.ttf", b"color-font");
        write("fonts/DejaVuSans.ttf", b"fallback-font");
        write("emoji_map.json", EMOJI_MAP.as_bytes());
        write("unified_reactions.json", br#"{"thumbs_up": "1f44d"}"#);
        write(
            "package.json",
            br#"{"dependencies": {"emoji-datasource": "15.0.1"}}"#,
        );
        write("node_modules/emoji-datasource/emoji.json", DATASET.as_bytes());
        write("node_modules/emoji-datasource/sheet_google_64.png", b"sheet");
        write("static/assets/brand-emoji/brand.png", b"brand");
        write(DEFAULT_CONFIG_FILE, b"[build]\nemoji_sets = [\"google\"]\n");

        let config = Config::load(&root.join(DEFAULT_CONFIG_FILE)).unwrap();
        let ctx = BuildContext::resolve(&config, root, Some(root.join(DEFAULT_CONFIG_FILE)))
            .with_cache_root(root.join("cache"));

        Self { _dir: dir, ctx }
    }

    fn root(&self) -> &Path {
        &self.ctx.base_dir
    }

    fn cache_dir(&self, stamp: &CacheStamp) -> PathBuf {
        self.root().join("cache").join(stamp.as_str())
    }
}

fn loader() -> FakeLoader {
    FakeLoader::new(
        FakeGlyphSource::new()
            .with_glyph(0x1f600, "u1F600", solid_png([255, 200, 0, 255]))
            .with_glyph(0x1f44d, "u1F44D", solid_png([255, 180, 0, 255])),
    )
}

fn options() -> BuildOptions {
    BuildOptions::new().with_tool_version("0.0.0-test")
}

#[cfg(unix)]
#[test]
fn full_build_populates_stamps_and_publishes() {
    let project = Project::new();
    let fs = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::knowing(&["2764"]);
    let sink = RecordingSink::default();

    let result = BuildUseCase::new(&fs, &loader, &fallback)
        .execute_with_events(&project.ctx, &options(), &sink)
        .unwrap();

    assert!(result.is_success(), "{:?}", result.errors);
    assert!(!result.cached);
    assert!(result.published);

    let cache_dir = project.cache_dir(&result.stamp);
    assert_eq!(result.cache_dir, cache_dir);
    for file in [
        "images/unicode/1f600.png",
        "images/unicode/2764.png",
        "images/grinning.png",
        "images/static/brand.png",
        "images/brand.png",
        "sheet_google_64.png",
        "google-sprite.css",
        "emoji_codes.js",
        "name_to_codepoint.json",
        "codepoint_to_name.json",
        ".success-stamp",
    ] {
        assert!(cache_dir.join(file).exists(), "missing {}", file);
    }

    let served = project.root().join("static/generated/emoji");
    assert_eq!(fs::read_link(&served).unwrap(), cache_dir);

    // Scratch area is gone
    let leftovers: Vec<_> = fs::read_dir(project.root().join("cache"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with(".emojiforge-"))
        .collect();
    assert!(leftovers.is_empty());

    let events = sink.events();
    assert!(matches!(events.first(), Some(BuildEvent::Started { emoji_count: 3, .. })));
    assert!(matches!(
        events.last(),
        Some(BuildEvent::Completed {
            success: true,
            cached: false
        })
    ));
}

#[cfg(unix)]
#[test]
fn unchanged_inputs_short_circuit() {
    let project = Project::new();
    let fs = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::knowing(&["2764"]);
    let use_case = BuildUseCase::new(&fs, &loader, &fallback);

    let first = use_case.execute(&project.ctx, &options()).unwrap();
    let codes = first.cache_dir.join("emoji_codes.js");
    let before = fs::metadata(&codes).unwrap().modified().unwrap();

    let second = use_case.execute(&project.ctx, &options()).unwrap();

    assert!(second.cached);
    assert!(second.is_success());
    assert_eq!(second.stamp, first.stamp);
    assert!(second.rasterize.is_none());
    assert_eq!(loader.load_count(), 1);
    assert_eq!(fs::metadata(&codes).unwrap().modified().unwrap(), before);
}

#[cfg(unix)]
#[test]
fn force_regenerates_complete_cache() {
    let project = Project::new();
    let fs = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::knowing(&["2764"]);
    let use_case = BuildUseCase::new(&fs, &loader, &fallback);

    use_case.execute(&project.ctx, &options()).unwrap();
    let forced = use_case
        .execute(&project.ctx, &options().with_force(true))
        .unwrap();

    assert!(!forced.cached);
    assert!(forced.is_success());
    assert_eq!(loader.load_count(), 2);
    assert!(forced.cache_dir.join(CacheStamp::SUCCESS_FILE).exists());
    assert!(forced.cache_dir.join("images/unicode/1f600.png").exists());
    assert_eq!(
        fs::read_link(project.root().join("static/generated/emoji")).unwrap(),
        forced.cache_dir
    );
}

#[cfg(unix)]
#[test]
fn failed_forced_rebuild_drops_stamp_and_keeps_old_tree() {
    let project = Project::new();
    let fs_impl = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::knowing(&["2764"]);
    let use_case = BuildUseCase::new(&fs_impl, &loader, &fallback);

    let first = use_case.execute(&project.ctx, &options()).unwrap();
    assert!(first.is_success());

    // Sprite sheets are not stamp inputs, so the stamp stays the same
    let sheet = project.root().join("node_modules/emoji-datasource/sheet_google_64.png");
    fs::remove_file(&sheet).unwrap();

    let err = use_case
        .execute(&project.ctx, &options().with_force(true))
        .unwrap_err();
    assert!(matches!(err, ForgeError::MissingInput { .. }));

    assert!(!first.cache_dir.join(CacheStamp::SUCCESS_FILE).exists());
    assert!(!use_case.stamp(&project.ctx, &options()).unwrap().is_complete());
    // The served tree was not touched
    assert!(first.cache_dir.join("images/unicode/1f600.png").exists());
    assert!(first.cache_dir.join("sheet_google_64.png").exists());
    assert_eq!(
        fs::read_link(project.root().join("static/generated/emoji")).unwrap(),
        first.cache_dir
    );

    // Without the stamp the next plain run rebuilds instead of hitting the cache
    let err = use_case.execute(&project.ctx, &options()).unwrap_err();
    assert!(matches!(err, ForgeError::MissingInput { .. }));
    assert_eq!(loader.load_count(), 3);

    fs::write(&sheet, b"sheet").unwrap();
    let rebuilt = use_case.execute(&project.ctx, &options()).unwrap();
    assert!(rebuilt.is_success(), "{:?}", rebuilt.errors);
    assert!(!rebuilt.cached);
    assert_eq!(rebuilt.stamp, first.stamp);
    assert!(rebuilt.cache_dir.join(CacheStamp::SUCCESS_FILE).exists());
}

#[cfg(unix)]
#[test]
fn changed_input_invalidates_cache() {
    let project = Project::new();
    let fs = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::knowing(&["2764"]);
    let use_case = BuildUseCase::new(&fs, &loader, &fallback);

    let first = use_case.execute(&project.ctx, &options()).unwrap();
    fs::write(
        project.root().join("unified_reactions.json"),
        br#"{"thumbs_up": "1f44d", "like": "1f44d"}"#,
    )
    .unwrap();

    let info = use_case.stamp(&project.ctx, &options()).unwrap();
    assert_ne!(info.stamp, first.stamp);
    assert!(!info.is_complete());

    let second = use_case.execute(&project.ctx, &options()).unwrap();
    assert!(!second.cached);
    assert_ne!(second.cache_dir, first.cache_dir);
    assert_eq!(
        fs::read_link(project.root().join("static/generated/emoji")).unwrap(),
        second.cache_dir
    );
}

#[test]
fn dataset_version_bump_changes_stamp() {
    let project = Project::new();
    let fs = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::default();
    let use_case = BuildUseCase::new(&fs, &loader, &fallback);

    let before = use_case.stamp(&project.ctx, &options()).unwrap();
    fs::write(
        project.root().join("package.json"),
        br#"{"devDependencies": {"emoji-datasource": "15.1.0"}}"#,
    )
    .unwrap();
    let after = use_case.stamp(&project.ctx, &options()).unwrap();

    assert_eq!(before.dataset_version, "15.0.1");
    assert_eq!(after.dataset_version, "15.1.0");
    assert_ne!(before.stamp, after.stamp);
}

#[test]
fn failed_glyph_leaves_no_stamp_and_no_link() {
    let project = Project::new();
    let fs = LocalFs::new();
    let loader = loader();
    // Heart has neither a color glyph nor a fallback rendering
    let fallback = FakeFallback::default();

    let result = BuildUseCase::new(&fs, &loader, &fallback)
        .execute(&project.ctx, &options())
        .unwrap();

    assert!(!result.is_success());
    assert!(result.has_glyph_failures());
    assert!(result.materialize.is_none());
    assert!(!result.published);
    assert!(result.errors[0].contains("heart"));

    let cache_dir = project.cache_dir(&result.stamp);
    assert!(!cache_dir.join(CacheStamp::SUCCESS_FILE).exists());
    assert!(!project.root().join("static/generated/emoji").exists());

    // Other glyphs were still attempted
    let report = result.rasterize.unwrap();
    assert_eq!(report.color_count(), 2);
}

#[test]
fn missing_tracked_input_aborts() {
    let project = Project::new();
    fs::remove_file(project.root().join("fonts/DejaVuSans.ttf")).unwrap();
    let fs = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::default();

    let err = BuildUseCase::new(&fs, &loader, &fallback)
        .execute(&project.ctx, &options())
        .unwrap_err();

    assert!(matches!(err, ForgeError::MissingInput { .. }));
    assert_eq!(loader.load_count(), 0);
}

#[test]
fn manifest_without_dataset_aborts() {
    let project = Project::new();
    fs::write(project.root().join("package.json"), br#"{"dependencies": {}}"#).unwrap();
    let fs = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::default();

    let err = BuildUseCase::new(&fs, &loader, &fallback)
        .stamp(&project.ctx, &options())
        .unwrap_err();

    assert!(matches!(err, ForgeError::ManifestVersion { .. }));
}

#[cfg(unix)]
#[test]
fn publish_failure_fails_run_after_stamping() {
    let project = Project::new();
    // The served link's parent directory is a plain file
    let blocker = project.root().join("static/generated");
    fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    fs::write(&blocker, b"not a directory").unwrap();

    let fs_impl = LocalFs::new();
    let loader = loader();
    let fallback = FakeFallback::knowing(&["2764"]);

    let result = BuildUseCase::new(&fs_impl, &loader, &fallback)
        .execute(&project.ctx, &options())
        .unwrap();

    assert!(!result.published);
    assert!(!result.is_success());
    assert!(result.cache_dir.join(CacheStamp::SUCCESS_FILE).exists());
}
