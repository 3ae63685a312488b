//! Input files for a minimal project.
#![allow(dead_code)]

pub const EMOJI_MAP: &str = r#"{"grinning": "1f600", "heart": "2764", "thumbs_up": "1f44d"}"#;

pub const UNIFIED_REACTIONS: &str = r#"{"thumbs_up": "1f44d"}"#;

pub const PACKAGE_JSON: &str = r#"{"dependencies": {"emoji-datasource": "15.0.1"}}"#;

pub const DATASET: &str = r#"[
  {"short_name": "grinning", "short_names": ["grinning"], "unified": "1F600",
   "category": "Smileys & Emotion", "sort_order": 1, "sheet_x": 32, "sheet_y": 20,
   "has_img_google": true},
  {"short_name": "heart", "short_names": ["heart"], "unified": "2764",
   "category": "Smileys & Emotion", "sort_order": 2, "sheet_x": 56, "sheet_y": 10,
   "has_img_google": true}
]"#;

pub const CONFIG: &str = r#"[build]
emoji_sets = ["google"]
"#;

/// Every input the stamp hashes or the build reads, at the default paths
pub fn default_project_files() -> Vec<(&'static str, &'static [u8])> {
    vec![
        ("fonts/NotoColorEmoji.ttf", b"color-font".as_slice()),
        ("fonts/DejaVuSans.ttf", b"fallback-font".as_slice()),
        ("emoji_map.json", EMOJI_MAP.as_bytes()),
        ("unified_reactions.json", UNIFIED_REACTIONS.as_bytes()),
        ("package.json", PACKAGE_JSON.as_bytes()),
        ("node_modules/emoji-datasource/emoji.json", DATASET.as_bytes()),
        ("node_modules/emoji-datasource/sheet_google_64.png", b"sheet".as_slice()),
        ("static/assets/brand-emoji/brand.png", b"brand".as_slice()),
        ("emojiforge.toml", CONFIG.as_bytes()),
    ]
}
