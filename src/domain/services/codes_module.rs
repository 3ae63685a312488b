//! Lookup-table module and JSON maps consumed by the web client

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::Codepoint;
use crate::error::{ForgeError, ForgeResult};

/// All lookup tables exported to the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmojiCodes {
    pub names: Vec<String>,
    pub codepoints: Vec<Codepoint>,
    pub name_to_codepoint: BTreeMap<String, Codepoint>,
    pub codepoint_to_name: BTreeMap<Codepoint, String>,
    pub emoji_catalog: BTreeMap<String, Vec<String>>,
    pub patched_css_classes: BTreeMap<String, Codepoint>,
}

fn to_json<T: Serialize>(file: &str, value: &T) -> ForgeResult<String> {
    serde_json::to_string(value).map_err(|source| ForgeError::Json {
        file: PathBuf::from(file),
        source,
    })
}

/// Render the CommonJS-compatible `emoji_codes` module
pub fn render_codes_module(codes: &EmojiCodes, file: &str) -> ForgeResult<String> {
    let exports = [
        ("names", to_json(file, &codes.names)?),
        ("codepoints", to_json(file, &codes.codepoints)?),
        ("name_to_codepoint", to_json(file, &codes.name_to_codepoint)?),
        ("codepoint_to_name", to_json(file, &codes.codepoint_to_name)?),
        ("emoji_catalog", to_json(file, &codes.emoji_catalog)?),
        ("patched_css_classes", to_json(file, &codes.patched_css_classes)?),
    ];

    let mut module = String::from("var emoji_codes = (function () {\nvar exports = {};\n\n");
    for (name, json) in exports {
        module.push_str(&format!("exports.{} = {};\n\n", name, json));
    }
    module.push_str(
        "return exports;\n}());\nif (typeof module !== 'undefined') {\n    module.exports = emoji_codes;\n}\n",
    );
    Ok(module)
}

/// Render a flat JSON map file
pub fn render_json_map<T: Serialize>(value: &T, file: &str) -> ForgeResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|source| ForgeError::Json {
            file: PathBuf::from(file),
            source,
        })
}
