//! Domain Services
//!
//! Stateless transformations from the emoji dataset to generated artifacts.

pub mod aliases;
pub mod catalog;
pub mod codes_module;
pub mod name_order;
pub mod sprite_css;

pub use aliases::AliasTable;
pub use catalog::{build_catalog, codepoint_to_name, patched_css_classes};
pub use codes_module::{render_codes_module, render_json_map, EmojiCodes};
pub use name_order::{picker_order, pin_thumbs, THUMBS_DOWN, THUMBS_UP};
pub use sprite_css::{position_rule, render_sprite_css, sheet_file_name};
