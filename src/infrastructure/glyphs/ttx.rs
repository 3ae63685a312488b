//! Glyph source backed by a `ttx` dump
//!
//! `ttx -z extfile` writes the font tables as XML next to one PNG per
//! embedded bitmap (`bitmaps/strike0/<glyph>.png`). The first
//! `cmap_format_12` table of the XML gives the codepoint -> glyph map.

use std::path::{Path, PathBuf};
use std::process::Command;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::entities::GlyphTable;
use crate::domain::ports::{GlyphBitmap, GlyphSource, GlyphSourceLoader};
use crate::domain::value_objects::Codepoint;
use crate::error::{ForgeError, ForgeResult};

const CMAP_TABLE: &[u8] = b"cmap_format_12";
const STRIKE_DIR: &str = "bitmaps/strike0";

/// Runs `ttx` and parses its dump
#[derive(Debug, Clone)]
pub struct TtxGlyphLoader {
    command: String,
}

impl TtxGlyphLoader {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for TtxGlyphLoader {
    fn default() -> Self {
        Self::new("ttx")
    }
}

impl GlyphSourceLoader for TtxGlyphLoader {
    fn load(&self, font: &Path, scratch: &Path) -> ForgeResult<Box<dyn GlyphSource>> {
        log::info!("dumping glyph table of {} with {}", font.display(), self.command);

        let output = Command::new(&self.command)
            .args(["-q", "-z", "extfile", "-d"])
            .arg(scratch)
            .arg(font)
            .output()
            .map_err(|e| ForgeError::Subprocess {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ForgeError::Subprocess {
                command: self.command.clone(),
                message: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let stem = font
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dump = scratch.join(format!("{}.ttx", stem));
        let xml = std::fs::read_to_string(&dump).map_err(|e| ForgeError::GlyphTable {
            file: dump.clone(),
            message: e.to_string(),
        })?;
        let table = parse_cmap_format_12(&xml).map_err(|message| ForgeError::GlyphTable {
            file: dump.clone(),
            message,
        })?;

        Ok(Box::new(TtxGlyphSource::new(table, scratch.join(STRIKE_DIR))))
    }
}

/// Glyph table plus the directory of extracted bitmaps
#[derive(Debug, Clone)]
pub struct TtxGlyphSource {
    table: GlyphTable,
    bitmap_dir: PathBuf,
}

impl TtxGlyphSource {
    pub fn new(table: GlyphTable, bitmap_dir: impl Into<PathBuf>) -> Self {
        Self {
            table,
            bitmap_dir: bitmap_dir.into(),
        }
    }
}

impl GlyphSource for TtxGlyphSource {
    fn glyph_table(&self) -> &GlyphTable {
        &self.table
    }

    fn bitmap(&self, codepoint: &Codepoint) -> ForgeResult<GlyphBitmap> {
        let glyph_name = self
            .table
            .glyph_for(codepoint)
            .ok_or_else(|| ForgeError::missing_glyph(codepoint, "not in glyph table"))?;

        let path = self.bitmap_dir.join(format!("{}.png", glyph_name));
        let png = std::fs::read(&path).map_err(|e| {
            ForgeError::missing_glyph(codepoint, format!("{}: {}", path.display(), e))
        })?;

        Ok(GlyphBitmap {
            glyph_name: glyph_name.to_string(),
            png,
        })
    }
}

/// Parse the first `cmap_format_12` table of a ttx XML dump.
pub fn parse_cmap_format_12(xml: &str) -> Result<GlyphTable, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut table = GlyphTable::new();
    let mut in_table = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == CMAP_TABLE => in_table = true,
            Ok(Event::Empty(e)) if e.name().as_ref() == CMAP_TABLE => return Ok(table),
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if in_table && e.name().as_ref() == b"map" => {
                let (scalar, glyph) = parse_map_entry(&e)?;
                table.insert(scalar, glyph);
            }
            Ok(Event::End(e)) if in_table && e.name().as_ref() == CMAP_TABLE => return Ok(table),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!("at byte {}: {}", reader.error_position(), e));
            }
            _ => {}
        }
    }

    if in_table {
        Err("unterminated cmap_format_12 table".to_string())
    } else {
        Err("no cmap_format_12 table".to_string())
    }
}

fn parse_map_entry(element: &BytesStart<'_>) -> Result<(u32, String), String> {
    let mut code = None;
    let mut name = None;

    for attr in element.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        match attr.key.as_ref() {
            b"code" => code = Some(value.into_owned()),
            b"name" => name = Some(value.into_owned()),
            _ => {}
        }
    }

    let code = code.ok_or("map entry without code")?;
    let name = name.ok_or("map entry without name")?;
    let digits = code
        .strip_prefix("0x")
        .or_else(|| code.strip_prefix("0X"))
        .unwrap_or(&code);
    let scalar = u32::from_str_radix(digits, 16).map_err(|_| format!("bad code '{}'", code))?;

    Ok((scalar, name))
}
