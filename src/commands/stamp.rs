//! Stamp command handler
//!
//! Prints the cache key of the current inputs without building anything.

use std::path::Path;

use anyhow::Result;

use emojiforge::application::{stamp_info, BuildOptions};
use emojiforge::infrastructure::LocalFs;

use crate::ui::json::{emit_event, events::StampEvent};

pub fn cmd_stamp(
    config: Option<&Path>,
    cache_root: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let ctx = super::load_context(config, cache_root, json)?;
    let info = stamp_info(&LocalFs::new(), &ctx, &BuildOptions::default())?;

    if json {
        let mut event = StampEvent::new(
            info.stamp.as_str(),
            &info.dataset_version,
            info.cache_dir.display().to_string(),
            info.is_complete(),
        );
        if let Some(success) = &info.success {
            event = event.with_generated_at(success.generated_at.to_rfc3339());
        }
        emit_event(&event)?;
        return Ok(());
    }

    println!("{}", info.stamp);
    eprintln!("  cache    {}", info.cache_dir.display());
    match &info.success {
        Some(success) => eprintln!("  complete {}", success.generated_at.to_rfc3339()),
        None if info.is_complete() => eprintln!("  complete"),
        None => eprintln!("  not built"),
    }
    if verbose > 0 {
        eprintln!("  dataset  {}", info.dataset_version);
        if let Some(success) = &info.success {
            eprintln!("  tool     {}", success.tool_version);
        }
    }
    Ok(())
}
