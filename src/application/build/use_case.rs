//! Build Use Case
//!
//! Orchestrates the build flow:
//! 1. Compute the cache stamp from the tracked inputs
//! 2. Short-circuit when a previous run completed the same stamp
//! 3. Rasterize glyphs into a scratch directory inside the cache root
//! 4. Generate stylesheets and lookup tables
//! 5. Materialize everything into a staging directory next to the scratch area
//! 6. Swap the staged tree in as the cache directory
//! 7. Write the success stamp, then publish the served-assets link
//!
//! Nothing is installed, stamped or published unless every earlier step
//! succeeded. A forced rebuild drops the old success stamp before it starts.

use std::path::Path;

use crate::application::generate::{generate_artifacts, GenerateInputs};
use crate::application::materialize::{publish, MaterializeRequest, Materializer, IMAGES_DIR};
use crate::application::rasterize::Rasterizer;
use crate::config::BuildContext;
use crate::domain::ports::{
    BuildEvent, BuildEventSink, FallbackRenderer, FileSystem, GlyphSourceLoader, NoopEventSink,
};
use crate::error::ForgeResult;
use crate::infrastructure::repositories::{CacheStore, DatasetRepository};

use super::options::BuildOptions;
use super::result::{BuildResult, StampInfo};

const SCRATCH_PREFIX: &str = ".emojiforge-";
const FONT_DUMP_DIR: &str = "font";
const STAGED_DIR: &str = "staged";
const PREVIOUS_DIR: &str = "previous";

/// Build use case - parameterized by its ports
pub struct BuildUseCase<'a, FS: FileSystem> {
    fs: &'a FS,
    loader: &'a dyn GlyphSourceLoader,
    fallback: &'a dyn FallbackRenderer,
}

impl<'a, FS: FileSystem> BuildUseCase<'a, FS> {
    pub fn new(
        fs: &'a FS,
        loader: &'a dyn GlyphSourceLoader,
        fallback: &'a dyn FallbackRenderer,
    ) -> Self {
        Self {
            fs,
            loader,
            fallback,
        }
    }

    /// Compute the cache stamp of the current inputs
    pub fn stamp(&self, ctx: &BuildContext, options: &BuildOptions) -> ForgeResult<StampInfo> {
        stamp_info(self.fs, ctx, options)
    }

    /// Execute the build without event reporting
    pub fn execute(&self, ctx: &BuildContext, options: &BuildOptions) -> ForgeResult<BuildResult> {
        self.execute_with_events(ctx, options, &NoopEventSink)
    }

    /// Execute the build, reporting progress to `events`.
    ///
    /// Structural failures return `Err`; glyph and link failures come back
    /// in [`BuildResult::errors`].
    pub fn execute_with_events(
        &self,
        ctx: &BuildContext,
        options: &BuildOptions,
        events: &dyn BuildEventSink,
    ) -> ForgeResult<BuildResult> {
        let repo = DatasetRepository::new(self.fs);
        let store = CacheStore::new(self.fs, &ctx.cache_root);

        let info = stamp_info(self.fs, ctx, options)?;
        let emoji_map = repo.load_emoji_map(&ctx.emoji_map)?;
        let mut result = BuildResult::new(info.stamp.clone(), info.cache_dir.clone());

        events.on_event(BuildEvent::Started {
            stamp: info.stamp.to_string(),
            cache_dir: info.cache_dir.clone(),
            emoji_count: emoji_map.len(),
        });

        if info.is_complete() && !options.force {
            log::info!("cache {} is complete, skipping generation", info.stamp.short());
            events.on_event(BuildEvent::CacheHit {
                cache_dir: info.cache_dir.clone(),
            });
            result.cached = true;
            self.publish_link(ctx, &mut result, events);
            events.on_event(BuildEvent::Completed {
                success: result.is_success(),
                cached: true,
            });
            return Ok(result);
        }

        if info.is_complete() {
            log::info!("forced rebuild, invalidating cache {}", info.stamp.short());
            store.invalidate(&info.stamp)?;
        }

        let records = repo.load_dataset(&ctx.dataset_file())?;
        let legacy = repo.load_legacy_reactions(&ctx.unified_reactions)?;

        self.fs.create_dir_all(&ctx.cache_root)?;
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(&ctx.cache_root)?;
        log::debug!("scratch directory {}", scratch.path().display());

        let dump_dir = scratch.path().join(FONT_DUMP_DIR);
        self.fs.create_dir_all(&dump_dir)?;
        let source = self.loader.load(&ctx.font, &dump_dir)?;
        events.on_event(BuildEvent::GlyphTableLoaded {
            glyph_count: source.glyph_table().len(),
        });

        let work_images = scratch.path().join(IMAGES_DIR);
        let report = Rasterizer::new(self.fs, source.as_ref(), self.fallback, events)
            .run(&emoji_map, &work_images)?;

        for failure in &report.failures {
            result.errors.push(format!(
                "missing glyph for {} ({}): {}",
                failure.names.join(", "),
                failure.codepoint,
                failure.reason
            ));
        }
        for failure in &report.link_failures {
            result
                .errors
                .push(format!("cannot link {}: {}", failure.link.display(), failure.error));
        }
        let glyphs_ok = report.failed_count() == 0;
        result.rasterize = Some(report);

        if !glyphs_ok {
            events.on_event(BuildEvent::Completed {
                success: false,
                cached: false,
            });
            return Ok(result);
        }

        let artifacts = generate_artifacts(&GenerateInputs {
            emoji_map: &emoji_map,
            records: &records,
            legacy: &legacy,
            emoji_sets: &ctx.build.emoji_sets,
            primary_set: &ctx.build.primary_set,
            sheet_file: &ctx.build.sheet_file,
        })?;

        let sheets = ctx
            .build
            .emoji_sets
            .iter()
            .map(|set| (ctx.sheet_source(set), ctx.sheet_file(set)))
            .collect();
        let staged = scratch.path().join(STAGED_DIR);
        let materialized = Materializer::new(self.fs, events).run(&MaterializeRequest {
            work_images: &work_images,
            cache_dir: &staged,
            brand_dir: &ctx.brand_assets,
            brand_assets: &ctx.build.brand_assets,
            sheets,
            artifacts: &artifacts,
        })?;
        for failure in &materialized.link_failures {
            result
                .errors
                .push(format!("cannot link {}: {}", failure.link.display(), failure.error));
        }
        result.materialize = Some(materialized);

        if result.is_success() {
            self.install(&staged, &info.cache_dir, &scratch.path().join(PREVIOUS_DIR))?;
            store.mark_complete(&info.stamp, &info.dataset_version, &options.tool_version)?;
            self.publish_link(ctx, &mut result, events);
        }

        events.on_event(BuildEvent::Completed {
            success: result.is_success(),
            cached: false,
        });
        Ok(result)
    }

    /// Move the staged tree to `cache_dir`. An existing directory is moved
    /// aside to `previous` first, inside the scratch area that gets dropped.
    fn install(&self, staged: &Path, cache_dir: &Path, previous: &Path) -> ForgeResult<()> {
        if self.fs.exists(cache_dir) {
            self.fs.rename(cache_dir, previous)?;
        }
        self.fs.rename(staged, cache_dir)?;
        log::debug!("installed {}", cache_dir.display());
        Ok(())
    }

    fn publish_link(&self, ctx: &BuildContext, result: &mut BuildResult, events: &dyn BuildEventSink) {
        match publish(self.fs, &result.cache_dir, &ctx.served_link) {
            Ok(()) => {
                result.published = true;
                events.on_event(BuildEvent::Published {
                    link: ctx.served_link.clone(),
                    target: result.cache_dir.clone(),
                });
            }
            Err(e) => {
                log::warn!("{}", e);
                events.on_event(BuildEvent::LinkFailed {
                    link: ctx.served_link.clone(),
                    error: e.to_string(),
                });
                result.errors.push(e.to_string());
            }
        }
    }
}

/// Compute the cache stamp of the current inputs and check for a previous
/// successful run. Needs no glyph source or renderer.
pub fn stamp_info<FS: FileSystem>(
    fs: &FS,
    ctx: &BuildContext,
    options: &BuildOptions,
) -> ForgeResult<StampInfo> {
    let repo = DatasetRepository::new(fs);
    let store = CacheStore::new(fs, &ctx.cache_root);

    let dataset_version = repo.dataset_version(&ctx.manifest, &ctx.build.dataset_package)?;
    let stamp = store.compute_stamp(&ctx.tracked_inputs(), &dataset_version, &options.tool_version)?;
    let cache_dir = store.cache_dir(&stamp);
    let complete = store.is_complete(&stamp);
    let success = if complete { store.read_success(&stamp) } else { None };

    Ok(StampInfo {
        stamp,
        dataset_version,
        cache_dir,
        complete,
        success,
    })
}
