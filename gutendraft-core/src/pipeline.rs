//! The end-to-end drafting pipeline
//!
//! Strictly sequential: load, normalize, scaffold, inject, emit, toolchain.
//! Every stage either fully completes or the run aborts.

use crate::config::Config;
use crate::emit::emit_chapters;
use crate::error::Result;
use crate::inject::inject_metadata;
use crate::normalize::Normalizer;
use crate::scaffold::scaffold;
use crate::toolchain::Toolchain;
use crate::types::{BookMetadata, SourceDocument, SourceFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// Runs the full pipeline for a single document
#[derive(Debug, Default)]
pub struct Pipeline {
    config: Config,
    normalizer: Normalizer,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
        }
    }

    /// Use a normalizer with a custom boilerplate pattern table
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Run the pipeline; returns the finished project directory.
    ///
    /// Normalization happens before any directory is created, so bad input
    /// never leaves a project behind. If metadata injection or chapter
    /// emission fails, the half-written project directory is removed before
    /// the error propagates. A toolchain failure leaves the project in place,
    /// since fixing toolchain findings takes human judgment.
    pub fn run(
        &self,
        input: &Path,
        format: SourceFormat,
        meta: &BookMetadata,
    ) -> Result<PathBuf> {
        let doc = SourceDocument::load(input, format)?;
        tracing::info!("Loaded {} ({} bytes)", input.display(), doc.text.len());

        let chapters = self.normalizer.normalize(&doc)?;
        tracing::info!("Identified {} chapters", chapters.len());

        let layout = scaffold(&self.config.output_root, meta)?;

        let populate: Result<()> = (|| {
            inject_metadata(&layout, meta)?;
            emit_chapters(&layout, &chapters)?;
            Ok(())
        })();
        if let Err(err) = populate {
            let _ = fs::remove_dir_all(&layout.root);
            return Err(err);
        }

        if self.config.run_toolchain {
            let toolchain = match &self.config.se_command {
                Some(path) => Toolchain::with_command(path),
                None => Toolchain::discover()?,
            };
            toolchain.run_release_sequence(&layout.root)?;
        }

        tracing::info!("Draft ready at {}", layout.root.display());
        Ok(layout.root)
    }
}
