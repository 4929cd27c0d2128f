//! Command-line interface for scoring single images or whole directories

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::detection::classifier::{DetectionResult, score_image};
use crate::io::configuration::DEFAULT_MAX_UPLOAD_BYTES;
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::image::{is_image_path, load_sample};
use crate::io::progress::ProgressManager;
use crate::io::report::{BatchSummary, render_report};

#[derive(Parser)]
#[command(name = "fakescope")]
#[command(
    author,
    version,
    about = "Score images for signs of generative-model output"
)]
/// Command-line arguments for the image scorer
pub struct Cli {
    /// Image file or directory of images to score
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every analyzer measurement
    #[arg(short, long)]
    pub verbose: bool,

    /// Largest accepted file size in bytes
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_bytes: u64,

    /// Print label counts after the batch
    #[arg(short, long)]
    pub summary: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Scores every target image and writes a report per image
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the target, writing reports to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the target or parameters are invalid, a single
    /// target file cannot be scored, or stdout cannot be written
    pub fn process(&mut self) -> Result<BatchSummary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Process the target, writing reports to `out`
    ///
    /// A single target file must score successfully. In directory mode,
    /// files that fail are logged and counted instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the target or parameters are invalid, a single
    /// target file cannot be scored, or `out` cannot be written
    pub fn process_to<W: Write>(&mut self, out: &mut W) -> Result<BatchSummary> {
        if self.cli.max_bytes == 0 {
            return Err(invalid_parameter(
                "max-bytes",
                &self.cli.max_bytes,
                &"must be greater than zero",
            ));
        }

        let single_file = self.cli.target.is_file();
        let files = self.collect_files()?;
        let mut summary = BatchSummary::default();

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "no images to score");
            return Ok(summary);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            match self.process_file(file) {
                Ok(result) => {
                    summary.record(result.label);
                    let report = render_report(&display_name(file), &result);
                    self.write_out(out, &report)?;
                }
                Err(error) if !single_file => {
                    tracing::warn!(path = %file.display(), %error, "skipping image");
                    summary.record_failure();
                }
                Err(error) => {
                    self.finish_progress();
                    return Err(error);
                }
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        self.finish_progress();

        if self.cli.summary {
            let line = format!("{}\n", summary.render());
            self.write_out(out, &line)?;
        }

        tracing::info!(
            total = summary.total(),
            failed = summary.failed,
            "batch finished"
        );
        Ok(summary)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(target).map_err(file_system(target, "read directory"))?;
            for entry in entries {
                let path = entry.map_err(file_system(target, "read directory"))?.path();
                if path.is_file() && is_image_path(&path) {
                    files.push(path);
                } else {
                    tracing::debug!(path = %path.display(), "not an image, ignoring");
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn process_file(&self, path: &Path) -> Result<DetectionResult> {
        let sample = load_sample(path, self.cli.max_bytes)?;
        let result = score_image(&sample);
        tracing::info!(
            path = %path.display(),
            label = %result.label,
            confidence = result.confidence,
            "scored image"
        );
        Ok(result)
    }

    fn write_out<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        let mut write = || out.write_all(text.as_bytes());
        let written = match self.progress_manager {
            Some(ref pm) => pm.suspend(write),
            None => write(),
        };
        written.map_err(file_system("<stdout>", "write report"))
    }

    fn finish_progress(&self) {
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}
