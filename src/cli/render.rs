//! Render command: one frame's skeleton as SVG.

use crate::cli::common::{check_frame_index, load_config, load_session, CliResult};
use crate::parser::extract_keypoints;
use crate::render::{render_skeleton, to_svg, RecordingSurface};
use crate::services::MotionFileService;
use clap::Args;
use std::path::PathBuf;

/// Render a frame's skeleton to SVG
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to motion CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Frame index to render
    #[arg(long, value_name = "N")]
    pub frame: usize,

    /// Output SVG file (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let (session, _) = load_session(&self.file, &config)?;
        check_frame_index(&session, self.frame)?;

        let keypoints = session
            .frames()
            .get(self.frame)
            .map(extract_keypoints)
            .unwrap_or_default();

        let mut surface = RecordingSurface::default();
        let summary = render_skeleton(&mut surface, &keypoints, &config.render.style());
        let svg = to_svg(&surface);

        match &self.output {
            Some(path) => {
                MotionFileService::write_output(path, &svg)?;
                println!(
                    "Rendered frame {} ({} bones, {} joints) to: {}",
                    self.frame,
                    summary.edges_drawn,
                    summary.points_drawn,
                    path.display()
                );
            }
            None => print!("{svg}"),
        }
        Ok(())
    }
}
