use crate::core::analysis::{self, HelixProfile};
use crate::core::models::scene::WheelScene;
use crate::core::models::sequence::Sequence;
use crate::core::render::{self, format::ImageFormat};
use crate::engine::config::WheelConfig;
use crate::engine::error::EngineError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct DrawResult {
    pub scene: WheelScene,
    pub profile: HelixProfile,
    pub format: ImageFormat,
    pub output: PathBuf,
}

/// Builds the scene and its hydrophobicity profile without rendering anything.
pub fn prepare(
    sequence: &Sequence,
    config: &WheelConfig,
) -> Result<(WheelScene, HelixProfile), EngineError> {
    let scene = WheelScene::build(
        sequence,
        config.geometry.step_degrees,
        config.geometry.radius,
    )?;
    let profile = analysis::profile(&scene);
    debug!(
        "Placed {} residue(s) in {} category group(s); µH = {:.3}",
        scene.placements().len(),
        scene.categories().count(),
        profile.hydrophobic_moment
    );
    Ok((scene, profile))
}

#[instrument(skip_all, name = "draw_workflow", fields(residues = sequence.len()))]
pub fn run(
    sequence: &Sequence,
    config: &WheelConfig,
    output: &Path,
) -> Result<DrawResult, EngineError> {
    info!(
        "Drawing helical wheel (step {}°, radius {}).",
        config.geometry.step_degrees, config.geometry.radius
    );

    let (scene, profile) = prepare(sequence, config)?;
    let format = render::render(&scene, &config.palette, &config.style, output)?;

    Ok(DrawResult {
        scene,
        profile,
        format,
        output: output.to_path_buf(),
    })
}
