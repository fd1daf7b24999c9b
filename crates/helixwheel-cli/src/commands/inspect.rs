use crate::cli::InspectArgs;
use crate::config::builder;
use crate::error::Result;
use helixwheel::core::analysis::HelixProfile;
use helixwheel::core::models::residue::{ResidueCategory, is_standard_residue};
use helixwheel::core::models::scene::WheelScene;
use helixwheel::workflows;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let config = builder::build_inspect_config(&args)?;
    info!("Computing wheel layout without rendering.");
    let (scene, profile) = workflows::draw::prepare(&config.sequence, &config.wheel)?;
    print!("{}", format_report(&scene, &profile));
    Ok(())
}

/// Tabulates every residue's placement followed by the hydrophobicity summary.
///
/// Codes outside the 20 standard amino acids are marked with `*`.
pub fn format_report(scene: &WheelScene, profile: &HelixProfile) -> String {
    let mut report = format!(
        "{:>4}  {:<4}  {:>8}  {:>9}  {:>9}  {}\n",
        "#", "Res", "Angle", "X", "Y", "Category"
    );
    for p in scene.placements() {
        let marker = if is_standard_residue(p.code) { ' ' } else { '*' };
        report.push_str(&format!(
            "{:>4}  {}{:<3}  {:>8.1}  {:>9.4}  {:>9.4}  {}\n",
            p.number(),
            p.label(),
            marker,
            p.angle.to_degrees(),
            p.position.x,
            p.position.y,
            p.category
        ));
    }

    let non_standard = scene
        .placements()
        .iter()
        .filter(|p| !is_standard_residue(p.code))
        .count();
    if non_standard > 0 {
        report.push_str(&format!(
            "\n* {} non-standard residue(s) classified as {}\n",
            non_standard,
            ResidueCategory::Other
        ));
    }

    report.push_str(&format!(
        "\nStep: {}°  Radius: {}\n",
        scene.step_degrees(),
        scene.radius()
    ));
    report.push_str(&format!(
        "Mean hydrophobicity <H>: {:.3}\n",
        profile.mean_hydrophobicity
    ));
    report.push_str(&format!(
        "Hydrophobic moment µH: {:.3} (toward {:.1}°)\n",
        profile.hydrophobic_moment,
        profile.moment_angle.to_degrees()
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use helixwheel::core::analysis;
    use helixwheel::core::models::sequence::Sequence;

    #[test]
    fn report_lists_each_residue_in_order() {
        let scene = WheelScene::build(&Sequence::new("kaex").unwrap(), 100.0, 1.0).unwrap();
        let report = format_report(&scene, &analysis::profile(&scene));
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[0].contains("Category"));
        assert!(lines[1].contains("K") && lines[1].contains("Basic"));
        assert!(lines[1].contains("0.0") && lines[1].contains("1.0000"));
        assert!(lines[2].contains("100.0") && lines[2].contains("Nonpolar"));
        assert!(lines[3].contains("200.0") && lines[3].contains("Acidic"));
        assert!(lines[4].contains("300.0") && lines[4].contains("Other"));
        assert!(report.contains("Hydrophobic moment µH"));
    }

    #[test]
    fn report_flags_non_standard_residues() {
        let scene = WheelScene::build(&Sequence::new("KXBL").unwrap(), 100.0, 1.0).unwrap();
        let report = format_report(&scene, &analysis::profile(&scene));
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[1].contains("K ") && !lines[1].contains('*'));
        assert!(lines[2].contains("X*"));
        assert!(lines[3].contains("B*"));
        assert!(!lines[4].contains('*'));
        assert!(report.contains("* 2 non-standard residue(s) classified as Other"));
    }

    #[test]
    fn report_omits_the_footnote_for_standard_sequences() {
        let scene = WheelScene::build(&Sequence::new("KLLK").unwrap(), 100.0, 1.0).unwrap();
        let report = format_report(&scene, &analysis::profile(&scene));
        assert!(!report.contains('*'));
    }

    #[test]
    fn run_rejects_invalid_sequences() {
        let args = InspectArgs {
            wheel: crate::cli::WheelArgs {
                sequence: "K#L".to_string(),
                ..Default::default()
            },
        };
        assert!(run(args).is_err());
    }
}
