use super::models::scene::WheelScene;
use phf::{Map, phf_map};

// Eisenberg consensus hydrophobicity scale.
static EISENBERG_HYDROPHOBICITY: Map<char, f64> = phf_map! {
    'A' => 0.62, 'R' => -2.53, 'N' => -0.78, 'D' => -0.90, 'C' => 0.29,
    'Q' => -0.85, 'E' => -0.74, 'G' => 0.48, 'H' => -0.40, 'I' => 1.38,
    'L' => 1.06, 'K' => -1.50, 'M' => 0.64, 'F' => 1.19, 'P' => 0.12,
    'S' => -0.18, 'T' => -0.05, 'W' => 0.81, 'Y' => 0.26, 'V' => 1.08,
};

/// Hydrophobicity of a residue code; unknown codes are neutral.
pub fn hydrophobicity(code: char) -> f64 {
    EISENBERG_HYDROPHOBICITY
        .get(&code.to_ascii_uppercase())
        .copied()
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixProfile {
    pub mean_hydrophobicity: f64,
    /// Magnitude of the mean hydrophobic moment vector (Eisenberg µH).
    pub hydrophobic_moment: f64,
    /// Direction of the moment vector in radians, `[0, 2π)`. Points at the
    /// hydrophobic face of the wheel.
    pub moment_angle: f64,
}

pub fn profile(scene: &WheelScene) -> HelixProfile {
    let placements = scene.placements();
    let n = placements.len().max(1) as f64;

    let (sum, sum_x, sum_y) = placements.iter().fold((0.0, 0.0, 0.0), |(s, x, y), p| {
        let h = hydrophobicity(p.code);
        (s + h, x + h * p.angle.cos(), y + h * p.angle.sin())
    });

    let (mx, my) = (sum_x / n, sum_y / n);
    HelixProfile {
        mean_hydrophobicity: sum / n,
        hydrophobic_moment: mx.hypot(my),
        moment_angle: my.atan2(mx).rem_euclid(std::f64::consts::TAU),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::Sequence;

    fn profile_of(raw: &str, step: f64) -> HelixProfile {
        let scene = WheelScene::build(&Sequence::new(raw).unwrap(), step, 1.0).unwrap();
        profile(&scene)
    }

    #[test]
    fn hydrophobicity_uses_the_consensus_scale() {
        assert_eq!(hydrophobicity('I'), 1.38);
        assert_eq!(hydrophobicity('r'), -2.53);
        assert_eq!(hydrophobicity('X'), 0.0);
    }

    #[test]
    fn homopolymer_on_a_full_turn_has_no_moment() {
        let p = profile_of("LLLL", 90.0);
        assert!((p.mean_hydrophobicity - 1.06).abs() < 1e-12);
        assert!(p.hydrophobic_moment < 1e-12);
    }

    #[test]
    fn single_residue_moment_points_at_that_residue() {
        let p = profile_of("I", 100.0);
        assert!((p.hydrophobic_moment - 1.38).abs() < 1e-12);
        assert!(p.moment_angle.abs() < 1e-12);
    }

    #[test]
    fn amphipathic_pattern_has_a_larger_moment_than_a_scrambled_one() {
        // Leucines at i, i+3, i+4, i+7 share one face of an alpha-helix.
        let amphipathic = profile_of("LKKLLKKLKKLLKKL", 100.0);
        let scrambled = profile_of("LLLLLLLKKKKKKKK", 100.0);
        assert!(amphipathic.hydrophobic_moment > scrambled.hydrophobic_moment);
    }

    #[test]
    fn moment_points_toward_the_hydrophobic_residue() {
        // With a 90° step, the only hydrophobic residue sits at 180°.
        let p = profile_of("KKIK", 90.0);
        assert!((p.moment_angle - std::f64::consts::PI).abs() < 0.5);
    }
}
