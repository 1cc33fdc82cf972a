/// Years-of-experience band for one job level.
#[derive(Debug, Clone, Copy)]
struct LevelRequirement {
    min: f64,
    ideal: f64,
}

/// Unrecognized levels fall back to `mid` so a malformed posting still
/// scores instead of failing.
fn level_requirement(experience_level: &str) -> LevelRequirement {
    match experience_level {
        "entry" => LevelRequirement { min: 0.0, ideal: 1.0 },
        "senior" => LevelRequirement { min: 5.0, ideal: 8.0 },
        "executive" => LevelRequirement {
            min: 10.0,
            ideal: 15.0,
        },
        _ => LevelRequirement { min: 2.0, ideal: 4.0 },
    }
}

/// Score resume years against a job's experience level.
///
/// At or past the ideal the score decays mildly for overqualification
/// with a 0.9 floor; between min and ideal it interpolates linearly from
/// 0.6 to 1.0; below min it decays exponentially with a 0.1 floor.
pub fn calculate_experience_match(resume_years: u32, experience_level: &str) -> f64 {
    let req = level_requirement(experience_level);
    let years = resume_years as f64;

    if years >= req.ideal {
        let excess = years - req.ideal;
        return (1.0 - excess * 0.02).max(0.9);
    }

    if years >= req.min {
        return 0.6 + 0.4 * (years - req.min) / (req.ideal - req.min);
    }

    let deficit = req.min - years;
    (0.6 * (-deficit * 0.5).exp()).max(0.1)
}
