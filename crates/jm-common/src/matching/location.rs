use crate::Job;

/// Location compatibility without geocoding: remote jobs score a flat
/// 0.9, location strings that advertise remote/anywhere score 1.0, and
/// everything else gets a neutral 0.7. No distance calculation is
/// performed.
pub fn calculate_location_match(job: &Job) -> f64 {
    if job.remote_option {
        return 0.9;
    }

    let location = job.location.to_lowercase();
    if location.contains("remote") || location.contains("anywhere") {
        return 1.0;
    }

    0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_at(location: &str, remote: bool) -> Job {
        Job {
            location: location.into(),
            remote_option: remote,
            ..Job::default()
        }
    }

    #[test]
    fn remote_option_scores_exactly_point_nine() {
        // The flag wins even over a location string that would score 1.0.
        assert_eq!(calculate_location_match(&job_at("Remote", true)), 0.9);
        assert_eq!(calculate_location_match(&job_at("Austin, TX", true)), 0.9);
    }

    #[test]
    fn remote_keywords_in_location_score_full() {
        assert_eq!(calculate_location_match(&job_at("Remote (US)", false)), 1.0);
        assert_eq!(calculate_location_match(&job_at("Anywhere", false)), 1.0);
    }

    #[test]
    fn onsite_locations_get_the_neutral_default() {
        assert_eq!(
            calculate_location_match(&job_at("San Francisco, CA", false)),
            0.7
        );
        assert_eq!(calculate_location_match(&job_at("", false)), 0.7);
    }
}
