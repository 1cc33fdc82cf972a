/// Fixed sub-score weights for the overall match score.
/// Skills dominate; title is a tiebreaker. These are the product's
/// tuned constants and must sum to 1.0 before the final cap.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.40,
    experience: 0.30,
    location: 0.20,
    title: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub title: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
