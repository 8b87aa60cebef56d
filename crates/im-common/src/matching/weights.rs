/// Fixed factor weights for the total match score.
/// Skills dominate; the other three factors share the remainder evenly.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.4,
    experience: 0.2,
    location: 0.2,
    interests: 0.2,
};

/// A posting is recommended only when its total score is strictly above this.
/// Compared as plain `f64` with no epsilon: a zero skills score with three
/// neutral factors sums to 0.30000000000000004 and is kept.
pub const INCLUSION_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub interests: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.interests
    }

    pub fn combine(&self, skills: f64, experience: f64, location: f64, interests: f64) -> f64 {
        skills * self.skills
            + experience * self.experience
            + location * self.location
            + interests * self.interests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn neutral_factors_combine_to_half() {
        let total = MATCH_WEIGHTS.combine(0.5, 0.5, 0.5, 0.5);
        assert!((total - 0.5).abs() < 1e-9);
        assert!(total > INCLUSION_THRESHOLD);
    }
}
