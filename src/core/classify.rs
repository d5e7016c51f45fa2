/// Distance at or below which a picture counts as identical or a close
/// resemblance rather than merely similar.
pub const CLOSE_RESEMBLANCE_THRESHOLD: f64 = 0.12;

/// Entries kept per tier.
pub const RANKING_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    CloseResemblance,
    Similar,
}

/// Pure threshold split; never fails.
pub fn classify(distance: f64, threshold: f64) -> Tier {
    if distance <= threshold {
        Tier::CloseResemblance
    } else {
        Tier::Similar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_on_the_threshold_is_close_resemblance() {
        assert_eq!(classify(0.12, 0.12), Tier::CloseResemblance);
    }

    #[test]
    fn distance_just_above_the_threshold_is_similar() {
        assert_eq!(classify(0.1200001, 0.12), Tier::Similar);
    }

    #[test]
    fn zero_distance_is_close_resemblance() {
        assert_eq!(classify(0.0, CLOSE_RESEMBLANCE_THRESHOLD), Tier::CloseResemblance);
    }
}
