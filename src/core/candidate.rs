use serde::Serialize;
use std::cmp::Ordering;

/// One compared picture: its file name and its distance to the reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub name: String,
    pub distance: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}

/// Ascending by distance, ties broken by name. Two candidates that happen to
/// share a distance value stay distinct entries instead of conflating.
pub fn rank_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.name.cmp(&b.name))
}
