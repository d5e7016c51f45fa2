pub mod candidate;
pub mod classify;
pub mod fingerprint;
pub mod ranking;
pub mod scanner;
pub mod session;

pub use candidate::Candidate;
pub use classify::{CLOSE_RESEMBLANCE_THRESHOLD, RANKING_CAPACITY, Tier, classify};
pub use fingerprint::{DistanceSource, FingerprintError, PerceptualHasher};
pub use ranking::BoundedRanking;
pub use scanner::{ScanError, list_candidates};
pub use session::{RankingOutcome, RankingSession};
