use std::path::{Path, PathBuf};

use crate::core::candidate::Candidate;
use crate::core::classify::{CLOSE_RESEMBLANCE_THRESHOLD, RANKING_CAPACITY, Tier, classify};
use crate::core::fingerprint::{DistanceSource, FingerprintError, PerceptualHasher};
use crate::core::ranking::BoundedRanking;

/// Final ascending rankings of one comparison run.
#[derive(Debug)]
pub struct RankingOutcome {
    pub similar: Vec<Candidate>,
    pub close_resemblance: Vec<Candidate>,
}

/// Drives one comparison run: fingerprints the reference once, then ranks
/// every candidate against it, one tier per threshold side.
pub struct RankingSession<D: DistanceSource> {
    source: D,
    threshold: f64,
    capacity: usize,
}

impl RankingSession<PerceptualHasher> {
    pub fn new() -> Self {
        Self::with_source(PerceptualHasher::new())
    }
}

impl Default for RankingSession<PerceptualHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DistanceSource> RankingSession<D> {
    pub fn with_source(source: D) -> Self {
        Self {
            source,
            threshold: CLOSE_RESEMBLANCE_THRESHOLD,
            capacity: RANKING_CAPACITY,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn run(
        &self,
        reference: &Path,
        candidates: &[PathBuf],
    ) -> Result<RankingOutcome, FingerprintError> {
        self.run_with_progress(reference, candidates, |_| {})
    }

    /// Like `run`, invoking `on_ranked` after each candidate is placed.
    ///
    /// An unreadable reference aborts before any candidate is touched; an
    /// unreadable candidate aborts the whole run with an error naming the
    /// file. No partial rankings are ever returned.
    pub fn run_with_progress(
        &self,
        reference: &Path,
        candidates: &[PathBuf],
        mut on_ranked: impl FnMut(&Path),
    ) -> Result<RankingOutcome, FingerprintError> {
        let reference_print = self.source.extract(reference)?;

        let mut similar = BoundedRanking::new(self.capacity);
        let mut close_resemblance = BoundedRanking::new(self.capacity);

        for path in candidates {
            let print = self.source.extract(path)?;
            let distance = self.source.distance(&reference_print, &print);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let candidate = Candidate::new(name, distance);
            match classify(distance, self.threshold) {
                Tier::CloseResemblance => close_resemblance.offer(candidate),
                Tier::Similar => similar.offer(candidate),
            }
            on_ranked(path);
        }

        Ok(RankingOutcome {
            similar: similar.snapshot(),
            close_resemblance: close_resemblance.snapshot(),
        })
    }
}
