use std::path::Path;

use image::ImageReader;
use image_hasher::{HashAlg, Hasher, HasherConfig, ImageHash};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("unable to read [{path}]: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("unable to decode [{path}]: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
}

/// Produces fingerprints from picture files and normalized distances between
/// them. The ranking session only ever sees this seam, so tests can pin
/// exact distances with a table-driven source.
pub trait DistanceSource {
    type Fingerprint;

    fn extract(&self, path: &Path) -> Result<Self::Fingerprint, FingerprintError>;

    /// Dissimilarity in `[0, 1]`, lower meaning more visually alike.
    fn distance(&self, a: &Self::Fingerprint, b: &Self::Fingerprint) -> f64;
}

/// Perceptual fingerprint of one picture.
#[derive(Debug)]
pub struct Fingerprint(ImageHash);

/// Mean-hash fingerprint source. Distance is the Hamming distance between
/// two hashes divided by the hash bit width.
pub struct PerceptualHasher {
    hasher: Hasher,
}

impl PerceptualHasher {
    pub fn new() -> Self {
        Self {
            hasher: HasherConfig::new().hash_alg(HashAlg::Mean).to_hasher(),
        }
    }
}

impl Default for PerceptualHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceSource for PerceptualHasher {
    type Fingerprint = Fingerprint;

    fn extract(&self, path: &Path) -> Result<Fingerprint, FingerprintError> {
        let image = ImageReader::open(path)
            .map_err(|source| FingerprintError::Open {
                path: path.display().to_string(),
                source,
            })?
            .decode()
            .map_err(|source| FingerprintError::Decode {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Fingerprint(self.hasher.hash_image(&image)))
    }

    fn distance(&self, a: &Fingerprint, b: &Fingerprint) -> f64 {
        let bits = (a.0.as_bytes().len() * 8).max(1);
        f64::from(a.0.dist(&b.0)) / bits as f64
    }
}
