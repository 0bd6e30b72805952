use std::io;
use std::path::PathBuf;

use pwgen_generate::RngSource;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("seed file path is empty")]
    EmptyPath,
}

/// Where the draw stream comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Entropy,
    Number(u64),
    /// SHA-256 of the file contents followed by the salt.
    File { path: PathBuf, salt: String },
}

impl SeedSource {
    /// Parse `PATH[#SALT]`.
    pub fn parse_file_spec(spec: &str) -> Result<Self, SeedError> {
        let (path, salt) = spec.split_once('#').unwrap_or((spec, ""));
        if path.is_empty() {
            return Err(SeedError::EmptyPath);
        }
        Ok(SeedSource::File {
            path: PathBuf::from(path),
            salt: salt.to_string(),
        })
    }

    pub fn is_reproducible(&self) -> bool {
        !matches!(self, SeedSource::Entropy)
    }

    pub fn open(&self) -> Result<RngSource<ChaCha8Rng>, SeedError> {
        match self {
            SeedSource::Entropy => Ok(RngSource::from_entropy()),
            SeedSource::Number(seed) => Ok(RngSource::seeded(*seed)),
            SeedSource::File { path, salt } => {
                let content = std::fs::read(path).map_err(|source| SeedError::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(RngSource::from_seed_bytes(digest_seed(&content, salt)))
            }
        }
    }
}

fn digest_seed(content: &[u8], salt: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hasher.update(salt.as_bytes());
    hasher.finalize().into()
}
