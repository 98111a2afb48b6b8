use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HasherError {
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha256,
    Sha512,
}

impl FromStr for DigestAlgorithm {
    type Err = HasherError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA256" => Ok(DigestAlgorithm::Sha256),
            "SHA512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(HasherError::UnsupportedAlgorithm(name.to_owned())),
        }
    }
}

/// One-way transform of a plaintext secret into its stored form: the base64
/// rendering of a digest over the UTF-8 bytes.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    algorithm: DigestAlgorithm,
}

impl CredentialHasher {
    /// Resolves the digest by name. Fails at startup, never per call.
    pub fn new(algorithm: &str) -> Result<Self, HasherError> {
        Ok(CredentialHasher {
            algorithm: algorithm.parse()?,
        })
    }

    pub fn hash(&self, plaintext: &str) -> String {
        match self.algorithm {
            DigestAlgorithm::Sha256 => STANDARD.encode(Sha256::digest(plaintext.as_bytes())),
            DigestAlgorithm::Sha512 => STANDARD.encode(Sha512::digest(plaintext.as_bytes())),
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        CredentialHasher {
            algorithm: DigestAlgorithm::Sha256,
        }
    }
}
