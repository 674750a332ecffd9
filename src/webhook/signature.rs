//! Webhook signatures
//!
//! The platform signs every webhook body with HMAC and sends the result in
//! `x-webmini-signature` as `algorithm=hexdigest`, e.g. `sha256=9f86d0...`.

use crate::error::AppError;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::str::FromStr;

/// Hash functions accepted in the signature header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    /// HMAC-SHA1
    Sha1,
    /// HMAC-SHA224
    Sha224,
    /// HMAC-SHA256
    Sha256,
    /// HMAC-SHA384
    Sha384,
    /// HMAC-SHA512
    Sha512,
}

impl SignatureAlgorithm {
    /// Name used in the signature header
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha224 => "sha224",
            SignatureAlgorithm::Sha256 => "sha256",
            SignatureAlgorithm::Sha384 => "sha384",
            SignatureAlgorithm::Sha512 => "sha512",
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" => Ok(SignatureAlgorithm::Sha1),
            "sha224" => Ok(SignatureAlgorithm::Sha224),
            "sha256" => Ok(SignatureAlgorithm::Sha256),
            "sha384" => Ok(SignatureAlgorithm::Sha384),
            "sha512" => Ok(SignatureAlgorithm::Sha512),
            other => Err(AppError::InvalidInput(format!(
                "unsupported signature algorithm: {other}"
            ))),
        }
    }
}

/// A parsed `algorithm=hexdigest` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Hash function the digest was produced with
    pub algorithm: SignatureAlgorithm,
    /// Raw digest bytes
    pub digest: Vec<u8>,
}

impl Signature {
    /// Checks the digest against `body` signed with `secret`
    ///
    /// The comparison runs in constant time.
    #[must_use]
    pub fn verify(&self, secret: &[u8], body: &[u8]) -> bool {
        match self.algorithm {
            SignatureAlgorithm::Sha1 => verify_mac::<Hmac<Sha1>>(secret, body, &self.digest),
            SignatureAlgorithm::Sha224 => verify_mac::<Hmac<Sha224>>(secret, body, &self.digest),
            SignatureAlgorithm::Sha256 => verify_mac::<Hmac<Sha256>>(secret, body, &self.digest),
            SignatureAlgorithm::Sha384 => verify_mac::<Hmac<Sha384>>(secret, body, &self.digest),
            SignatureAlgorithm::Sha512 => verify_mac::<Hmac<Sha512>>(secret, body, &self.digest),
        }
    }
}

impl FromStr for Signature {
    type Err = AppError;

    fn from_str(header: &str) -> Result<Self, Self::Err> {
        let (algorithm, digest) = header.split_once('=').ok_or_else(|| {
            AppError::InvalidInput(format!("invalid signature header format: {header}"))
        })?;
        let algorithm = algorithm.parse()?;
        let digest = hex::decode(digest)
            .map_err(|e| AppError::InvalidInput(format!("invalid signature digest: {e}")))?;
        Ok(Signature { algorithm, digest })
    }
}

fn verify_mac<M: Mac + KeyInit>(secret: &[u8], body: &[u8], expected: &[u8]) -> bool {
    match <M as Mac>::new_from_slice(secret) {
        Ok(mut mac) => {
            mac.update(body);
            mac.verify_slice(expected).is_ok()
        }
        Err(_) => false,
    }
}

fn compute_mac<M: Mac + KeyInit>(secret: &[u8], body: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|e| AppError::InvalidInput(format!("invalid hmac key: {e}")))?;
    mac.update(body);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Signs `body` with `secret`, returning the lowercase hex digest
pub fn sign(algorithm: SignatureAlgorithm, secret: &[u8], body: &[u8]) -> Result<String, AppError> {
    let digest = match algorithm {
        SignatureAlgorithm::Sha1 => compute_mac::<Hmac<Sha1>>(secret, body)?,
        SignatureAlgorithm::Sha224 => compute_mac::<Hmac<Sha224>>(secret, body)?,
        SignatureAlgorithm::Sha256 => compute_mac::<Hmac<Sha256>>(secret, body)?,
        SignatureAlgorithm::Sha384 => compute_mac::<Hmac<Sha384>>(secret, body)?,
        SignatureAlgorithm::Sha512 => compute_mac::<Hmac<Sha512>>(secret, body)?,
    };
    Ok(hex::encode(digest))
}

/// Formats a digest the way the platform sends it
#[must_use]
pub fn format_signature_header(algorithm: SignatureAlgorithm, hex_digest: &str) -> String {
    format!("{}={}", algorithm.as_str(), hex_digest)
}
