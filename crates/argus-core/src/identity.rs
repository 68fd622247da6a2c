//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers in the attestation stack. These
//! prevent identifier confusion — you cannot pass a `CheckpointId` where an
//! `AgentId` is expected, and a `CertificateId` always carries its minting
//! prefix.
//!
//! ## Security Invariant
//!
//! Type-level distinction between identifier namespaces prevents
//! cross-namespace substitution, and validated constructors keep malformed
//! identifiers out of hash preimages.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::ArgusError;

/// The fixed human-readable prefix on every certificate identifier.
pub const CERTIFICATE_ID_PREFIX: &str = "cert-";

/// Unique identifier for a monitored agent (one hash chain per agent).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    /// Generate a new random agent identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent:{}", self.0)
    }
}

/// Identifier of one recorded decision checkpoint.
///
/// Checkpoint identifiers are caller-assigned strings (the observer mints
/// them); the only format constraint is non-emptiness, enforced at
/// construction because the identifier feeds hash preimages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckpointId(String);

impl CheckpointId {
    /// Construct a checkpoint identifier, rejecting empty input.
    pub fn new(id: impl Into<String>) -> Result<Self, ArgusError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ArgusError::InvalidIdentifier(
                "checkpoint id must be non-empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CheckpointId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CheckpointId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

/// Identifier of an issued integrity certificate.
///
/// Minted as `cert-<uuid4>`; the prefix is part of the wire format and is
/// validated on parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertificateId(String);

impl CertificateId {
    /// Mint a fresh certificate identifier.
    pub fn mint() -> Self {
        Self(format!("{}{}", CERTIFICATE_ID_PREFIX, Uuid::new_v4()))
    }

    /// Parse a certificate identifier, validating the prefix and UUID body.
    pub fn parse(s: &str) -> Result<Self, ArgusError> {
        let body = s.strip_prefix(CERTIFICATE_ID_PREFIX).ok_or_else(|| {
            ArgusError::InvalidIdentifier(format!(
                "certificate id must start with {CERTIFICATE_ID_PREFIX:?}, got {s:?}"
            ))
        })?;
        Uuid::parse_str(body).map_err(|e| {
            ArgusError::InvalidIdentifier(format!("certificate id body is not a UUID: {e}"))
        })?;
        Ok(Self(s.to_string()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CertificateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CertificateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
