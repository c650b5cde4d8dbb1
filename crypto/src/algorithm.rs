// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crate::Error;

use ::digest::DynDigest;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The block length HMAC pads keys to regardless of the digest, unless [`BlockSize::Native`] is selected.
pub const LEGACY_BLOCK_LEN: usize = 64;

/// The digest used when none is named.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Sha256;

/// The digests the adapter can compute, named by their lowercase identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sm3,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sm3,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sm3 => "sm3",
        }
    }

    /// Output length of the digest in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 | Algorithm::Sm3 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// Block length of the digest's compression function in bytes.
    pub const fn block_len(self) -> usize {
        match self {
            Algorithm::Sha384 | Algorithm::Sha512 => 128,
            _ => 64,
        }
    }

    pub(crate) const fn hmac_id(self) -> &'static str {
        match self {
            Algorithm::Md5 => "HMAC-MD5",
            Algorithm::Sha1 => "HMAC-SHA1",
            Algorithm::Sha224 => "HMAC-SHA224",
            Algorithm::Sha256 => "HMAC-SHA256",
            Algorithm::Sha384 => "HMAC-SHA384",
            Algorithm::Sha512 => "HMAC-SHA512",
            Algorithm::Sm3 => "HMAC-SM3",
        }
    }

    pub(crate) const fn pbkdf2_id(self) -> &'static str {
        match self {
            Algorithm::Md5 => "PBKDF2-HMAC-MD5",
            Algorithm::Sha1 => "PBKDF2-HMAC-SHA1",
            Algorithm::Sha224 => "PBKDF2-HMAC-SHA224",
            Algorithm::Sha256 => "PBKDF2-HMAC-SHA256",
            Algorithm::Sha384 => "PBKDF2-HMAC-SHA384",
            Algorithm::Sha512 => "PBKDF2-HMAC-SHA512",
            Algorithm::Sm3 => "PBKDF2-HMAC-SM3",
        }
    }

    // SM3 is not part of the SHA family crates and goes through the `sm3` crate.
    pub(crate) fn hasher(self) -> Box<dyn DynDigest> {
        match self {
            Algorithm::Md5 => Box::new(md5::Md5::default()),
            Algorithm::Sha1 => Box::new(sha1::Sha1::default()),
            Algorithm::Sha224 => Box::new(sha2::Sha224::default()),
            Algorithm::Sha256 => Box::new(sha2::Sha256::default()),
            Algorithm::Sha384 => Box::new(sha2::Sha384::default()),
            Algorithm::Sha512 => Box::new(sha2::Sha512::default()),
            Algorithm::Sm3 => Box::new(sm3::Sm3::default()),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Algorithm> for String {
    fn from(a: Algorithm) -> Self {
        a.name().to_string()
    }
}

/// How HMAC chooses the block length keys are padded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSize {
    /// Always [`LEGACY_BLOCK_LEN`] bytes.
    #[default]
    Legacy,
    /// The digest's own block length, e.g. 128 bytes for SHA-512.
    Native,
}

impl BlockSize {
    pub fn resolve(self, native_block_len: usize) -> usize {
        match self {
            BlockSize::Legacy => LEGACY_BLOCK_LEN,
            BlockSize::Native => native_block_len,
        }
    }
}
