// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crate::{Algorithm, Error, Result};

use log::debug;
use primitives::hash::{Hash, HashInfo};

/// Output form of the one-shot functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// The digest bytes.
    #[default]
    Raw,
    /// The digest as lowercase ASCII hex.
    Hex,
}

impl Encoding {
    pub fn encode(self, raw: Vec<u8>) -> Vec<u8> {
        match self {
            Encoding::Raw => raw,
            Encoding::Hex => hex::encode(raw).into_bytes(),
        }
    }
}

/// Adapter exposing one of the supported digests through the [`Hash`] trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digester {
    algorithm: Algorithm,
}

impl Digester {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Hashes `data` into a freshly allocated buffer.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.algorithm.hasher();
        hasher.update(data);
        hasher.finalize().into_vec()
    }
}

impl From<Algorithm> for Digester {
    fn from(algorithm: Algorithm) -> Self {
        Self::new(algorithm)
    }
}

impl Hash for Digester {
    type Error = Error;

    fn info(&self) -> HashInfo {
        HashInfo {
            id: self.algorithm.name(),
            hash_len: self.algorithm.digest_len(),
            block_len: self.algorithm.block_len(),
        }
    }

    fn hash_parts(&self, buf: &mut [u8], parts: &[&[u8]]) -> Result<usize> {
        let len = self.algorithm.digest_len();
        if buf.len() < len {
            return Err(Error::InvalidArgument("Buffer is too small".into()));
        }

        let mut hasher = self.algorithm.hasher();
        parts.iter().for_each(|part| hasher.update(part));
        hasher
            .finalize_into_reset(&mut buf[..len])
            .map_err(|e| Error::InvalidArgument(e.to_string()))?;

        Ok(len)
    }
}

/// Hashes `data` with the digest called `algorithm`.
///
/// Fails with [`Error::UnsupportedAlgorithm`] if no digest of that name exists.
pub fn digest(data: &[u8], algorithm: &str, encoding: Encoding) -> Result<Vec<u8>> {
    let algorithm: Algorithm = algorithm.parse()?;
    debug!("digest with {} ({:?})", algorithm, encoding);

    Ok(encoding.encode(Digester::new(algorithm).digest(data)))
}
