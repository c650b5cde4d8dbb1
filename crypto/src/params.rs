// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crate::{pbkdf2::validate, Algorithm, BlockSize, Pbkdf2, Result};

use serde::{Deserialize, Serialize};

/// A complete set of PBKDF2 settings that can be kept in a configuration file.
///
/// ```
/// use keystretch::{Algorithm, Params};
///
/// let params: Params = serde_json::from_str(r#"{ "iterations": 2, "key_len": 16, "algorithm": "sm3" }"#).unwrap();
/// assert_eq!(params.algorithm, Algorithm::Sm3);
/// assert_eq!(params.derive(b"password", b"salt").unwrap().len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub iterations: u32,
    pub key_len: usize,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub block_size: BlockSize,
    #[serde(default)]
    pub parallel: bool,
}

impl Params {
    pub fn new(iterations: u32, key_len: usize) -> Self {
        Self {
            iterations,
            key_len,
            algorithm: Algorithm::default(),
            block_size: BlockSize::default(),
            parallel: false,
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn block_size(mut self, block_size: BlockSize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate(self.iterations, self.key_len, self.algorithm.digest_len())
    }

    pub fn pbkdf2(&self) -> Pbkdf2 {
        Pbkdf2::with_block_size(self.algorithm, self.block_size).parallel(self.parallel)
    }

    pub fn derive(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        self.validate()?;
        self.pbkdf2().derive_key(password, salt, self.iterations, self.key_len)
    }
}
