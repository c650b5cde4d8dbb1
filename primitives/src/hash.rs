// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

/// An information block describing a Hash.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct HashInfo {
    /// A id of hash
    pub id: &'static str,
    /// The hash's length
    pub hash_len: usize,
    /// The length of the blocks consumed by the compression function
    pub block_len: usize,
}

/// A one shot Hash interface
pub trait Hash {
    /// The error returned when hashing fails
    type Error;

    /// Get the information block that describes the hash
    fn info(&self) -> HashInfo;

    /// hashes data and returns the hash length. `buf` contains the outgoing hashed data.
    fn hash(&self, buf: &mut [u8], data: &[u8]) -> Result<usize, Self::Error> {
        self.hash_parts(buf, &[data])
    }

    /// hashes the concatenation of `parts` without materializing it and returns the hash length.
    fn hash_parts(&self, buf: &mut [u8], parts: &[&[u8]]) -> Result<usize, Self::Error>;
}
