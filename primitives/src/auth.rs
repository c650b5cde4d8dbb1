// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

/// Message Authentication Code information block
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct MessageAuthCodeInfo {
    /// the ID for the MAC
    pub id: &'static str,
    /// length of the MAC
    pub len: usize,
    /// the block length the key is padded to
    pub block_len: usize,
    /// A range of the supported key lengths
    pub key_lens: Range<usize>,
}

/// a Message authentication interface (MAC) that is stateless and a one shot.
pub trait MessageAuthCode {
    /// The error returned when authentication fails
    type Error;

    /// get the info about the MAC
    fn info(&self) -> MessageAuthCodeInfo;

    /// authenticate the `data` using the `key` through the `buf` buffer. Returns the MAC length in a `Result`
    fn auth(&self, buf: &mut [u8], data: &[u8], key: &[u8]) -> Result<usize, Self::Error>;
}
