// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

/// information block describing the PBKDF implementation.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PbkdfInfo {
    /// the id of the PBKDF
    pub id: &'static str,
    /// A range of the supported output lengths
    pub output_lens: Range<usize>,
    /// the default CPU cost
    pub cpu_cost: u64,
    /// A range of the supported CPU costs
    pub cpu_costs: Range<u64>,
    /// default parallelism which is 0 if PBKDF does not support threading
    pub parallelism: u64,
}

/// A PBKDF
pub trait Pbkdf {
    /// The error returned when derivation fails
    type Error;

    /// returns the info of the PBKDF
    fn info(&self) -> PbkdfInfo;

    /// fills the buffer with bytes derived from the password parameterized by the CPU cost.
    fn derive(&self, buf: &mut [u8], password: &[u8], salt: &[u8], cpu_cost: u64) -> Result<(), Self::Error>;
}
