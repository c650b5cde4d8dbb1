// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crate::{Algorithm, BlockSize, Error, Hmac, Result};

use log::*;
use primitives::{
    auth::MessageAuthCode,
    pbkdf::{Pbkdf, PbkdfInfo},
};
use std::mem::swap;
use zeroize::Zeroizing;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// PBKDF2 (RFC 8018, section 5.2) using any [`MessageAuthCode`] as the pseudorandom function.
///
/// The password is the MAC key. Each output block `i` is the XOR of `iterations` chained MACs, the first of them
/// over `salt || i` with `i` as a big endian `u32`. Blocks are independent of each other and may be computed in
/// parallel.
#[derive(Debug, Clone)]
pub struct Pbkdf2<M = Hmac> {
    prf: M,
    id: &'static str,
    parallel: bool,
}

impl Pbkdf2<Hmac> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_block_size(algorithm, BlockSize::Legacy)
    }

    pub fn with_block_size(algorithm: Algorithm, block_size: BlockSize) -> Self {
        let mut pbkdf2 = Self::from_prf(Hmac::with_block_size(algorithm, block_size));
        pbkdf2.id = algorithm.pbkdf2_id();
        pbkdf2
    }
}

impl<M: MessageAuthCode<Error = Error> + Sync> Pbkdf2<M> {
    pub fn from_prf(prf: M) -> Self {
        Self {
            id: prf.info().id,
            prf,
            parallel: false,
        }
    }

    /// Computes blocks on the rayon thread pool. Without the `parallel` feature the blocks are still computed one
    /// after the other.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn prf(&self) -> &M {
        &self.prf
    }

    /// Derives `key_len` bytes from `password` and `salt`.
    pub fn derive_key(&self, password: &[u8], salt: &[u8], iterations: u32, key_len: usize) -> Result<Vec<u8>> {
        let mut key = vec![0u8; key_len];
        self.derive_into(&mut key, password, salt, iterations)?;
        Ok(key)
    }

    /// Fills `buf` with derived key bytes.
    pub fn derive_into(&self, buf: &mut [u8], password: &[u8], salt: &[u8], iterations: u32) -> Result<()> {
        let hash_len = self.prf.info().len;
        validate(iterations, buf.len(), hash_len)?;

        let blocks = buf.len().div_ceil(hash_len);
        debug!(
            "{}: deriving {} bytes in {} blocks with {} iterations",
            self.id,
            buf.len(),
            blocks,
            iterations
        );

        if buf.is_empty() {
            return Ok(());
        }

        if self.parallel && blocks > 1 {
            return self.derive_parallel(buf, password, salt, iterations, hash_len);
        }

        buf.chunks_mut(hash_len)
            .zip(1u32..)
            .try_for_each(|(chunk, index)| self.block(chunk, password, salt, index, iterations))
    }

    #[cfg(feature = "parallel")]
    fn derive_parallel(
        &self,
        buf: &mut [u8],
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        hash_len: usize,
    ) -> Result<()> {
        buf.par_chunks_mut(hash_len)
            .enumerate()
            .try_for_each(|(i, chunk)| self.block(chunk, password, salt, block_index(i)?, iterations))
    }

    #[cfg(not(feature = "parallel"))]
    fn derive_parallel(
        &self,
        buf: &mut [u8],
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        hash_len: usize,
    ) -> Result<()> {
        warn!("{}: parallel derivation requested but the `parallel` feature is disabled", self.id);

        buf.chunks_mut(hash_len)
            .zip(1u32..)
            .try_for_each(|(chunk, index)| self.block(chunk, password, salt, index, iterations))
    }

    // F(P, S, c, i) = U_1 ^ U_2 ^ ... ^ U_c, truncated to the chunk
    fn block(&self, out: &mut [u8], password: &[u8], salt: &[u8], index: u32, iterations: u32) -> Result<()> {
        trace!("{}: block {}", self.id, index);

        let hash_len = self.prf.info().len;
        let mut u = Zeroizing::new(vec![0u8; hash_len]);
        let mut next = Zeroizing::new(vec![0u8; hash_len]);

        let mut salt_block = Vec::with_capacity(salt.len() + 4);
        salt_block.extend_from_slice(salt);
        salt_block.extend_from_slice(&index.to_be_bytes());

        self.prf.auth(&mut u, &salt_block, password)?;
        let mut xorsum = u.clone();

        for _ in 1..iterations {
            self.prf.auth(&mut next, &u, password)?;
            xorsum.iter_mut().zip(next.iter()).for_each(|(t, n)| *t ^= n);
            swap(&mut u, &mut next);
        }

        out.copy_from_slice(&xorsum[..out.len()]);
        Ok(())
    }
}

impl<M: MessageAuthCode<Error = Error> + Sync> Pbkdf for Pbkdf2<M> {
    type Error = Error;

    fn info(&self) -> PbkdfInfo {
        PbkdfInfo {
            id: self.id,
            output_lens: 0..max_key_len(self.prf.info().len).saturating_add(1),
            cpu_cost: 1,
            cpu_costs: 1..u32::MAX as u64 + 1,
            parallelism: if cfg!(feature = "parallel") && self.parallel {
                rayon_threads()
            } else {
                0
            },
        }
    }

    fn derive(&self, buf: &mut [u8], password: &[u8], salt: &[u8], cpu_cost: u64) -> Result<()> {
        let iterations = u32::try_from(cpu_cost)
            .map_err(|_| Error::InvalidArgument(format!("Iteration count {} exceeds 2^32 - 1", cpu_cost)))?;
        self.derive_into(buf, password, salt, iterations)
    }
}

/// Derives `key_len` bytes from `password` and `salt` with PBKDF2 over HMAC with the digest called `algorithm`.
///
/// `iterations` must be at least 1. Fails with [`Error::UnsupportedAlgorithm`] if no digest of that name exists and
/// with [`Error::InvalidArgument`] for a zero iteration count or a key longer than PBKDF2 can produce. Use
/// [`DEFAULT_ALGORITHM`](crate::DEFAULT_ALGORITHM) when no digest is prescribed.
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32, key_len: usize, algorithm: &str) -> Result<Vec<u8>> {
    let algorithm: Algorithm = algorithm.parse()?;
    Pbkdf2::new(algorithm).derive_key(password, salt, iterations, key_len)
}

/// Checks the derivation arguments before anything is computed.
pub(crate) fn validate(iterations: u32, key_len: usize, hash_len: usize) -> Result<()> {
    if iterations == 0 {
        return Err(Error::InvalidArgument("PBKDF2 iterations must be >= 1".into()));
    }
    if hash_len == 0 {
        return Err(Error::InvalidArgument("PBKDF2 needs a non-empty pseudorandom function output".into()));
    }
    if key_len > max_key_len(hash_len) {
        return Err(Error::InvalidArgument(format!(
            "PBKDF2 key length {} exceeds (2^32 - 1) * {}",
            key_len, hash_len
        )));
    }
    Ok(())
}

// the block counter is a u32, which caps the output at (2^32 - 1) blocks
fn max_key_len(hash_len: usize) -> usize {
    (u32::MAX as usize).saturating_mul(hash_len)
}

#[cfg(feature = "parallel")]
fn block_index(i: usize) -> Result<u32> {
    u32::try_from(i + 1).map_err(|_| Error::InvalidArgument("PBKDF2 block counter overflow".into()))
}

#[cfg(feature = "parallel")]
fn rayon_threads() -> u64 {
    rayon::current_num_threads() as u64
}

#[cfg(not(feature = "parallel"))]
fn rayon_threads() -> u64 {
    0
}
