// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crate::{Algorithm, BlockSize, Digester, Encoding, Error, Result};

use log::debug;
use primitives::{
    auth::{MessageAuthCode, MessageAuthCodeInfo},
    hash::Hash,
};
use std::cmp::min;
use zeroize::Zeroizing;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC over any [`Hash`] implementation.
///
/// Keys longer than the block are hashed first, then right padded with zeros to the block length. The block length
/// is chosen by [`BlockSize`] and is 64 bytes unless configured otherwise.
#[derive(Debug, Clone)]
pub struct Hmac<H = Digester> {
    hash: H,
    block_len: usize,
    id: &'static str,
}

impl Hmac<Digester> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_block_size(algorithm, BlockSize::Legacy)
    }

    pub fn with_block_size(algorithm: Algorithm, block_size: BlockSize) -> Self {
        let mut hmac = Self::from_hash(Digester::new(algorithm), block_size);
        hmac.id = algorithm.hmac_id();
        hmac
    }

    pub fn algorithm(&self) -> Algorithm {
        self.hash.algorithm()
    }
}

impl<H: Hash<Error = Error>> Hmac<H> {
    pub fn from_hash(hash: H, block_size: BlockSize) -> Self {
        let info = hash.info();
        Self {
            block_len: block_size.resolve(info.block_len),
            id: info.id,
            hash,
        }
    }

    pub fn block_len(&self) -> usize {
        self.block_len
    }

    // the zero padded key, truncated to the block if the hashed key is still too long
    fn padded_key(&self, key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let mut block = Zeroizing::new(vec![0u8; self.block_len]);

        if key.len() > self.block_len {
            let mut hashed = Zeroizing::new(vec![0u8; self.hash.info().hash_len]);
            let len = self.hash.hash(&mut hashed, key)?;
            let len = min(len, self.block_len);
            block[..len].copy_from_slice(&hashed[..len]);
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        Ok(block)
    }
}

impl<H: Hash<Error = Error>> MessageAuthCode for Hmac<H> {
    type Error = Error;

    fn info(&self) -> MessageAuthCodeInfo {
        MessageAuthCodeInfo {
            id: self.id,
            len: self.hash.info().hash_len,
            block_len: self.block_len,
            key_lens: 0..usize::MAX,
        }
    }

    fn auth(&self, buf: &mut [u8], data: &[u8], key: &[u8]) -> Result<usize> {
        let hash_len = self.hash.info().hash_len;
        if buf.len() < hash_len {
            return Err(Error::InvalidArgument("Buffer is too small".into()));
        }

        let key = self.padded_key(key)?;

        let mut pad = Zeroizing::new(key.iter().map(|k| k ^ IPAD).collect::<Vec<u8>>());
        let mut inner = Zeroizing::new(vec![0u8; hash_len]);
        self.hash.hash_parts(&mut inner, &[pad.as_slice(), data])?;

        pad.iter_mut().zip(key.iter()).for_each(|(p, k)| *p = k ^ OPAD);
        self.hash.hash_parts(&mut buf[..hash_len], &[pad.as_slice(), inner.as_slice()])
    }
}

/// Computes the HMAC of `data` under `key` with the digest called `algorithm` and a 64 byte block.
///
/// Fails with [`Error::UnsupportedAlgorithm`] if no digest of that name exists.
pub fn hmac(algorithm: &str, data: &[u8], key: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    let algorithm: Algorithm = algorithm.parse()?;
    debug!("hmac with {} ({:?})", algorithm, encoding);

    let mut buf = vec![0u8; algorithm.digest_len()];
    Hmac::new(algorithm).auth(&mut buf, data, key)?;

    Ok(encoding.encode(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    use primitives::hash::HashInfo;

    // a hash with output longer than its block, to reach the truncation path
    struct Wide;

    impl Hash for Wide {
        type Error = Error;

        fn info(&self) -> HashInfo {
            HashInfo {
                id: "wide",
                hash_len: 64,
                block_len: 16,
            }
        }

        fn hash_parts(&self, buf: &mut [u8], parts: &[&[u8]]) -> Result<usize> {
            let sha = Digester::new(Algorithm::Sha512);
            sha.hash_parts(buf, parts)
        }
    }

    #[test]
    fn test_info() {
        let info = Hmac::new(Algorithm::Sm3).info();
        assert_eq!(info.id, "HMAC-SM3");
        assert_eq!(info.len, 32);
        assert_eq!(info.block_len, 64);

        let info = Hmac::with_block_size(Algorithm::Sha512, BlockSize::Native).info();
        assert_eq!(info.id, "HMAC-SHA512");
        assert_eq!(info.block_len, 128);
    }

    #[test]
    fn test_padded_key() {
        let hmac = Hmac::new(Algorithm::Sha256);

        let key = hmac.padded_key(b"key").unwrap();
        assert_eq!(key.len(), 64);
        assert_eq!(&key[..3], b"key");
        assert!(key[3..].iter().all(|b| *b == 0));

        let exact = [7u8; 64];
        assert_eq!(hmac.padded_key(&exact).unwrap().as_slice(), &exact[..]);

        let long = [7u8; 65];
        let key = hmac.padded_key(&long).unwrap();
        assert_eq!(&key[..32], Digester::new(Algorithm::Sha256).digest(&long).as_slice());
        assert!(key[32..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_hashed_key_truncated_to_block() {
        let hmac = Hmac::from_hash(Wide, BlockSize::Native);
        assert_eq!(hmac.block_len(), 16);

        let long = [1u8; 17];
        let key = hmac.padded_key(&long).unwrap();
        assert_eq!(key.as_slice(), &Digester::new(Algorithm::Sha512).digest(&long)[..16]);

        let mut buf = [0u8; 64];
        assert_eq!(hmac.auth(&mut buf, b"data", &long).unwrap(), 64);
    }

    #[test]
    fn test_small_buffer() {
        let mut buf = [0u8; 19];
        assert!(matches!(
            Hmac::new(Algorithm::Sha1).auth(&mut buf, b"", b""),
            Err(Error::InvalidArgument(_))
        ));
    }
}
