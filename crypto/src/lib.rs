// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! This crate derives fixed length keys from low entropy passwords with PBKDF2.
//!
//! It is built as three layers, each implementing one of the traits from the `primitives` crate:
//! - [`Digester`] wraps the RustCrypto digests (MD5, SHA-1, SHA-2 and SM3) behind one-shot hashing by name.
//! - [`Hmac`] is the keyed-hash construction over any [`Hash`](primitives::hash::Hash) implementation.
//! - [`Pbkdf2`] is the block expansion loop using any [`MessageAuthCode`](primitives::auth::MessageAuthCode) as its
//!   pseudorandom function.
//!
//! The HMAC block size defaults to 64 bytes for every digest (see [`BlockSize`]). This matches RFC 2104 for the
//! 64-byte block digests and deviates from it for SHA-384 and SHA-512 unless [`BlockSize::Native`] is selected.
//!
//! ```
//! let key = keystretch::derive_key(b"password", b"salt", 1, 32, "sha256").unwrap();
//! assert_eq!(
//!     hex::encode(key),
//!     "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
//! );
//! ```

use thiserror::Error as DeriveError;

mod algorithm;
mod digester;
mod hmac;
mod params;
mod pbkdf2;

pub use crate::{
    algorithm::{Algorithm, BlockSize, DEFAULT_ALGORITHM, LEGACY_BLOCK_LEN},
    digester::{digest, Digester, Encoding},
    hmac::{hmac, Hmac},
    params::Params,
    pbkdf2::{derive_key, Pbkdf2},
};
pub use primitives;

#[derive(DeriveError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported algorithm: `{0}`")]
    UnsupportedAlgorithm(String),
    #[error("Invalid argument: `{0}`")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
