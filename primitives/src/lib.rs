// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

/// A general purpose API for the primitives a password based key derivation is built from.
/// Each primitive contains an info data structure for describing the constraints of the algorithm and one trait.
/// Implementations live in the `keystretch` crate.

/// Message Auth Code
pub mod auth;
/// Hash
pub mod hash;
/// PBKDF
pub mod pbkdf;
