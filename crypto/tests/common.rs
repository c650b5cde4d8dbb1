// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use hex::decode;
use json::{iterators::Members, JsonValue};
use keystretch::{Algorithm, BlockSize};

// extension for JsonValue
pub trait JsonValueExt {
    // decode string
    fn check_string(&self) -> String;
    // hex-decode string into byte vector
    fn check_bytes(&self) -> Vec<u8>;
    // a text string, `{ "hex": .. }` or `{ "repeat": .., "count": .. }`
    fn check_input(&self) -> Vec<u8>;
    // check if array
    fn check_array_iter(&self) -> Members;
    // get usize
    fn check_usize(&self) -> usize;
    // parse an algorithm name
    fn check_algorithm(&self) -> Algorithm;
    // get the block size policy if not null
    fn option_block_size(&self, def: BlockSize) -> BlockSize;
    // get string if not null
    fn option_string(&self, def: impl ToString) -> String;
}

impl JsonValueExt for JsonValue {
    fn check_string(&self) -> String {
        self.as_str().unwrap().to_string()
    }

    fn check_bytes(&self) -> Vec<u8> {
        let encode = self.as_str().unwrap();

        decode(encode).unwrap()
    }

    fn check_input(&self) -> Vec<u8> {
        if self.is_string() {
            return self.check_string().into_bytes();
        }
        if self["hex"].is_string() {
            return self["hex"].check_bytes();
        }

        self["repeat"].check_bytes().repeat(self["count"].check_usize())
    }

    fn check_array_iter(&self) -> Members {
        assert!(self.is_array());
        self.members()
    }

    fn check_usize(&self) -> usize {
        self.as_usize().unwrap()
    }

    fn check_algorithm(&self) -> Algorithm {
        self.check_string().parse().unwrap()
    }

    fn option_block_size(&self, def: BlockSize) -> BlockSize {
        match self.as_str() {
            Some("legacy") => BlockSize::Legacy,
            Some("native") => BlockSize::Native,
            Some(other) => panic!("unknown block size {}", other),
            None => def,
        }
    }

    fn option_string(&self, def: impl ToString) -> String {
        if self.is_string() {
            self.as_str().unwrap().to_string()
        } else {
            def.to_string()
        }
    }
}

// result extension
pub trait ResultExt<T, E> {
    // unwraps error and panics
    fn error_or(self, msg: impl ToString) -> E;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn error_or(self, msg: impl ToString) -> E {
        match self {
            Err(e) => e,
            _ => panic!("{}", msg.to_string()),
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter(None, log::LevelFilter::Debug)
        .try_init();
}
