#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod checkpoints;
mod contract;
mod storage;

pub use contract::*;
