#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

pub mod constants;
pub mod contract;
pub mod dependencies;
pub mod errors;
pub mod events;
pub mod executor;
pub mod settings;
pub mod storage;
pub mod threshold;
pub mod types;
pub mod vote_count;
pub mod voting;

pub use contract::*;
pub use voting::*;
