#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

mod core;
pub use core::{BlockOutcome, Driver};

mod errors;
pub use errors::{DriverError, DriverResult};

mod genesis;
pub use genesis::{genesis_transaction, GENESIS_NONCE};

mod source;
pub use source::BlockSource;
#[cfg(feature = "std")]
pub use source::{block_queue, BlockFeed, BlockQueue, DEFAULT_QUEUE_CAPACITY};

#[cfg(test)]
mod test_utils;
