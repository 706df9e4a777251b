#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::{BlockStoreError, LedgerError, LedgerResult};

mod ledger;
pub use ledger::Ledger;

mod shared;
pub use shared::{LedgerReader, SharedLedger};

mod reader;
pub use reader::{Account, StateReader};

mod store;
pub use store::{BlockStore, MemoryBlockStore, SharedBlockStore};
