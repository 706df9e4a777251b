#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::{ExecutionError, ExecutionResult};

mod operation;
pub use operation::{Operation, OperationKind};

mod authenticator;
pub use authenticator::{AuthenticatedTransaction, TxAuthenticator, MIN_PAYLOAD_LEN};

mod dispatcher;
pub use dispatcher::{Dispatcher, Receipt};

mod builder;
pub use builder::{sign_transaction, TransactionBuilder};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
