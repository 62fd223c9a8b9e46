//! Common types used across the Buda client library.

pub mod common;
pub mod money;
pub mod pagination;
pub mod serde_helpers;

pub use common::*;
pub use money::Money;
pub use pagination::{Page, PageMeta};
