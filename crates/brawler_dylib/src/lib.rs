//! Forces dynamic linking of the `brawler` internals when the
//! `dynamic_linking` feature is enabled on the root crate.

pub use brawler_internal::*;
