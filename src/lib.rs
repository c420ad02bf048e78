#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `brawler-rs` is a project that aims to revive an old fighting game and bring it to modern platforms using Rust.
//!
//! The combat rules live in the animation tag interpreter: every character
//! action is an animation track whose frames carry behavioral tags, decoded
//! and applied once per simulation tick. See `brawler_engine` for the
//! interpreter and `brawler_types` for the animation data model.

pub use brawler_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use brawler_dylib;
