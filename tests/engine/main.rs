//! Scene-level playback tests for `brawler-rs`
//!
//! These drive whole objects through [`Object::run_tick`] the way a scene
//! would, one tick at a time, and check the observable effects: spawn and
//! destroy callbacks, audio triggers, positions, and both sides of a linked
//! two-object exchange.
//!
//! [`Object::run_tick`]: brawler_rs::Object::run_tick

mod coupling;
mod support;
mod timing;
