#![deny(clippy::pedantic)]
#![allow(clippy::inline_always)]
#![allow(clippy::module_name_repetitions)]

//! A bounded 2D particle physics simulation core.
//!
//! A [`simulator::Simulator`] owns a capped pool of short-lived point-mass
//! particles, fed by [`emitter::Emitter`]s and accelerated by the global
//! [`force::Force`]s. The caller drives it: measure elapsed time, call
//! [`simulator::Simulator::tick`], then hand the
//! [`simulator::Simulator::particles`] snapshot to whatever renders it.
//! Windowing, input and drawing live outside this crate.
//!
//! The core is fail-soft throughout: malformed inputs (out-of-range color
//! channels, non-positive densities, radii, masses or limits) degrade to
//! documented defaults instead of erroring, and nothing here panics.

pub mod bounds;
pub mod color;
pub mod emitter;
pub mod force;
pub mod particle;
pub mod simulator;
pub mod stats;
pub mod time;
