//! Function learning problems for neuroevolution.
//!
//! Turns a continuous function into a fitness landscape over neural-network
//! weights:
//!
//! - **Sampling**: the function's domain is sampled once into disjoint
//!   training and testing sets, and the largest observed value is kept for
//!   target scaling.
//! - **Training fitness**: negated mean squared error of the network against
//!   targets scaled into its output range. This is what an optimizer
//!   maximizes towards zero.
//! - **Generalization error**: the same measure on the held-out set, in the
//!   function's own units.
//! - **Distributions**: swappable random number distributions for seeding
//!   candidate weight vectors.
//!
//! # Architecture
//!
//! This crate sits beside `u-metaheur` at Layer 2 (Algorithms) in the
//! U-Engine ecosystem, depending only on `u-numflow` (Layer 1: Foundation).
//! The function, the network and the optimizer are all supplied by the
//! consumer.
//!
//! # Features
//!
//! - `parallel`: population evaluation on the rayon thread pool.
//! - `serde`: `Serialize`/`Deserialize` for configuration and datasets.

pub mod error;
pub mod learning;
pub mod random;

pub use error::{LearningError, Result};
