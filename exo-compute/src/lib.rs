//! Generation and step-by-step solving of algebra exercises.
//!
//! The crate is organized leaf-first:
//!
//! - [`number`] and [`random`] provide integer helpers and constrained random sampling.
//! - [`fraction`], [`linear`], [`quadratic`], [`system`], [`polynomial`], [`radical`],
//! [`power`] and [`percent`] contain the solvers. Each solver accepts a
//! `&mut dyn StepCollector<Step>` and reports the derivation as a list of [`Step`]s; pass `&mut
//! ()` to skip collecting them.
//! - [`exercise`] ties everything together: it draws random exercises for a [`Topic`] under a
//! [`GeneratorConfig`], renders their statements, and dispatches them to the matching solver.
//!
//! Expected failures (a zero leading coefficient, a zero denominator, an expression that does not
//! match an identity) are returned as typed error kinds from the `error` module, never as panics.
//!
//! [`Step`]: step::Step
//! [`Topic`]: exercise::Topic
//! [`GeneratorConfig`]: config::GeneratorConfig

pub mod config;
pub mod error;
pub mod exercise;
pub mod fmt;
pub mod fraction;
pub mod linear;
pub mod number;
pub mod percent;
pub mod polynomial;
pub mod power;
pub mod quadratic;
pub mod radical;
pub mod random;
pub mod set;
pub mod step;
pub mod step_collector;
pub mod system;

pub use exercise::{generate, Exercise, Solution, Topic};
pub use step::{Rule, Step};
pub use step_collector::StepCollector;
