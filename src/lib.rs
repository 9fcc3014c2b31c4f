//! # Iterflow
//!
//! A test-support library backing an executable tour of Rust's lazy iterator
//! pipelines (`std::iter`) and rayon's parallel execution semantics. The
//! behavior under test lives entirely in the standard library and rayon; this
//! crate only supplies the scaffolding the suite in `tests/` is written with:
//!
//! - **Fixtures**: canonical in-memory datasets shared across the suite
//! - **Assertions**: collection comparisons with diagnostic failure messages
//! - **Builders**: fluent element-by-element sequence construction
//! - **Probes**: thread-safe side-effect recorders for observing laziness,
//!   short-circuiting, and parallel interleaving
//! - **Pools**: fixed-size rayon thread pools so parallel demonstrations do
//!   not depend on the global pool
//!
//! ## Quick Start
//!
//! ```
//! use iterflow::fixtures::ordinal_words;
//! use iterflow::probe::EvalProbe;
//!
//! let probe = EvalProbe::new();
//! let pipeline = ordinal_words().into_iter().inspect(|_| probe.mark());
//!
//! // Adapters are lazy: nothing has run yet.
//! assert_eq!(probe.hits(), 0);
//!
//! // A terminal operation forces evaluation.
//! assert_eq!(pipeline.count(), 5);
//! assert_eq!(probe.hits(), 5);
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod parallel;
pub mod probe;

pub use assertions::*;
pub use builders::SequenceBuilder;
pub use fixtures::*;
pub use parallel::{default_pool, fixed_pool};
pub use probe::EvalProbe;
