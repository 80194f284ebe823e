//! Etude - small, self-contained educational utilities.
//!
//! Each module is an isolated, independently testable answer to a classic
//! exercise: sequence utilities, an extensible calculator, a one-shot
//! completion handle driven by a simulated clock, recursive arithmetic,
//! and singly-linked-list traversal.
//!
//! # Quick Start
//!
//! ```
//! use etude::calc::Calculator;
//! use etude::seq::unique;
//!
//! let mut calc = Calculator::new();
//! calc.register("**", |a, b| a.powf(b));
//! assert_eq!(calc.evaluate("2 ** 3"), Ok(8.0));
//!
//! let values = ["Hare", "Krishna", "Hare", "Krishna"];
//! assert_eq!(unique(&values), ["Hare", "Krishna"]);
//! ```

pub mod calc;
pub mod completion;
pub mod io;
pub mod ladder;
pub mod list;
pub mod quiz;
pub mod recurse;
pub mod seq;
pub mod text;
pub mod timer;
