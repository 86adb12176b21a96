//! Miscellaneous tools used by the agent around the search itself: the heuristic
//! [`Evaluator`]s, the turn [`Timer`], and the [`OpeningBook`] consulted before searching.
//!
//! [`Evaluator`]: eval/trait.Evaluator.html
//! [`Timer`]: timer/struct.Timer.html
//! [`OpeningBook`]: opening_book/struct.OpeningBook.html

pub mod eval;
pub mod opening_book;
pub mod timer;
