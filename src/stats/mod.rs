//! Descriptive statistics over the working dataset.
//!
//! Six independent reducers, each a pure function taking `&Dataset` and
//! returning a structured result. No reducer mutates the dataset or
//! depends on another reducer's output, and every reducer produces a
//! well-defined result for an empty dataset.

pub mod demographics;
pub mod duration;
pub mod series;
pub mod station;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

#[cfg(test)]
pub(crate) mod testutil;
