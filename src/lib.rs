#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

pub mod error;
pub mod iter;
pub mod ops;
pub mod random;

pub use error::SeqError;
pub use iter::{quant::Quantifier, scan::Scan, unique::UniqueExt};
pub use ops::{
    last_index::LastIndex,
    len::{Len, LenExt},
    list::{List, ListMut},
    remove::RemoveAll,
    scatter::Scatter,
    zeros::Zeros,
};
pub use random::{RandomIndex, RandomIndexMut};
