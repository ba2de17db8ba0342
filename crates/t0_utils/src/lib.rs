#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    t0_cfg::define_alias! {
        #[cfg(any(feature = "debug", debug_assertions))] => debug,
    }
}

// -----------------------------------------------------------------------------
// No STD Support

#[cfg(test)]
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod macros;

pub mod array;
pub mod bits;
pub mod tag;

// -----------------------------------------------------------------------------
// Top-level exports

pub use array::{ArrayLen, ClampedArray, clamp_element, clamp_index};
pub use bits::{BitVector, PowerOfTwo, is_power_of_two};
pub use tag::{PackedId, TagError};
