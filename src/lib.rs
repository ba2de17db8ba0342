#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use t0_cfg as cfg;
pub use t0_utils as utils;
