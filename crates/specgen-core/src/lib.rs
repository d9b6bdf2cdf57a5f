//! Broadening of discrete spectroscopic transitions into continuous spectra.
//!
//! [`numerics`] holds the line-shape kernels, intensity scaling, grid builder,
//! convolution engine and integral normalizer. [`modules`] wires them into a
//! run ([`modules::broaden_spectrum`]) and provides the `.spec` reader, the
//! curve writer and the run log.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
