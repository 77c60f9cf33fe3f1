//! Animated line plot of two superposed sinusoidal traveling waves.
//!
//! [`wave`] holds the numeric kernel, [`animation`] steps it through time,
//! and [`plot`], [`gpu`] and [`app`] put the result on screen.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gpu;
pub mod plot;
pub mod wave;
