//! Active rendering systems
//!
//! Stateful runtime systems that run each frame: the planar reflection pass and the
//! tunable shader state of the reflective surface.

pub mod reflection;
pub mod surface;
