#![forbid(unsafe_code)]

//! Core: geometry primitives, node handles, and the events that drive a
//! floating panel.

pub mod event;
pub mod geometry;
pub mod node;
