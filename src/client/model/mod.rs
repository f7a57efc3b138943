//! Client-side types that never travel over the wire.

pub mod error;
