//! Log record storage.
//! Used by: handlers, state.

pub mod memory;
