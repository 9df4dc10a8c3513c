//! Small shared helpers.

pub mod frame_timing;
