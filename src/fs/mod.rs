//! Filesystem utilities for tabimap.
//!
//! The generated page replaces the previous output in place, so writes go
//! through an atomic temp-file-and-rename path to avoid ever serving a
//! half-written page.

pub mod atomic;

pub use atomic::atomic_write_file;
