//! Library-level tests for yaml-grid
//!
//! These exercise the public API without the binary: the projector and
//! reconstructor as a pair, and the load/edit/save pipeline over an
//! in-memory store.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod round_trip;
