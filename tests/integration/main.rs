//! Integration tests for rs-docblocks
//!
//! These tests run the complete extraction end-to-end on whole pages:
//! container strategies, and unusual or malformed inputs.

mod containers;
mod edge_cases;
