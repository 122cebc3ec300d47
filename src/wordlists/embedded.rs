//! Embedded puzzle data
//!
//! Similarity table and hint list compiled into the binary at build time.

// Include generated data from build script
include!(concat!(env!("OUT_DIR"), "/similarities.rs"));
include!(concat!(env!("OUT_DIR"), "/hints.rs"));
