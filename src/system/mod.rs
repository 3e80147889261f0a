//! # System Interaction Layer
//!
//! The boundary between the timing pipeline and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: spawns external processes from a command line, either silently or
//!   with their standard output piped back for line-by-line consumption.
//! - **`cargo`**: the two cargo invocations the tool drives: `clean`, and `build` with
//!   timing instrumentation, whose output is decoded into a `Timings` collection.

pub mod cargo;
pub mod executor;
