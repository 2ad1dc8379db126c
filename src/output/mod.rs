//! Summary output
//!
//! Timestamped file naming and writing of the final summary document.

mod naming;
mod writer;

pub use naming::{output_path, run_timestamp, TIMESTAMP_FORMAT};
pub use writer::{render_summary, write_summary, SUMMARY_HEADER};
