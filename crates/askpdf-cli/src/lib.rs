//! Interactive CLI session for askpdf

pub mod session;
pub mod ui;

pub use session::{ingest_file, run_session};
pub use ui::{display_banner, print_help, read_input};
