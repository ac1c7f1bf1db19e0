//! Filesystem-facing helpers

mod output_path;

pub use output_path::{
    OutputPathError, RejectReason, ValidationOutcome, validate_output_path, write_output,
};
