// Export modules for library usage
pub mod advice;
pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod input;
pub mod interpret;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    ChurnInput, ClvInput, Interpretation, MetricKind, MetricReport, MetricResult, NpsInput,
    PanelFailure, ReturnInput, Tier,
};

pub use crate::engine::{compute_churn_rate, compute_clv, compute_nps, compute_return_rate};

pub use crate::errors::MetricError;

pub use crate::input::{parse_optional, parse_required};

pub use crate::interpret::interpret;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
