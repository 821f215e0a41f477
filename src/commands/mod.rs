//! CLI command implementations.
//!
//! Each submodule handles one command with its configuration and execution
//! logic.
//!
//! Available commands:
//! - **clv / churn / nps / return-rate**: compute a single metric from raw
//!   text fields
//! - **report**: compute every metric listed in a TOML input file
//! - **init**: write a template input file for the report command

pub mod calculate;
pub mod init;
pub mod report;

pub use calculate::{run_churn, run_clv, run_nps, run_return_rate, CalculateConfig};
pub use init::init_template;
pub use report::{run_report, ReportConfig};
