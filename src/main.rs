use anyhow::Result;
use clap::Parser;
use praximeter::cli::{Cli, Commands};
use praximeter::commands::{calculate, init, report};
use praximeter::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Clv {
            price,
            visits,
            months,
            format,
            output,
            plain,
        } => {
            let config = calculate::CalculateConfig {
                format: format.into(),
                output,
                formatting: create_formatting_config(plain),
            };
            calculate::run_clv(&price, &visits, months.as_deref(), &config)
        }
        Commands::Churn {
            starting,
            lost,
            format,
            output,
            plain,
        } => {
            let config = calculate::CalculateConfig {
                format: format.into(),
                output,
                formatting: create_formatting_config(plain),
            };
            calculate::run_churn(&starting, &lost, &config)
        }
        Commands::Nps {
            promoters,
            passives,
            detractors,
            format,
            output,
            plain,
        } => {
            let config = calculate::CalculateConfig {
                format: format.into(),
                output,
                formatting: create_formatting_config(plain),
            };
            calculate::run_nps(&promoters, &passives, &detractors, &config)
        }
        Commands::ReturnRate {
            total,
            returning,
            format,
            output,
            plain,
        } => {
            let config = calculate::CalculateConfig {
                format: format.into(),
                output,
                formatting: create_formatting_config(plain),
            };
            calculate::run_return_rate(&total, &returning, &config)
        }
        Commands::Report {
            file,
            format,
            output,
            plain,
        } => {
            let config = report::ReportConfig {
                format: format.into(),
                output,
                formatting: create_formatting_config(plain),
            };
            report::run_report(&file, &config)
        }
        Commands::Init { force } => init::init_template(force),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
