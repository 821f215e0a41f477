use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_template(force: bool) -> Result<()> {
    let template_path = PathBuf::from("praximeter.toml");

    if template_path.exists() && !force {
        anyhow::bail!("Input file already exists. Use --force to overwrite.");
    }

    let template = r#"# Praximeter input file
# Fill in the tables you want to compute and delete the rest, then run:
#   praximeter report praximeter.toml

[clv]
average_visit_price = 50.0
average_visit_count = 5.0
# Optional projection across the relationship duration:
relationship_months = 12.0

[churn]
starting_clients = 100.0
lost_clients = 5.0

[nps]
promoters = 60.0
passives = 30.0
detractors = 10.0

[return-rate]
total_visits = 200.0
returning_visits = 150.0
"#;

    io::write_file(&template_path, template)?;
    println!("Created praximeter.toml input template");

    Ok(())
}
