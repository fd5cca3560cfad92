use prayerfeed_core::CoreError;
use std::path::Path;

pub fn run(goals_path: Option<&Path>) -> Result<(), CoreError> {
    let config = super::load_goals(goals_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
