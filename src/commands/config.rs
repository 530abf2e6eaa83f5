use anyhow::Result;
use calx_core::config::CalxConfig;
use owo_colors::OwoColorize;

pub fn run(mut config: CalxConfig, principal: Option<String>) -> Result<()> {
    if let Some(name) = principal {
        config.principal = Some(name.clone());
        config.save()?;
        println!("{}", format!("Default principal set to '{name}'").green());
        return Ok(());
    }

    println!("calendar_dir = {}", config.display_path().display());
    println!("days_ahead = {}", config.days_ahead);
    match &config.principal {
        Some(name) => println!("principal = {name}"),
        None => println!("principal = {}", "(unset)".dimmed()),
    }

    Ok(())
}
