use anyhow::Result;
use calx_core::store::{EventStore, Scope};
use owo_colors::OwoColorize;

pub fn run(store: &dyn EventStore, principal: Option<&str>) -> Result<()> {
    println!("{}", "global".bold());
    for source in store.list_sources(&Scope::Global)? {
        println!("  {source}");
    }

    if let Some(name) = principal {
        store.ensure_source_exists(&format!("{name}/schedule"))?;

        println!("{}", name.bold());
        for source in store.list_sources(&Scope::Principal(name.to_string()))? {
            println!("  {source}");
        }
    }

    Ok(())
}
