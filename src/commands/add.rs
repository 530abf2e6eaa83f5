use anyhow::Result;
use calx_core::event::Recurrence;
use calx_core::store::EventStore;
use calx_core::writer;
use clap::ValueEnum;
use owo_colors::OwoColorize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecurKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<RecurKind> for Recurrence {
    fn from(kind: RecurKind) -> Self {
        match kind {
            RecurKind::Daily => Recurrence::Daily,
            RecurKind::Weekly => Recurrence::Weekly,
            RecurKind::Monthly => Recurrence::Monthly,
            RecurKind::Yearly => Recurrence::Yearly,
        }
    }
}

pub fn run(
    store: &dyn EventStore,
    source: &str,
    date: &str,
    description: &str,
    recur: Option<RecurKind>,
    end: Option<&str>,
    sorted: bool,
) -> Result<()> {
    writer::add_event(
        store,
        source,
        date,
        recur.map(Recurrence::from),
        end,
        description,
        sorted,
    )?;

    println!("{}", format!("Added to {source}: {date} {description}").green());
    Ok(())
}
