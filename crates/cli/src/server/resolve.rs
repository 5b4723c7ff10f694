use crate::di::NameServices;
use tracing::info;

pub async fn run_resolve(services: &NameServices, names: &[String]) -> anyhow::Result<()> {
    for name in names {
        super::answer(&services.resolve, name).await;
    }

    let stats = services.stats.execute();
    info!(
        lookups = stats.lookups,
        hits = stats.hits,
        entries = stats.entries,
        "Lookups complete"
    );

    Ok(())
}
