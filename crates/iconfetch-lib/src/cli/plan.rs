use crate::cli::params::PlanParams;
use crate::error::IconFetchError;
use crate::fetch::plan;

pub async fn run_plan(params: PlanParams) -> Result<(), IconFetchError> {
    let items = plan(&params.manifest, &params.base_url)?;
    for item in &items {
        println!("{}\t{}\t{}", item.collection, item.identifier, item.url);
    }
    tracing::info!("{} icons would be fetched", items.len());
    Ok(())
}
