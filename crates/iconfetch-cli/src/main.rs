use iconfetch_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch, run_plan};
use iconfetch_lib::error::IconFetchError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), IconFetchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => run_fetch(params).await?,
        ResolvedCommand::Plan(params) => run_plan(params).await?,
    }

    Ok(())
}
