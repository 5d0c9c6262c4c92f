use mark::{
    cli::{self, MarkCli},
    config::Config,
    core::LocalMarkStore,
    setup_logging,
};
use std::io;
use std::process::ExitCode;

fn run() -> anyhow::Result<()> {
    let args = cli::parse_args()?;
    let config = Config::from_args(&args)?;

    setup_logging(config.debug)?;

    let store = LocalMarkStore::new(&config.mark_file);

    let mut mark = MarkCli::new(store, io::stdout().lock(), io::stderr().lock());
    mark.execute(&args.resolved_command())?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
