use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use loadtester::app::run_local;
use loadtester::args::{LoadArgs, normalize_legacy_flags};
use loadtester::config::{apply_config, load_config};
use loadtester::domain::RunConfig;
use loadtester::error::AppResult;
use loadtester::logger::init_logging;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    init_logging(args.verbose, args.no_color);

    let config = match resolve_run_config(&mut args, &matches) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return Err(err);
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_local(&config))?;
    Ok(())
}

fn parse_args() -> AppResult<(LoadArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = normalize_legacy_flags(std::env::args_os());
    let matches = LoadArgs::command().get_matches_from(raw_args);
    let args = LoadArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn resolve_run_config(args: &mut LoadArgs, matches: &ArgMatches) -> AppResult<RunConfig> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    RunConfig::from_args(args)
}
