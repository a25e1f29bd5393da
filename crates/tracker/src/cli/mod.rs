mod args;
mod handlers;
mod prompt;
mod render;

use args::{Cli, Commands};
use clap::Parser;
use trackerapp::api::TrackerApi;
use trackerapp::config::{config_root, data_file_path};
use trackerapp::error::Result;
use trackerapp::store::fs_backend::FsBackend;

pub struct AppContext {
    pub api: TrackerApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { title, tags, date }) => {
            handlers::add(&mut ctx, title, tags, date)
        }
        Some(Commands::List { from, to }) => handlers::list(&ctx, from, to),
        Some(Commands::Show { id }) => handlers::show(&ctx, id),
        Some(Commands::Edit { id, title, tags }) => handlers::edit(&mut ctx, id, title, tags),
        Some(Commands::Continue { id, date }) => handlers::continue_record(&mut ctx, id, date),
        Some(Commands::Delete { id, yes }) => handlers::delete(&mut ctx, id, yes),
        Some(Commands::Path) => handlers::path(&ctx),
        None => handlers::list(&ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let data_file = data_file_path()?;
    // config.json always lives in the per-user directory, even when the data file is overridden
    let config_dir = config_root().ok();
    log::debug!("using data file {}", data_file.display());

    let api = TrackerApi::open(data_file, config_dir.as_deref())?;
    Ok(AppContext { api })
}
