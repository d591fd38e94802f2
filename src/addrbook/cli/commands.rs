use super::print::{render_table, write_messages};
use super::setup::{Cli, Commands};
use super::shell;
use addrbook::api::AddrBookApi;
use addrbook::config::AddrBookConfig;
use addrbook::error::{AddrBookError, Result};
use addrbook::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;

struct AppContext {
    api: AddrBookApi<FileStore>,
    config: AddrBookConfig,
    config_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Search { query }) => handle_search(&mut ctx, &query),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "addrbook", "addrbook").map(|d| d.config_dir().to_path_buf())
    });

    let config = match &config_dir {
        Some(dir) => AddrBookConfig::load(dir)?,
        None => {
            log::warn!("no config directory available, using defaults");
            AddrBookConfig::default()
        }
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.resolve_data_file(&cwd));
    log::debug!("using data file {}", data_file.display());

    Ok(AppContext {
        api: AddrBookApi::new(FileStore::new(data_file)),
        config,
        config_dir,
    })
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let loaded = ctx.api.load()?;
    write_messages(&mut stdout, &loaded.messages)?;

    shell::run(&mut ctx.api, stdin.lock(), stdout.lock())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    ctx.api.load()?;
    let result = ctx.api.list()?;
    print_listing(&result)
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    ctx.api.load()?;
    let result = ctx.api.search(query)?;
    print_listing(&result)
}

fn print_listing(result: &addrbook::api::CmdResult) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if !result.listed_contacts.is_empty() {
        write!(stdout, "{}", render_table(&result.listed_contacts))?;
    }
    write_messages(&mut stdout, &result.messages)?;
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            println!("data-file = {}", ctx.config.data_file.display());
            Ok(())
        }
        (Some("data-file"), Some(v)) => {
            let dir = ctx.config_dir.as_ref().ok_or_else(|| {
                AddrBookError::Config("no config directory available".to_string())
            })?;
            ctx.config.set_data_file(&v)?;
            ctx.config.save(dir)?;
            println!("data-file = {}", ctx.config.data_file.display());
            Ok(())
        }
        (Some(other), _) => Err(AddrBookError::Config(format!(
            "Unknown config key: {}",
            other
        ))),
    }
}
