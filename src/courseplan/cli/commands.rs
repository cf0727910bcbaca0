//! # CLI Layer
//!
//! One possible UI client for courseplan. It is the only place that reads
//! stdin, writes to stdout/stderr or decides exit codes.
//!
//! - `run()`: dispatch (called by `main.rs`)
//! - `init_context()`: resolves the data directory, loads config, opens the API
//! - `handle_*()`: per-command handlers that call the API and print results

use super::print::{print_config, print_courses, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use courseplan::api::{ConfigAction, CourseplanApi, CourseplanPaths};
use courseplan::config::CourseplanConfig;
use courseplan::error::{CourseplanError, Result};
use courseplan::logger::init_cli_logger;
use courseplan::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "COURSEPLAN_HOME";

struct AppContext {
    api: CourseplanApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Prereq {
            course,
            prerequisite,
        }) => handle_prereq(&mut ctx, course, prerequisite),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "courseplan", "courseplan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CourseplanError::Api(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = CourseplanConfig::load(&data_dir)?;

    let backend = FsBackend::new(data_dir.clone());
    let paths = CourseplanPaths { data_dir };
    let (api, messages) = CourseplanApi::open(backend, paths, config);
    print_messages(&messages);

    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_courses()?;
    print_courses(&result.listed_courses, result.saved_at);
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&file)?;
    print_messages(&result.messages);
    handle_list(ctx)
}

fn handle_prereq(
    ctx: &mut AppContext,
    course: String,
    prerequisite: Option<String>,
) -> Result<()> {
    let result = ctx.api.set_prerequisite(&course, prerequisite.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, skip_confirm: bool) -> Result<()> {
    let count = ctx.api.store().courses().len();

    if !skip_confirm && count > 0 {
        println!(
            "This will permanently remove all {} course(s). This cannot be undone.",
            count
        );
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(CourseplanError::Io)?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(CourseplanError::Io)?;

        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.clear_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
