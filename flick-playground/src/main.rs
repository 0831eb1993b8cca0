mod config;
mod demo;
mod error;
mod paths;

use std::fs::{self, File};
use std::process::ExitCode;

use log::{debug, info};
use simplelog::{Config, WriteLogger};

use crate::config::PlaygroundConfig;
use crate::demo::{Demo, Page};
use crate::error::PlaygroundError;

fn init_logging(config: &PlaygroundConfig) -> Result<(), PlaygroundError> {
    let path = config.resolved_log_file()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| PlaygroundError::LogFile {
            path: path.clone(),
            source,
        })?;
    }
    let log_file = File::create(&path).map_err(|source| PlaygroundError::LogFile {
        path: path.clone(),
        source,
    })?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    info!("logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), PlaygroundError> {
    let config = PlaygroundConfig::from_env()?;
    init_logging(&config)?;
    debug!("{:?}", config);

    let show = |step: &str, demo: &Demo| {
        debug!("{}: {}", step, demo.html());
        if config.print_tree {
            println!("{}:\n  {}\n", step, demo.html());
        }
    };

    let mut demo = Demo::build(&demo::default_pages())?;
    show("built", &demo);

    demo.activate("home");
    show("home selected", &demo);

    demo.activate("about");
    show("about selected", &demo);

    demo.add_page(Page::new(2, "Blog", "blog"))?;
    show("blog added", &demo);

    demo.remove_page("about")?;
    demo.toast("about page removed");
    show("about removed", &demo);

    info!("navigation order: {:?}", demo.nav_order());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
