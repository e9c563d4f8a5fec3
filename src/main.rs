//! appicons - generate every platform's app icons from one SVG
//!
//! Usage: appicons [--root DIR] [-s FILE] [-p PLATFORM]... [--json]
//!
//! Run from a subdirectory of the project (typically `tool/`). Reads
//! `<root>/assets/app_launcher_icon.svg` and writes the Android, iOS, web,
//! macOS, Windows and Linux icon sets under the project root.

mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use appicons::application::GenerateOptions;
use appicons::config::{self, Config};
use appicons::domain::ports::GenerateEventSink;
use appicons::infrastructure::JsonEventSink;
use appicons::presentation::{create_generate_use_case, Cli, TextRenderer};

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    let project_root = match config::project_root(cli.root.as_deref()) {
        Ok(root) => root,
        Err(err) => {
            ui::error::print_error(&anyhow::Error::new(err), cli.json, None);
            std::process::exit(1);
        }
    };
    let loaded = Config::load_or_default(&project_root);
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);

    ui::output::print_config_warnings(&ui, &loaded.warnings);
    if let Some(err) = &loaded.error {
        ui::output::print_config_error(&ui, err);
    }

    if let Err(err) = run(&cli, &ui, &project_root, &loaded.config) {
        ui::error::print_error(&err, ui.json, Some(&ui));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, ui: &UiContext, project_root: &Path, config: &Config) -> Result<()> {
    let source = cli.source.clone().unwrap_or_else(|| config.source_path());
    let platforms = if cli.platforms.is_empty() {
        config.enabled_platforms()
    } else {
        cli.platforms.clone()
    };
    let options = GenerateOptions::new(project_root)
        .with_source(source)
        .with_platforms(platforms);

    let sink: Arc<dyn GenerateEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(*ui, project_root))
    };

    let use_case = create_generate_use_case();
    let result = use_case.execute_with_events(&options, sink)?;

    if !ui.json {
        let renderer = TextRenderer {
            unicode: ui.unicode,
            verbose: ui.verbose,
        };
        println!();
        print!("{}", renderer.render(&result, &options.source));
    }

    Ok(())
}
