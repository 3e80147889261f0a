// EN: src/cli/handlers/plot.rs

use crate::{
    cli::Cli,
    core::{config_loader, naming, paths, plotter},
    dev_utils::PhaseTimer,
    system::cargo,
};
use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

/// The main handler: clean, build with timings, then plot.
///
/// Settings and the project root are resolved before anything touches the build
/// tree, so configuration mistakes abort with no side effect.
/// Returns the path of the written chart.
pub fn handle(cli: &Cli) -> Result<PathBuf> {
    let run_config = cli.run_config();
    log::debug!("Run configuration: {:?}", run_config);

    // 1. Resolve the project and its settings.
    let project_root = paths::resolve_project_root(&cli.project_root)?;
    let settings = config_loader::load_settings(&project_root)
        .with_context(|| format!("loading settings for '{}'", project_root.display()))?;
    log::debug!("Settings: {:?}", settings);

    // 2. Clean, so every target is rebuilt from scratch.
    {
        let _timer = PhaseTimer::new("clean");
        cargo::clean(&project_root, &settings.toolchain).context("cleaning the project")?;
    }

    // 3. Build and collect per-target timings.
    let timings = {
        let _timer = PhaseTimer::new("build");
        cargo::build(&project_root, &settings.toolchain, &run_config)
            .context("building the project with timings")?
    };

    // 4. Plot to a name that encodes the build configuration.
    let name = naming::output_name(&settings.base_name, &run_config);
    let output = paths::output_path(&project_root, &settings.assets_dir, &name);
    let chart_layout = {
        let _timer = PhaseTimer::new("plot");
        plotter::plot_timings(&timings, &settings.order, &settings.style, &output)
            .context("plotting the timings")?
    };

    if chart_layout.rows() == 0 {
        log::warn!(
            "None of the {} collected targets appear in the presentation order.",
            timings.len()
        );
    }
    println!(
        "{} {} ({} of {} targets)",
        "Timings written to".green(),
        output.display().to_string().yellow().bold(),
        chart_layout.rows(),
        timings.len()
    );
    Ok(output)
}
