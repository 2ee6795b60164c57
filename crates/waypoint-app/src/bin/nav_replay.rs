//! Replay an action script against in-memory host navigators.
//!
//! Prints the directive issued for each action, then every tab's final
//! host stack. Logging goes to stderr and honours `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use waypoint_app::{
    ActionScript, Directive, HostNavigator, RouterConfig, ScreenDescriptor, Shell, Tab,
};

#[derive(Parser)]
#[command(name = "nav-replay")]
#[command(about = "Replay router actions and print the resulting navigation stacks", long_about = None)]
struct Cli {
    /// JSON action script
    script: PathBuf,

    /// Router config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override a config value, e.g. `--set initial_active_tab=startup`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Print final stacks as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let mut config = match &cli.config {
        Some(path) => RouterConfig::load(path)?,
        None => RouterConfig::default(),
    };
    for entry in &cli.overrides {
        let (key, value) = entry
            .split_once('=')
            .with_context(|| format!("override '{entry}' is not KEY=VALUE"))?;
        config.set(key.trim(), value)?;
    }

    let script = ActionScript::load(&cli.script)?;
    let mut shell = Shell::new(&config, script.state.clone());

    for (step, (action, transition)) in script
        .actions
        .iter()
        .zip(script.run(&mut shell))
        .enumerate()
    {
        println!(
            "{step:>3} {:<20} [{}] {}",
            action.tag(),
            transition.tab,
            describe(&transition.directive)
        );
    }

    if cli.json {
        let stacks: BTreeMap<&str, &[ScreenDescriptor]> = Tab::all()
            .iter()
            .map(|&tab| (tab.name(), shell.host(tab).current_routes()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&stacks)?);
        return Ok(());
    }

    println!();
    for &tab in Tab::all() {
        let marker = if tab == shell.router().active_tab() { "*" } else { " " };
        let stack: Vec<String> = shell
            .host(tab)
            .current_routes()
            .iter()
            .map(label)
            .collect();
        println!("{marker}{:<8} {}", tab.name(), stack.join(" > "));
    }
    Ok(())
}

fn label(route: &ScreenDescriptor) -> String {
    let screen = route.screen.as_ref().map_or("?", |id| id.as_str());
    let mut label = match &route.title {
        Some(title) => format!("{screen}({title})"),
        None => screen.to_string(),
    };
    if let Some(projection) = &route.projection {
        label.push_str(&format!("[{}]", projection.key()));
    }
    label
}

fn describe(directive: &Directive) -> String {
    match directive {
        Directive::Push(route) => format!("push {}", label(route)),
        Directive::PopTo { index, route } => format!("pop-to #{index} {}", label(route)),
        Directive::Reset(stack) => format!("reset depth {}", stack.len()),
        Directive::Stay(stack) => format!("stay depth {}", stack.len()),
    }
}
