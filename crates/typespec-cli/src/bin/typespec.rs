use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use serde_json::{Map, Value};

use typespec_cli::TypeSpecStore;
use typespec_cli::args::CliArgs;
use typespec_cli::config::resolve_cli_config;
use typespec_cli::tracing_config::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let config = resolve_cli_config(&args, &cwd)?;
    tracing::debug!(spec = %config.spec_path.display(), "using type spec");

    let store = TypeSpecStore::new(config.spec_path, config.options);

    if !args.references.is_empty() {
        let mut found = Map::new();
        for reference in &args.references {
            let entry = store.lookup(reference).await?;
            if entry.is_none() {
                tracing::warn!(%reference, "reference not found");
            }
            found.insert(reference.clone(), serde_json::to_value(entry)?);
        }
        return print_json(&Value::Object(found), args.pretty);
    }

    let modules = store.modules().await?;
    match &args.module {
        Some(name) => {
            let Some(module) = modules.iter().find(|module| &module.name == name) else {
                bail!("module '{name}' not found in {}", store.path().display());
            };
            print_json(module, args.pretty)
        }
        None => print_json(&*modules, args.pretty),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
