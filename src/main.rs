use anyhow::{Context, Result};
use clap::Parser;

use offcanvas::cli::CliArgs;
use offcanvas::script::parse_script;
use offcanvas::{MemoryDocument, Slidebars};

fn print_states(slidebars: &Slidebars<MemoryDocument>) {
    for (id, state) in slidebars.states() {
        let active = slidebars.is_active(id.as_str()).unwrap_or(false);
        println!("  {:<16} {:<8} active={}", id.as_str(), format!("{:?}", state), active);
    }
}

fn main() -> Result<()> {
    offcanvas::tracing::init();

    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;

    if run.save_config {
        run.persist_config()
            .map_err(anyhow::Error::msg)
            .context("Failed to save configuration")?;
    }

    let page = std::fs::read_to_string(&run.page)
        .with_context(|| format!("Failed to read page {}", run.page.display()))?;
    let document = MemoryDocument::from_yaml(&page).map_err(anyhow::Error::msg)?;

    let steps = match &run.script {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            parse_script(&source).map_err(anyhow::Error::msg)?
        }
        None => Vec::new(),
    };

    let mut slidebars = Slidebars::new(document, run.config);
    slidebars.init().context("Failed to initialize panels")?;

    println!("init ({} panels)", slidebars.panel_ids().len());
    print_states(&slidebars);

    for step in &steps {
        step.apply(&mut slidebars)
            .with_context(|| format!("Step '{}' failed", step.label()))?;
        println!("{} @{}ms", step.label(), slidebars.now().as_millis());
        print_states(&slidebars);
    }

    if run.json {
        let json = serde_json::to_string_pretty(slidebars.document())
            .context("Failed to serialize document")?;
        println!("{}", json);
    }

    Ok(())
}
