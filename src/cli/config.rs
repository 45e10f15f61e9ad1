//! `peerwatch config init`

use crate::cli::ConfigInitArgs;
use crate::config::PeerwatchConfig;
use std::fmt::Write;

const EXAMPLE_CONFIG: &str = include_str!("../../peerwatch.example.toml");

/// Write the example config and return a summary of what it will poll.
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<String, Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "{} already exists (pass --force to overwrite)",
            args.output.display()
        )
        .into());
    }

    let template: PeerwatchConfig = toml::from_str(EXAMPLE_CONFIG)?;
    template.validate()?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&args.output, EXAMPLE_CONFIG)?;

    let mut summary = String::new();
    let _ = writeln!(summary, "✓ Wrote {}", args.output.display());
    let _ = writeln!(
        summary,
        "  Serving {} on {}",
        template.project.root.display(),
        template.server.bind_addr()
    );
    for peer in &template.peers {
        let _ = writeln!(summary, "  Peer {:<12} {}", peer.name, peer.url);
    }
    summary.push_str("  Edit the [[peers]] entries to point at your sibling services.");

    Ok(summary)
}
