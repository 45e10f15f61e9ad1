//! Health command implementation

use crate::cli::output::format_health_pretty;
use crate::cli::HealthArgs;
use crate::config::PeerwatchConfig;
use crate::inspect::SelfInspector;

/// Handle `peerwatch health`: inspect the project once and render the report.
pub fn handle_health(
    args: &HealthArgs,
    config: &PeerwatchConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let inspector = SelfInspector::new(config.project.clone());
    let report = inspector.health()?;

    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format_health_pretty(&report))
    }
}
