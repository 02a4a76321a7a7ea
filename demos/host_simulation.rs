//! Example driving the plugin the way a game host would
//!
//! Writes a default config into a scratch directory, then runs the
//! load -> enable -> reload -> disable sequence with the logging controller.

use brighter_torches::{init_logging, PluginHost, PluginOptions, LoggingLightController};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging();

    let scratch = tempfile::TempDir::new()?;
    let options = PluginOptions {
        config_path: scratch.path().join("plugins/BrighterTorches/config.json"),
        ..PluginOptions::default()
    };
    let config_path = options.config_path.clone();
    let host = PluginHost::new(options, LoggingLightController::new());

    host.ensure_config_file()?;

    host.on_load();
    if let Some(report) = host.on_enable() {
        println!("Enabled: {} torch types updated", report.applied);
    }

    // Dim the base torches and skip the other variants, then reload
    std::fs::write(
        &config_path,
        r#"{"brightness":{"torchLightLevel":12},"advanced":{"applyToAllTorchTypes":false}}"#,
    )?;
    if let Some(report) = host.on_reload() {
        println!("Reloaded: {} torch types updated", report.applied);
    }

    {
        let instance = host.instance();
        let plugin = instance.lock();
        for (block_id, level) in plugin.controller().intended_levels() {
            println!("  {} -> {}", block_id, level);
        }
    }

    host.on_disable();
    println!("Final state: {:?}", host.state());

    Ok(())
}
