//! Plugin Operations - lifecycle transitions
//!
//! Functions that operate on `TorchPlugin`. None of them propagate errors to
//! the host: controller failures are logged and the remaining work continues.
//! After load the host may call enable, disable and reload in any order and
//! any number of times; only calls made before load are logged and ignored.

use super::plugin_data::{ApplyReport, PluginState, TorchPlugin};
use crate::config::load_settings;
use crate::controller::LightController;
use crate::error::{PluginError, PluginResult};
use crate::light::LightLevel;

/// Every state the host can reach once `load` has run
const LOADED_STATES: &[PluginState] = &[
    PluginState::Loaded,
    PluginState::Enabled,
    PluginState::Disabled,
];

/// Host has loaded the plugin.
pub fn load_plugin<C: LightController>(plugin: &mut TorchPlugin<C>) {
    if let Err(e) = check_state(plugin, "load", &[PluginState::Unloaded]) {
        log::warn!("[BrighterTorches] {}", e);
        return;
    }

    plugin.state = PluginState::Loaded;
    log::info!("[BrighterTorches] Plugin loaded!");
}

/// Host has enabled the plugin: read the config and apply it.
///
/// Enabling again re-reads the config and applies it on top.
///
/// Returns the apply report, or `None` when nothing was applied.
pub fn enable_plugin<C: LightController>(plugin: &mut TorchPlugin<C>) -> Option<ApplyReport> {
    if let Err(e) = check_state(plugin, "enable", LOADED_STATES) {
        log::warn!("[BrighterTorches] {}", e);
        return None;
    }

    log::info!("[BrighterTorches] Initializing brighter torches mod...");
    let settings = load_settings(&plugin.options.config_path);
    plugin.settings = Some(settings);
    plugin.state = PluginState::Enabled;

    if !settings.is_enabled() {
        log::info!("[BrighterTorches] Plugin is disabled in config.");
        return None;
    }

    let report = apply_modifications(plugin);

    log::info!("[BrighterTorches] Plugin enabled successfully!");
    log::info!(
        "[BrighterTorches] Torch light level: {}",
        settings.torch_light_level()
    );
    log::info!("[BrighterTorches] Light radius: {}", settings.light_radius());

    Some(report)
}

/// Host has disabled the plugin: put torches back to their defaults.
pub fn disable_plugin<C: LightController>(plugin: &mut TorchPlugin<C>) {
    if let Err(e) = check_state(plugin, "disable", LOADED_STATES) {
        log::warn!("[BrighterTorches] {}", e);
        return;
    }

    log::info!("[BrighterTorches] Restoring default torch settings...");
    restore_defaults(plugin);

    plugin.state = PluginState::Disabled;
    log::info!("[BrighterTorches] Plugin disabled!");
}

/// Re-read the config and reapply it.
///
/// When the new config is disabled nothing is restored; torches keep the
/// levels they were last given.
pub fn reload_plugin<C: LightController>(plugin: &mut TorchPlugin<C>) -> Option<ApplyReport> {
    if let Err(e) = check_state(plugin, "reload", LOADED_STATES) {
        log::warn!("[BrighterTorches] {}", e);
        return None;
    }

    log::info!("[BrighterTorches] Reloading configuration...");
    let settings = load_settings(&plugin.options.config_path);
    plugin.settings = Some(settings);

    if !settings.is_enabled() {
        log::info!("[BrighterTorches] Plugin is disabled in config, leaving torches unchanged");
        return None;
    }

    restore_defaults(plugin);
    let report = apply_modifications(plugin);
    plugin.state = PluginState::Enabled;

    log::info!("[BrighterTorches] Reload complete!");
    Some(report)
}

/// Push the current settings to the light controller.
///
/// Every target block is attempted even if earlier ones fail.
pub fn apply_modifications<C: LightController>(plugin: &mut TorchPlugin<C>) -> ApplyReport {
    let mut report = ApplyReport::default();
    let Some(settings) = plugin.settings else {
        log::warn!("[BrighterTorches] No configuration loaded, skipping torch modifications");
        return report;
    };

    log::info!("[BrighterTorches] Applying torch modifications...");

    for (kind, level) in settings.targets() {
        let block_id = kind.block_id(&plugin.options.namespace);
        match set_light(&mut plugin.controller, &block_id, level) {
            Ok(()) => report.applied += 1,
            Err(e) => {
                log::error!("[BrighterTorches] Failed to modify {}: {}", block_id, e);
                report.failed += 1;
            }
        }
    }

    log::info!(
        "[BrighterTorches] Torch modifications applied ({} ok, {} failed)",
        report.applied,
        report.failed
    );
    report
}

/// Ask the controller to restore default light levels.
///
/// Returns whether the restore succeeded.
pub fn restore_defaults<C: LightController>(plugin: &mut TorchPlugin<C>) -> bool {
    match plugin.controller.restore_defaults().map_err(PluginError::from) {
        Ok(()) => true,
        Err(e) => {
            log::error!("[BrighterTorches] Failed to restore defaults: {}", e);
            false
        }
    }
}

fn set_light<C: LightController>(
    controller: &mut C,
    block_id: &str,
    level: LightLevel,
) -> PluginResult<()> {
    log::debug!("[BrighterTorches] Requesting {} light level {}", block_id, level);
    controller.set_block_light(block_id, level)?;
    Ok(())
}

fn check_state<C: LightController>(
    plugin: &TorchPlugin<C>,
    operation: &'static str,
    allowed: &[PluginState],
) -> PluginResult<()> {
    if allowed.contains(&plugin.state) {
        Ok(())
    } else {
        Err(PluginError::InvalidState {
            operation,
            state: plugin.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControllerError, ControllerResult};
    use crate::plugin::PluginOptions;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Set(String, u8),
        Restore,
    }

    /// Records every call; fails `set_block_light` for ids in `failing`.
    #[derive(Debug, Default)]
    struct RecordingController {
        calls: Vec<Call>,
        failing: Vec<String>,
        fail_restore: bool,
    }

    impl RecordingController {
        fn set_calls(&self) -> Vec<(String, u8)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Set(id, level) => Some((id.clone(), *level)),
                    Call::Restore => None,
                })
                .collect()
        }

        fn restore_calls(&self) -> usize {
            self.calls.iter().filter(|call| **call == Call::Restore).count()
        }
    }

    impl LightController for RecordingController {
        fn set_block_light(&mut self, block_id: &str, level: LightLevel) -> ControllerResult<()> {
            self.calls.push(Call::Set(block_id.to_string(), level.get()));
            if self.failing.iter().any(|id| id == block_id) {
                return Err(ControllerError::Rejected {
                    block_id: block_id.to_string(),
                    reason: "test failure".to_string(),
                });
            }
            Ok(())
        }

        fn restore_defaults(&mut self) -> ControllerResult<()> {
            self.calls.push(Call::Restore);
            if self.fail_restore {
                return Err(ControllerError::Unavailable("test failure".to_string()));
            }
            Ok(())
        }
    }

    fn create_test_plugin(temp_dir: &TempDir) -> TorchPlugin<RecordingController> {
        create_plugin_with(temp_dir, RecordingController::default())
    }

    fn create_plugin_with(
        temp_dir: &TempDir,
        controller: RecordingController,
    ) -> TorchPlugin<RecordingController> {
        let options = PluginOptions {
            config_path: temp_dir.path().join("config.json"),
            ..PluginOptions::default()
        };
        TorchPlugin::new(options, controller)
    }

    fn write_config(path: &Path, json: &str) {
        std::fs::write(path, json).expect("Failed to write test config");
    }

    #[test]
    fn test_load_then_enable_with_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);
        assert_eq!(plugin.state(), PluginState::Unloaded);
        assert!(plugin.settings().is_none());

        load_plugin(&mut plugin);
        assert_eq!(plugin.state(), PluginState::Loaded);

        let report = enable_plugin(&mut plugin).expect("Default config should apply");
        assert_eq!(report, ApplyReport { applied: 4, failed: 0 });
        assert_eq!(plugin.state(), PluginState::Enabled);
        assert_eq!(
            plugin.controller().set_calls(),
            vec![
                ("hytale:torch".to_string(), 15),
                ("hytale:wall_torch".to_string(), 15),
                ("hytale:soul_torch".to_string(), 12),
                ("hytale:redstone_torch".to_string(), 10),
            ]
        );
        assert_eq!(plugin.controller().restore_calls(), 0);
    }

    #[test]
    fn test_enable_disabled_in_config_applies_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);
        write_config(
            &plugin.options().config_path,
            r#"{"brightness":{"enabled":false}}"#,
        );

        load_plugin(&mut plugin);
        assert!(enable_plugin(&mut plugin).is_none());

        assert!(plugin.controller().calls.is_empty());
        assert_eq!(plugin.state(), PluginState::Enabled);
        assert!(!plugin.settings().map(|s| s.is_enabled()).unwrap_or(true));
    }

    #[test]
    fn test_enable_uses_configured_levels() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);
        write_config(
            &plugin.options().config_path,
            r#"{"brightness":{"torchLightLevel":30,"soulTorchLightLevel":-2}}"#,
        );

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);

        assert_eq!(
            plugin.controller().set_calls(),
            vec![
                ("hytale:torch".to_string(), 15),
                ("hytale:wall_torch".to_string(), 15),
                ("hytale:soul_torch".to_string(), 0),
                ("hytale:redstone_torch".to_string(), 10),
            ]
        );
    }

    #[test]
    fn test_base_torches_only() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);
        write_config(
            &plugin.options().config_path,
            r#"{"advanced":{"applyToAllTorchTypes":false}}"#,
        );

        load_plugin(&mut plugin);
        let report = enable_plugin(&mut plugin).expect("Config is enabled");

        assert_eq!(report.applied, 2);
        let ids: Vec<String> = plugin
            .controller()
            .set_calls()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["hytale:torch", "hytale:wall_torch"]);
    }

    #[test]
    fn test_vanilla_torches_untouched() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);
        write_config(
            &plugin.options().config_path,
            r#"{"advanced":{"modifyVanillaTorches":false}}"#,
        );

        load_plugin(&mut plugin);
        let report = enable_plugin(&mut plugin).expect("Config is enabled");

        assert_eq!(report.attempted(), 0);
        assert!(plugin.controller().calls.is_empty());
    }

    #[test]
    fn test_custom_namespace() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let options = PluginOptions {
            config_path: temp_dir.path().join("config.json"),
            namespace: "mymod".to_string(),
        };
        let mut plugin = TorchPlugin::new(options, RecordingController::default());

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);

        assert_eq!(plugin.controller().set_calls()[0].0, "mymod:torch");
    }

    #[test]
    fn test_controller_failure_does_not_stop_remaining_blocks() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let controller = RecordingController {
            failing: vec!["hytale:wall_torch".to_string()],
            ..RecordingController::default()
        };
        let mut plugin = create_plugin_with(&temp_dir, controller);

        load_plugin(&mut plugin);
        let report = enable_plugin(&mut plugin).expect("Config is enabled");

        assert_eq!(report, ApplyReport { applied: 3, failed: 1 });
        assert_eq!(plugin.controller().set_calls().len(), 4);
        assert_eq!(plugin.state(), PluginState::Enabled);
    }

    #[test]
    fn test_disable_restores_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);
        disable_plugin(&mut plugin);

        assert_eq!(plugin.state(), PluginState::Disabled);
        assert_eq!(plugin.controller().restore_calls(), 1);
        assert_eq!(plugin.controller().calls.last(), Some(&Call::Restore));
    }

    #[test]
    fn test_disable_survives_restore_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let controller = RecordingController {
            fail_restore: true,
            ..RecordingController::default()
        };
        let mut plugin = create_plugin_with(&temp_dir, controller);

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);
        assert!(!restore_defaults(&mut plugin));

        disable_plugin(&mut plugin);
        assert_eq!(plugin.state(), PluginState::Disabled);
    }

    #[test]
    fn test_reload_restores_then_reapplies() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);
        write_config(
            &plugin.options().config_path,
            r#"{"brightness":{"torchLightLevel":8},"advanced":{"applyToAllTorchTypes":false}}"#,
        );

        let report = reload_plugin(&mut plugin).expect("Reloaded config is enabled");
        assert_eq!(report.applied, 2);

        let calls = &plugin.controller().calls;
        assert_eq!(calls.len(), 4 + 1 + 2);
        assert_eq!(calls[4], Call::Restore);
        assert_eq!(calls[5], Call::Set("hytale:torch".to_string(), 8));
        assert_eq!(
            plugin.settings().map(|s| s.torch_light_level().get()),
            Some(8)
        );
    }

    #[test]
    fn test_reload_to_disabled_leaves_torches_unchanged() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);
        write_config(
            &plugin.options().config_path,
            r#"{"brightness":{"enabled":false}}"#,
        );

        assert!(reload_plugin(&mut plugin).is_none());
        assert_eq!(plugin.controller().calls.len(), 4);
        assert_eq!(plugin.controller().restore_calls(), 0);
        assert!(!plugin.settings().map(|s| s.is_enabled()).unwrap_or(true));
    }

    #[test]
    fn test_reload_after_disable_reenables() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);
        disable_plugin(&mut plugin);
        reload_plugin(&mut plugin).expect("Default config is enabled");

        assert_eq!(plugin.state(), PluginState::Enabled);
        assert_eq!(plugin.controller().restore_calls(), 2);
    }

    #[test]
    fn test_calls_before_load_are_ignored() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        assert!(enable_plugin(&mut plugin).is_none());
        assert!(reload_plugin(&mut plugin).is_none());
        disable_plugin(&mut plugin);

        assert_eq!(plugin.state(), PluginState::Unloaded);
        assert!(plugin.settings().is_none());
        assert!(plugin.controller().calls.is_empty());

        load_plugin(&mut plugin);
        load_plugin(&mut plugin);
        assert_eq!(plugin.state(), PluginState::Loaded);
    }

    #[test]
    fn test_enable_twice_rereads_config() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin).expect("Default config should apply");
        write_config(
            &plugin.options().config_path,
            r#"{"brightness":{"torchLightLevel":3}}"#,
        );

        let report = enable_plugin(&mut plugin).expect("Second enable should apply");
        assert_eq!(report.applied, 4);
        assert_eq!(plugin.state(), PluginState::Enabled);
        assert_eq!(
            plugin.settings().map(|s| s.torch_light_level().get()),
            Some(3)
        );

        let calls = &plugin.controller().calls;
        assert_eq!(calls.len(), 8);
        assert_eq!(calls[4], Call::Set("hytale:torch".to_string(), 3));
    }

    #[test]
    fn test_disable_right_after_load_restores_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        load_plugin(&mut plugin);
        disable_plugin(&mut plugin);

        assert_eq!(plugin.state(), PluginState::Disabled);
        assert_eq!(plugin.controller().calls, vec![Call::Restore]);
    }

    #[test]
    fn test_disable_twice_restores_each_time() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        load_plugin(&mut plugin);
        enable_plugin(&mut plugin);
        disable_plugin(&mut plugin);
        disable_plugin(&mut plugin);

        assert_eq!(plugin.controller().restore_calls(), 2);
    }

    #[test]
    fn test_reload_right_after_load_applies_config() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);
        write_config(
            &plugin.options().config_path,
            r#"{"brightness":{"wallTorchLightLevel":5}}"#,
        );

        load_plugin(&mut plugin);
        let report = reload_plugin(&mut plugin).expect("Config is enabled");

        assert_eq!(report.applied, 4);
        assert_eq!(plugin.state(), PluginState::Enabled);
        assert!(plugin.settings().map(|s| s.is_enabled()).unwrap_or(false));

        let calls = &plugin.controller().calls;
        assert_eq!(calls[0], Call::Restore);
        assert_eq!(calls[2], Call::Set("hytale:wall_torch".to_string(), 5));
    }

    #[test]
    fn test_reload_right_after_load_with_disabled_config() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);
        write_config(
            &plugin.options().config_path,
            r#"{"brightness":{"enabled":false}}"#,
        );

        load_plugin(&mut plugin);
        assert!(reload_plugin(&mut plugin).is_none());

        assert_eq!(plugin.state(), PluginState::Loaded);
        assert!(plugin.settings().is_some());
        assert!(plugin.controller().calls.is_empty());
    }

    #[test]
    fn test_apply_without_settings_is_noop() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let mut plugin = create_test_plugin(&temp_dir);

        assert_eq!(apply_modifications(&mut plugin), ApplyReport::default());
        assert!(plugin.controller().calls.is_empty());
    }
}
