use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "AnimationConfig::default_tick_hz")]
    pub tick_hz: f32,
    #[serde(default = "AnimationConfig::default_tick_dt")]
    pub tick_dt: f32,
    #[serde(default = "AnimationConfig::default_cycle_dt")]
    pub cycle_dt: f32,
    #[serde(default = "AnimationConfig::default_reset_time_on_preset")]
    pub reset_time_on_preset: bool,
}

impl AnimationConfig {
    fn default_tick_hz() -> f32 {
        30.0
    }
    fn default_tick_dt() -> f32 {
        0.01
    }
    fn default_cycle_dt() -> f32 {
        0.1
    }
    fn default_reset_time_on_preset() -> bool {
        true
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_hz: Self::default_tick_hz(),
            tick_dt: Self::default_tick_dt(),
            cycle_dt: Self::default_cycle_dt(),
            reset_time_on_preset: Self::default_reset_time_on_preset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionsConfig {
    #[serde(default = "ReactionsConfig::default_enabled")]
    pub enabled: bool,
}

impl ReactionsConfig {
    fn default_enabled() -> bool {
        true
    }
}

impl Default for ReactionsConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "ViewerConfig::default_marker_count")]
    pub marker_count: usize,
    #[serde(default = "ViewerConfig::default_yaw_rate")]
    pub yaw_rate: f32,
    #[serde(default = "ViewerConfig::default_pitch")]
    pub pitch: f32,
}

impl ViewerConfig {
    fn default_marker_count() -> usize {
        50
    }
    fn default_yaw_rate() -> f32 {
        0.15
    }
    fn default_pitch() -> f32 {
        0.6
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            marker_count: Self::default_marker_count(),
            yaw_rate: Self::default_yaw_rate(),
            pitch: Self::default_pitch(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub reactions: ReactionsConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || (trimmed.starts_with('[') && trimmed.ends_with(']')) {
                        commented.push_str(line);
                    } else {
                        commented.push_str("# ");
                        commented.push_str(line);
                    }
                    commented.push('\n');
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                eprintln!("Failed to serialize default config: {err}. Continuing with defaults.");
            }
        }
        default_cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "helicoil_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_commented_defaults() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();
        let _ = fs::remove_file(&path);

        let cfg = AppConfig::load_or_default(&path_str);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.animation.tick_hz, 30.0);
        assert_eq!(cfg.animation.tick_dt, 0.01);
        assert_eq!(cfg.animation.cycle_dt, 0.1);
        assert!(cfg.animation.reset_time_on_preset);
        assert!(cfg.reactions.enabled);
        assert_eq!(cfg.viewer.marker_count, 50);

        let contents = fs::read_to_string(&path).expect("read written config");
        assert!(contents.contains("[animation]"));
        assert!(
            contents.contains("# marker_count = 50"),
            "values should be written commented out"
        );
        assert!(contents.contains("# enabled = true"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_existing() {
        let path = unique_path("custom.toml");
        let path_str = path.to_string_lossy().to_string();
        let custom = AppConfig {
            animation: AnimationConfig {
                tick_hz: 60.0,
                tick_dt: 0.02,
                cycle_dt: 0.25,
                reset_time_on_preset: false,
            },
            reactions: ReactionsConfig { enabled: false },
            viewer: ViewerConfig {
                marker_count: 25,
                yaw_rate: 0.3,
                pitch: 0.4,
            },
        };
        let text = toml::to_string_pretty(&custom).unwrap();
        fs::write(&path, text).unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.animation.tick_hz, 60.0);
        assert_eq!(cfg.animation.tick_dt, 0.02);
        assert_eq!(cfg.animation.cycle_dt, 0.25);
        assert!(!cfg.animation.reset_time_on_preset);
        assert!(!cfg.reactions.enabled);
        assert_eq!(cfg.viewer.marker_count, 25);
        assert_eq!(cfg.viewer.yaw_rate, 0.3);
        assert_eq!(cfg.viewer.pitch, 0.4);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let path = unique_path("broken.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "[animation]\ntick_hz = \"fast\"\n").unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.animation.tick_hz, 30.0);
        assert!(cfg.reactions.enabled);

        let _ = fs::remove_file(&path);
    }
}
