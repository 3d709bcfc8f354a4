//! Presentation host preferences.
//!
//! Window size and faction colors, loaded from a JSON file next to the
//! process when one exists. The simulation itself has no knobs here; its
//! fixed parameters live in `consts`.

use serde::{Deserialize, Serialize};

/// Host settings. Colors are packed `0x00RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Arena/window width in pixels
    pub window_width: usize,
    /// Arena/window height in pixels
    pub window_height: usize,
    /// Cells owned by Day
    pub day_color: u32,
    /// Cells owned by Night
    pub night_color: u32,
    /// Both balls
    pub ball_color: u32,
    /// Score overlay text
    pub text_color: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            day_color: 0xFF_FF_FF,
            night_color: 0x00_00_00,
            ball_color: 0x00_00_00,
            text_color: 0x00_00_FF,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    const FILE_NAME: &'static str = "pong-war.json";

    /// Load settings from `pong-war.json`, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", Self::FILE_NAME);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_classic_palette() {
        let settings = Settings::default();
        assert_eq!(settings.day_color, 0xFFFFFF);
        assert_eq!(settings.night_color, 0x000000);
        assert_eq!(settings.ball_color, 0x000000);
        assert_eq!(settings.text_color, 0x0000FF);
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 600);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let settings = Settings {
            window_width: 640,
            window_height: 480,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_partial_json_is_rejected_not_guessed() {
        // Missing fields fall back to defaults via load(), not serde magic
        let err = serde_json::from_str::<Settings>(r#"{"window_width": 640}"#);
        assert!(err.is_err());
    }
}
