// src/config/gui.rs
use std::path::{Path, PathBuf};
use std::fs;

use super::consts::{DEFAULT_WINDOW_H, DEFAULT_WINDOW_W};

/// Configuration forwarded verbatim to the form generator when the mode
/// is GUI; ignored in every other mode.
#[derive(Clone, Debug, PartialEq)]
pub struct GuiConfig {
    pub program_name: Option<String>,
    pub program_description: Option<String>,
    pub window_w: u32,
    pub window_h: u32,
    /// PNG decoded for the window icon; skipped with a warning if unreadable.
    pub icon_path: Option<PathBuf>,
    /// Save window geometry back to the geometry file when the form runs.
    pub remember: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            program_name: None,
            program_description: None,
            window_w: DEFAULT_WINDOW_W,
            window_h: DEFAULT_WINDOW_H,
            icon_path: None,
            remember: false,
        }
    }
}

/// Read remembered geometry over the defaults. Missing or malformed files
/// fall back silently; program name/description/icon are caller-supplied
/// and never persisted.
pub fn load(path: &str) -> GuiConfig {
    let mut cfg = GuiConfig::default();
    if !Path::new(path).exists() {
        return cfg;
    }
    let text = match fs::read_to_string(path) { Ok(t) => t, Err(_) => return cfg };
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();
            match key {
                "window_w" => { if let Ok(v) = val.parse() { cfg.window_w = v; } }
                "window_h" => { if let Ok(v) = val.parse() { cfg.window_h = v; } }
                "remember" => cfg.remember = val == "1" || val.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }
    }
    cfg
}

pub fn save(path: &str, cfg: &GuiConfig) {
    let mut s = String::new();
    s.push_str(&format!("window_w={}\n", cfg.window_w));
    s.push_str(&format!("window_h={}\n", cfg.window_h));
    s.push_str(&format!("remember={}\n", if cfg.remember { 1 } else { 0 }));
    let _ = fs::write(path, s);
}
