// src/config/consts.rs

// Mode selection
pub const IGNORE_GUI_FLAG: &str = "--ignore-gui";

// Form window defaults
pub const DEFAULT_WINDOW_W: u32 = 640;
pub const DEFAULT_WINDOW_H: u32 = 480;

// Remembered window geometry
pub const GEOMETRY_FILE: &str = ".argform.conf";
