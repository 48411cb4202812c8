// src/mode.rs
use crate::config::consts::IGNORE_GUI_FLAG;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Cli,
    Gui,
    Hybrid,
}

// Decide CLI vs GUI vs HYBRID.
//
// Precedence matters: the override token wins over the argument-count
// heuristic, so a GUI-capable build can still run headless (tests, CI)
// even when invoked with zero trailing arguments.
pub fn detect(mut args: Vec<String>) -> (Mode, Vec<String>) {
    if let Some(pos) = args.iter().position(|a| a == IGNORE_GUI_FLAG) {
        // first occurrence only; later duplicates belong to the program
        args.remove(pos);
        return (Mode::Hybrid, args);
    }

    if args.len() <= 1 {
        // only program name
        return (Mode::Gui, args);
    }

    (Mode::Cli, args)
}
