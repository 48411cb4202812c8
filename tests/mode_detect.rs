// tests/mode_detect.rs
//
// Mode selection and override-token stripping.
//
use argform::mode::{self, Mode};

fn argv(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn bare_invocation_is_gui() {
    let (mode, args) = mode::detect(argv(&["prog"]));
    assert_eq!(mode, Mode::Gui);
    assert_eq!(args, argv(&["prog"]));
}

#[test]
fn override_token_alone_is_hybrid() {
    let (mode, args) = mode::detect(argv(&["prog", "--ignore-gui"]));
    assert_eq!(mode, Mode::Hybrid);
    assert_eq!(args, argv(&["prog"]));
}

#[test]
fn override_token_with_trailing_args_is_hybrid() {
    // precedence: the override wins over the "has arguments" case
    let (mode, args) = mode::detect(argv(&["prog", "--ignore-gui", "--x", "1"]));
    assert_eq!(mode, Mode::Hybrid);
    assert_eq!(args, argv(&["prog", "--x", "1"]));
}

#[test]
fn trailing_args_without_override_are_cli() {
    let (mode, args) = mode::detect(argv(&["prog", "--x", "1"]));
    assert_eq!(mode, Mode::Cli);
    assert_eq!(args, argv(&["prog", "--x", "1"]));
}

#[test]
fn override_removed_exactly_once_order_preserved() {
    // a later duplicate belongs to the program, not the router
    let (mode, args) = mode::detect(argv(&[
        "prog",
        "--a",
        "--ignore-gui",
        "--b",
        "--ignore-gui",
    ]));
    assert_eq!(mode, Mode::Hybrid);
    assert_eq!(args, argv(&["prog", "--a", "--b", "--ignore-gui"]));
}

#[test]
fn override_in_first_position_is_stripped() {
    let (mode, args) = mode::detect(argv(&["prog", "--ignore-gui", "input.txt"]));
    assert_eq!(mode, Mode::Hybrid);
    assert_eq!(args, argv(&["prog", "input.txt"]));
}

#[test]
fn empty_argv_counts_as_bare() {
    let (mode, args) = mode::detect(Vec::new());
    assert_eq!(mode, Mode::Gui);
    assert!(args.is_empty());
}
