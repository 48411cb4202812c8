// tests/arg_filter.rs
//
// The mode-aware filter that keeps GUI-only options away from the plain
// parser, and leaves everything else alone.
//
use argform::args::{strip_gui_only, ArgSpec, GuiOptions, WidgetKind};
use argform::Mode;

fn decorated() -> ArgSpec {
    ArgSpec::option("out")
        .short('o')
        .help("Output file")
        .required(true)
        .default_value("out.csv")
        .widget(WidgetKind::FileChooser)
        .gui_options(GuiOptions {
            label: Some("Output file".to_owned()),
            placeholder: Some("where to write".to_owned()),
            full_width: true,
        })
}

#[test]
fn cli_mode_strips_widget_and_gui_options() {
    let stripped = strip_gui_only(Mode::Cli, decorated());
    assert_eq!(stripped.widget, None);
    assert_eq!(stripped.gui_options, None);
}

#[test]
fn hybrid_mode_strips_like_cli() {
    let stripped = strip_gui_only(Mode::Hybrid, decorated());
    assert_eq!(stripped.widget, None);
    assert_eq!(stripped.gui_options, None);
}

#[test]
fn gui_mode_passes_through_unchanged() {
    let spec = decorated();
    let kept = strip_gui_only(Mode::Gui, spec.clone());
    assert_eq!(kept, spec);
}

#[test]
fn all_other_fields_survive_the_filter() {
    let stripped = strip_gui_only(Mode::Cli, decorated());
    assert_eq!(stripped.name, "out");
    assert_eq!(stripped.short, Some('o'));
    assert_eq!(stripped.long.as_deref(), Some("out"));
    assert_eq!(stripped.help.as_deref(), Some("Output file"));
    assert!(stripped.required);
    assert!(stripped.takes_value);
    assert_eq!(stripped.default.as_deref(), Some("out.csv"));
}

#[test]
fn undecorated_specs_are_untouched_in_any_mode() {
    let plain = ArgSpec::flag("all");
    for mode in [Mode::Cli, Mode::Gui, Mode::Hybrid] {
        assert_eq!(strip_gui_only(mode, plain.clone()), plain);
    }
}

#[test]
fn default_widget_follows_the_spec_shape() {
    assert_eq!(ArgSpec::flag("all").widget_or_default(), WidgetKind::Checkbox);
    assert_eq!(
        ArgSpec::option("fmt").choices(["csv", "tsv"]).widget_or_default(),
        WidgetKind::Dropdown
    );
    assert_eq!(ArgSpec::option("name").widget_or_default(), WidgetKind::TextField);
    // explicit choice wins
    assert_eq!(
        ArgSpec::option("secret").widget(WidgetKind::PasswordField).widget_or_default(),
        WidgetKind::PasswordField
    );
}
