// src/form/model.rs
//
// Pure form model: widget-backed state per registered argument, and the
// conversion back into an argv token vector. No egui types in here.
use crate::args::WidgetKind;
use crate::parser::FormField;

pub struct FieldState {
    pub field: FormField,
    pub text: String, // text-backed widgets (also dropdown selection)
    pub flag: bool,   // checkbox
    pub num: i64,     // spinner
}

impl FieldState {
    pub fn new(field: &FormField) -> Self {
        let spec = &field.spec;
        let text = spec.default.clone().unwrap_or_default();
        let num = spec.default.as_deref().and_then(|d| d.parse().ok()).unwrap_or(0);
        Self {
            field: field.clone(),
            text,
            flag: false,
            num,
        }
    }

    pub fn widget(&self) -> WidgetKind {
        self.field.spec.widget_or_default()
    }

    /// Current value as it would appear on a command line.
    pub fn value_text(&self) -> String {
        match self.widget() {
            WidgetKind::IntSpinner => self.num.to_string(),
            _ => self.text.trim().to_owned(),
        }
    }

    /// Required value argument with nothing entered yet. Spinners always
    /// carry a value, so they never count as missing.
    pub fn is_missing(&self) -> bool {
        let spec = &self.field.spec;
        spec.takes_value
            && spec.required
            && !matches!(self.widget(), WidgetKind::IntSpinner)
            && self.value_text().is_empty()
    }
}

/// Collected widget values back into argv tokens: program name first, then
/// flags and options in declaration order, then positionals in declaration
/// order. Unchecked flags and empty optional values are omitted.
pub fn build_argv(prog: &str, fields: &[FieldState]) -> Vec<String> {
    let mut argv = vec![prog.to_owned()];
    let mut positionals = Vec::new();

    for state in fields {
        let spec = &state.field.spec;

        if !spec.takes_value {
            if state.flag {
                if let Some(token) = spec.flag_token() {
                    argv.push(token);
                }
            }
            continue;
        }

        let value = state.value_text();
        if value.is_empty() {
            continue;
        }
        match spec.flag_token() {
            Some(token) => {
                argv.push(token);
                argv.push(value);
            }
            None => positionals.push(value),
        }
    }

    argv.extend(positionals);
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ArgSpec, WidgetKind};
    use crate::parser::FormField;

    fn field(spec: ArgSpec) -> FormField {
        FormField { spec, section: None }
    }

    fn state(spec: ArgSpec) -> FieldState {
        FieldState::new(&field(spec))
    }

    #[test]
    fn flags_emit_only_when_checked() {
        let mut on = state(ArgSpec::flag("loud"));
        on.flag = true;
        let off = state(ArgSpec::flag("quiet"));

        let argv = build_argv("prog", &[on, off]);
        assert_eq!(argv, vec!["prog", "--loud"]);
    }

    #[test]
    fn options_precede_positionals_in_declaration_order() {
        let mut first = state(ArgSpec::positional("input"));
        first.text = "in.txt".into();
        let mut opt = state(ArgSpec::option("out").short('o'));
        opt.text = "out.txt".into();
        let mut second = state(ArgSpec::positional("extra"));
        second.text = "more".into();

        let argv = build_argv("prog", &[first, opt, second]);
        assert_eq!(argv, vec!["prog", "--out", "out.txt", "in.txt", "more"]);
    }

    #[test]
    fn empty_optional_values_are_omitted() {
        let untouched = state(ArgSpec::option("out"));
        let blank = {
            let mut s = state(ArgSpec::option("name"));
            s.text = "   ".into();
            s
        };
        let argv = build_argv("prog", &[untouched, blank]);
        assert_eq!(argv, vec!["prog"]);
    }

    #[test]
    fn spinners_always_emit() {
        let s = state(ArgSpec::option("count").widget(WidgetKind::IntSpinner));
        let argv = build_argv("prog", &[s]);
        assert_eq!(argv, vec!["prog", "--count", "0"]);
    }

    #[test]
    fn default_seeds_the_widget_value() {
        let s = state(ArgSpec::option("count").widget(WidgetKind::IntSpinner).default_value("3"));
        assert_eq!(s.num, 3);
        let t = state(ArgSpec::option("case").choices(["upper", "lower"]).default_value("lower"));
        assert_eq!(t.text, "lower");
    }

    #[test]
    fn missing_required_is_detected() {
        let s = state(ArgSpec::positional("input").required(true));
        assert!(s.is_missing());

        let mut filled = state(ArgSpec::positional("input").required(true));
        filled.text = "x".into();
        assert!(!filled.is_missing());

        // flags and spinners never count as missing
        let f = state(ArgSpec::flag("loud"));
        assert!(!f.is_missing());
        let n = state(ArgSpec::option("count").required(true).widget(WidgetKind::IntSpinner));
        assert!(!n.is_missing());
    }
}
