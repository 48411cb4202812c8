// src/args.rs
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction};

use crate::mode::Mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    TextField,
    PasswordField,
    FileChooser,
    DirChooser,
    Dropdown,
    Checkbox,
    IntSpinner,
}

/// Display options consumed only by the form renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuiOptions {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub full_width: bool,
}

/// One argument definition, forwarded to the active parser by the router.
/// `widget` and `gui_options` are meaningful to the form renderer only;
/// outside GUI mode they are stripped before forwarding (see strip_gui_only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: String,
    pub short: Option<char>,
    pub long: Option<String>,        // no short and no long → positional
    pub help: Option<String>,
    pub required: bool,
    pub takes_value: bool,
    pub default: Option<String>,
    pub choices: Vec<String>,

    pub widget: Option<WidgetKind>,
    pub gui_options: Option<GuiOptions>,
}

impl ArgSpec {
    fn new(name: &str, takes_value: bool) -> Self {
        Self {
            name: name.to_owned(),
            short: None,
            long: None,
            help: None,
            required: false,
            takes_value,
            default: None,
            choices: Vec::new(),
            widget: None,
            gui_options: None,
        }
    }

    /// Positional value argument.
    pub fn positional(name: &str) -> Self {
        Self::new(name, true)
    }

    /// Value argument with `--<name>` as its long flag.
    pub fn option(name: &str) -> Self {
        let mut spec = Self::new(name, true);
        spec.long = Some(name.to_owned());
        spec
    }

    /// Boolean flag with `--<name>` as its long flag.
    pub fn flag(name: &str) -> Self {
        let mut spec = Self::new(name, false);
        spec.long = Some(name.to_owned());
        spec
    }

    pub fn short(mut self, c: char) -> Self {
        self.short = Some(c);
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = Some(text.to_owned());
        self
    }

    pub fn required(mut self, yes: bool) -> Self {
        self.required = yes;
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default = Some(value.to_owned());
        self
    }

    pub fn choices<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn widget(mut self, kind: WidgetKind) -> Self {
        self.widget = Some(kind);
        self
    }

    pub fn gui_options(mut self, options: GuiOptions) -> Self {
        self.gui_options = Some(options);
        self
    }

    /* ---------- form-side helpers ---------- */

    /// Label shown next to the widget: the display override, else the name.
    pub fn label(&self) -> &str {
        self.gui_options
            .as_ref()
            .and_then(|o| o.label.as_deref())
            .unwrap_or(&self.name)
    }

    /// Widget to render when none was requested explicitly.
    pub fn widget_or_default(&self) -> WidgetKind {
        if let Some(w) = self.widget {
            return w;
        }
        if !self.takes_value {
            WidgetKind::Checkbox
        } else if !self.choices.is_empty() {
            WidgetKind::Dropdown
        } else {
            WidgetKind::TextField
        }
    }

    /// Token that names this argument on a command line, if any.
    pub fn flag_token(&self) -> Option<String> {
        if let Some(long) = &self.long {
            return Some(format!("--{long}"));
        }
        self.short.map(|c| format!("-{c}"))
    }

    /* ---------- conversion to the plain parser ---------- */

    pub fn to_clap(&self) -> Arg {
        let mut arg = Arg::new(self.name.clone());
        if let Some(c) = self.short {
            arg = arg.short(c);
        }
        if let Some(long) = &self.long {
            arg = arg.long(long.clone());
        }
        if let Some(help) = &self.help {
            arg = arg.help(help.clone());
        }

        if self.takes_value {
            arg = arg
                .action(ArgAction::Set)
                .value_name(self.name.to_uppercase())
                .required(self.required);
            if !self.choices.is_empty() {
                arg = arg.value_parser(PossibleValuesParser::new(self.choices.clone()));
            }
            if let Some(default) = &self.default {
                arg = arg.default_value(default.clone());
            }
        } else {
            arg = arg.action(ArgAction::SetTrue);
        }

        arg
    }
}

/// Mode-aware deny-list applied before forwarding a spec to the active
/// parser. The plain parser does not understand the two GUI-only options,
/// so outside GUI mode they are dropped silently.
pub fn strip_gui_only(mode: Mode, mut spec: ArgSpec) -> ArgSpec {
    if mode != Mode::Gui {
        spec.widget = None;
        spec.gui_options = None;
    }
    spec
}
