// src/router.rs
use std::env;
use std::error::Error;
use std::path::Path;

use clap::ArgMatches;

use crate::args::{self, ArgSpec};
use crate::config::gui::GuiConfig;
use crate::form;
use crate::mode::{self, Mode};
use crate::parser::{ActiveParser, FormParser, PlainParser};

/// The user-supplied program body. Registers its arguments through the
/// router, then triggers parsing and runs its own logic on the matches.
pub type EntryPoint = fn(&mut Router) -> Result<(), Box<dyn Error>>;

/// Mode-selecting argument router. Decides CLI/GUI/HYBRID once, at
/// construction, and owns the one parser created during `run`.
pub struct Router {
    mode: Mode,
    args: Vec<String>, // effective argv, override token stripped
    entry: EntryPoint,
    parser: Option<ActiveParser>, // populated exactly once, in run()
    gui_config: Option<GuiConfig>, // set by run() in GUI mode only
}

impl Router {
    pub fn new(entry: EntryPoint) -> Self {
        Self::from_args(env::args().collect(), entry)
    }

    /// Construct from an explicit argument vector (first element is the
    /// program name, as in `std::env::args`).
    pub fn from_args(args: Vec<String>, entry: EntryPoint) -> Self {
        let (mode, args) = mode::detect(args);
        log::info!("Mode: {:?} ({} trailing arg(s))", mode, args.len().saturating_sub(1));
        Self {
            mode,
            args,
            entry,
            parser: None,
            gui_config: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Effective invocation arguments, override token already stripped.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn prog_name(&self) -> String {
        self.args
            .first()
            .map(|a| {
                Path::new(a)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| a.clone())
            })
            .unwrap_or_else(|| "argform".to_owned())
    }

    /// Construct the mode's parser, then hand control to the program body.
    /// `config` is forwarded to the form generator in GUI mode and ignored
    /// otherwise. CLI/HYBRID invoke the entry point directly; GUI delegates
    /// to the form module, which invokes it itself.
    pub fn run(&mut self, config: GuiConfig) -> Result<(), Box<dyn Error>> {
        if self.parser.is_some() {
            return Err("run() may only be called once per process".into());
        }
        let prog = self.prog_name();
        match self.mode {
            Mode::Cli | Mode::Hybrid => {
                log::info!("Run: {:?}, plain parser for {}", self.mode, prog);
                self.parser = Some(ActiveParser::Plain(PlainParser::new(&prog)));
                let entry = self.entry;
                entry(self)
            }
            Mode::Gui => {
                log::info!("Run: Gui, form parser for {}", prog);
                self.parser = Some(ActiveParser::Form(FormParser::new(&prog)));
                self.gui_config = Some(config);
                form::launch(self.entry, self)
            }
        }
    }

    /// Forward an argument definition to the active parser. Outside GUI
    /// mode the two GUI-only options are stripped first; `parent` becomes
    /// a help heading (plain) or a form section (GUI).
    pub fn add_argument(&mut self, parent: Option<&str>, spec: ArgSpec) -> Result<(), Box<dyn Error>> {
        let spec = args::strip_gui_only(self.mode, spec);
        log::debug!("Args: register {:?} (section {:?})", spec.name, parent);
        match self.parser.as_mut() {
            Some(ActiveParser::Plain(p)) => {
                p.add(parent, &spec);
                Ok(())
            }
            Some(ActiveParser::Form(f)) => {
                f.add(parent, spec);
                Ok(())
            }
            None => Err("no active parser; add_argument must run inside the program entry point".into()),
        }
    }

    /// Produce matches from the active parser. Plain parsers read the
    /// effective argument vector; the form parser first shows the form,
    /// blocking until the user submits, then parses the collected tokens
    /// with the same underlying command.
    pub fn parse_args(&mut self) -> Result<ArgMatches, Box<dyn Error>> {
        match self.parser.as_mut() {
            Some(ActiveParser::Plain(p)) => p.parse(self.args.clone()),
            Some(ActiveParser::Form(f)) => {
                let cfg = self.gui_config.clone().unwrap_or_default();
                let argv = form::show(f, &cfg)?;
                log::info!("Form: submitted {} token(s)", argv.len().saturating_sub(1));
                f.parse(argv)
            }
            None => Err("no active parser; parse_args must run inside the program entry point".into()),
        }
    }
}
