// src/parser.rs
//
// The two parser variants the router can own. Exactly one is constructed
// per process, during Router::run. The GUI-capable variant is the plain
// parser plus per-argument widget metadata for the form renderer.
use std::error::Error;
use std::mem;

use clap::{ArgMatches, Command};

use crate::args::ArgSpec;

pub enum ActiveParser {
    Plain(PlainParser),
    Form(FormParser),
}

/* ---------- plain (CLI / HYBRID) ---------- */

pub struct PlainParser {
    command: Command,
}

impl PlainParser {
    pub fn new(prog: &str) -> Self {
        Self { command: Command::new(prog.to_owned()) }
    }

    pub fn add(&mut self, parent: Option<&str>, spec: &ArgSpec) {
        let mut arg = spec.to_clap();
        if let Some(heading) = parent {
            arg = arg.help_heading(heading.to_owned());
        }
        // Command::arg takes self by value; swap through a placeholder.
        let command = mem::replace(&mut self.command, Command::new(""));
        self.command = command.arg(arg);
    }

    pub fn parse(&mut self, argv: Vec<String>) -> Result<ArgMatches, Box<dyn Error>> {
        Ok(self.command.try_get_matches_from_mut(argv)?)
    }
}

/* ---------- GUI-capable ---------- */

#[derive(Clone, Debug)]
pub struct FormField {
    pub spec: ArgSpec,
    pub section: Option<String>,
}

pub struct FormParser {
    command: Command,
    fields: Vec<FormField>,
}

impl FormParser {
    pub fn new(prog: &str) -> Self {
        Self {
            command: Command::new(prog.to_owned()),
            fields: Vec::new(),
        }
    }

    pub fn prog(&self) -> &str {
        self.command.get_name()
    }

    pub fn add(&mut self, parent: Option<&str>, spec: ArgSpec) {
        let mut arg = spec.to_clap();
        if let Some(heading) = parent {
            arg = arg.help_heading(heading.to_owned());
        }
        let command = mem::replace(&mut self.command, Command::new(""));
        self.command = command.arg(arg);

        self.fields.push(FormField {
            spec,
            section: parent.map(str::to_owned),
        });
    }

    /// Registered fields, in declaration order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn parse(&mut self, argv: Vec<String>) -> Result<ArgMatches, Box<dyn Error>> {
        Ok(self.command.try_get_matches_from_mut(argv)?)
    }
}
