// src/bin/demo.rs
// Repeat a line of text, as a CLI or as a generated form.
// Usage:
//   argform-demo "hello" -n 3 --loud
//   argform-demo                          (opens the form)
//   argform-demo --ignore-gui "hello"     (headless run of the GUI-capable build)

use std::error::Error;
use std::fs;

use argform::config::consts::GEOMETRY_FILE;
use argform::config::gui;
use argform::{ArgSpec, GuiOptions, Router, WidgetKind};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let mut router = Router::new(entry);

    let mut cfg = gui::load(GEOMETRY_FILE);
    cfg.program_name = Some("Text Repeater".to_owned());
    cfg.program_description = Some("Repeat a line of text a few times.".to_owned());
    cfg.remember = true;

    router
        .run(cfg)
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))
}

fn entry(router: &mut Router) -> Result<(), Box<dyn Error>> {
    router.add_argument(
        Some("Input"),
        ArgSpec::positional("text")
            .required(true)
            .help("Text to repeat")
            .gui_options(GuiOptions {
                placeholder: Some("Type something".to_owned()),
                full_width: true,
                ..Default::default()
            }),
    )?;
    router.add_argument(
        Some("Input"),
        ArgSpec::option("count")
            .short('n')
            .default_value("3")
            .help("How many times to repeat it")
            .widget(WidgetKind::IntSpinner),
    )?;
    router.add_argument(
        Some("Output"),
        ArgSpec::option("case")
            .choices(["upper", "lower", "asis"])
            .default_value("asis")
            .help("Case transform applied to each line")
            .widget(WidgetKind::Dropdown),
    )?;
    router.add_argument(
        Some("Output"),
        ArgSpec::option("out")
            .short('o')
            .help("Write to this file instead of stdout")
            .widget(WidgetKind::FileChooser),
    )?;
    router.add_argument(
        Some("Output"),
        ArgSpec::flag("loud").help("Append an exclamation mark"),
    )?;

    let matches = router.parse_args()?;

    let text = matches.get_one::<String>("text").ok_or("missing text")?;
    let count: usize = matches
        .get_one::<String>("count")
        .ok_or("missing count")?
        .parse()?;
    let case = matches
        .get_one::<String>("case")
        .map(String::as_str)
        .unwrap_or("asis");

    let mut line = match case {
        "upper" => text.to_uppercase(),
        "lower" => text.to_lowercase(),
        _ => text.clone(),
    };
    if matches.get_flag("loud") {
        line.push('!');
    }

    let mut body = String::new();
    for _ in 0..count {
        body.push_str(&line);
        body.push('\n');
    }

    match matches.get_one::<String>("out") {
        Some(path) => {
            fs::write(path, body)?;
            println!("Wrote {path}");
        }
        None => print!("{body}"),
    }
    Ok(())
}
