use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use tracing::info;

use datepick::app::{App, Runtime};
use datepick::cli::Cli;
use datepick::config::PickerConfig;
use datepick::error::Result;
use datepick::logging::{self, LogConfig};
use datepick::picker::dismiss::PointerDownListeners;
use datepick::picker::value::PickerValue;
use datepick::terminal::Terminal;
use datepick::widgets::date_picker::DatePicker;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init_tracing(&LogConfig {
        debug: cli.debug,
        file: cli.log_file.clone(),
    })?;

    let mut config = match &cli.config {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    info!(mode = ?config.mode, "config loaded");

    let listeners = PointerDownListeners::new();
    let picker = DatePicker::from_config("date-picker", &config, listeners.clone())?;

    let committed: Rc<RefCell<Vec<PickerValue>>> = Rc::default();
    let sink = Rc::clone(&committed);
    let app = App::new(picker, listeners)
        .on_change(move |value| sink.borrow_mut().push(value.clone()));

    Runtime::new(app, Terminal::new()?).run()?;

    for value in committed.borrow().iter() {
        match serde_json::to_string(value) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
    Ok(())
}
