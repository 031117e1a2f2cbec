use std::time::Duration;

use tracing::info;

use crate::app::App;
use crate::error::Result;
use crate::terminal::Terminal;

const POLL_INTERVAL: Duration = Duration::from_millis(120);

pub struct Runtime {
    app: App,
    terminal: Terminal,
}

impl Runtime {
    pub fn new(app: App, terminal: Terminal) -> Self {
        Self { app, terminal }
    }

    pub fn run(&mut self) -> Result<()> {
        self.terminal.enter()?;
        info!("picker started");

        let run_result = (|| -> Result<()> {
            self.render()?;

            while !self.app.should_exit() {
                let event = self.terminal.poll_event(POLL_INTERVAL)?;
                if self.app.handle_event(event) {
                    self.render()?;
                }
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit().map_err(Into::into);
        info!("picker stopped");
        run_result.and(exit_result)
    }

    fn render(&mut self) -> Result<()> {
        let lines = self.app.view(self.terminal.size());
        self.terminal.render(&lines)?;
        Ok(())
    }
}
