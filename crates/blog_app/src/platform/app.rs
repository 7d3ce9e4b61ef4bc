use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use blog_core::{init, update, Msg, PageState};
use blog_logging::{blog_info, blog_warn};

use super::config::{self, AppConfig, CONFIG_FILENAME};
use super::effects::{EffectExecutor, EffectRunner};
use super::input::{parse_command, Command};
use super::{logging, ui};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum LoopEvent {
    Msg(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let loaded = config::load(Path::new(CONFIG_FILENAME));
    let log_destination = loaded
        .as_ref()
        .map(|config| config.log_destination)
        .unwrap_or_default();
    logging::initialize(log_destination);

    let config = loaded.unwrap_or_else(|err| {
        blog_warn!("{}; using defaults", err);
        AppConfig::default()
    });
    blog_info!("Starting blog reader against {}", config.api_base_url);

    let (event_tx, event_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(config.fetch_settings(), event_tx.clone())
        .context("failed to start fetch engine")?;
    spawn_input_reader(event_tx);

    let mut app = App::new(runner, io::stdout(), config.clear_screen);
    app.start()?;

    for event in event_rx {
        match event {
            LoopEvent::Msg(msg) => app.dispatch(msg)?,
            LoopEvent::Quit => break,
        }
    }

    blog_info!("Blog reader exiting");
    Ok(())
}

/// Reads commands from stdin and forwards them; end of input quits.
fn spawn_input_reader(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(Command::Msg(msg)) => {
                    if tx.send(LoopEvent::Msg(msg)).is_err() {
                        return;
                    }
                }
                Some(Command::Quit) => break,
                Some(Command::Unknown(input)) => blog_warn!("Ignoring unknown command {:?}", input),
                None => {}
            }
        }
        let _ = tx.send(LoopEvent::Quit);
    });
}

/// Owns the page state and applies messages to it on the loop thread.
pub struct App<E, W> {
    state: PageState,
    executor: E,
    out: W,
    clear_screen: bool,
}

impl<E: EffectExecutor, W: Write> App<E, W> {
    pub fn new(executor: E, out: W, clear_screen: bool) -> Self {
        Self {
            state: PageState::new(),
            executor,
            out,
            clear_screen,
        }
    }

    /// Issues the startup fetch for page 1 and draws the loading page.
    pub fn start(&mut self) -> io::Result<()> {
        let (mut state, effects) = init();
        state.consume_dirty();
        self.state = state;
        self.executor.execute(effects);
        self.render()
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        if let Msg::ArticlesLoaded {
            request_id, page, ..
        }
        | Msg::FetchFailed {
            request_id, page, ..
        } = &msg
        {
            if self.state.in_flight() != Some(*request_id) {
                blog_info!(
                    "Dropping stale response request_id={} page={} (showing page {})",
                    request_id,
                    page,
                    self.state.current_page()
                );
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.executor.execute(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let page = ui::render::render(&self.state.view());
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(page.as_bytes())?;
        self.out.flush()
    }
}
