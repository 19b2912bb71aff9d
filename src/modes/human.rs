use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep_until};
use tracing::{debug, info};

use crate::error::GameResult;
use crate::game::{GameConfig, GameEngine, JsonFileLevelSource, LevelSource};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::{FrameBuffer, Renderer};

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    board: FrameBuffer,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    /// When the next tick fires; `None` while nothing is scheduled
    next_tick: Option<Instant>,
    status: Option<String>,
}

impl HumanMode {
    /// Play with levels read from the configured level document
    pub fn new(config: GameConfig) -> Self {
        let source = JsonFileLevelSource::new(&config.levels_path);
        Self::with_source(config, source)
    }

    pub fn with_source(config: GameConfig, source: impl LevelSource + 'static) -> Self {
        let board = FrameBuffer::new(&config);
        let engine = GameEngine::new(config, source);

        Self {
            engine,
            board,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            next_tick: None,
            status: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // A failed start leaves the board blank with the error in the footer
        self.start_game();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick, armed only while the engine is running
                _ = wait_for_tick(self.next_tick) => {
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.board,
                            self.engine.state(),
                            &self.stats,
                            self.status.as_deref(),
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("Leaving game loop");
        Ok(())
    }

    fn start_game(&mut self) {
        let result = self.engine.start(&mut self.board);
        self.schedule(result);
    }

    fn reset_game(&mut self) {
        let result = self.engine.reset(&mut self.board);
        self.stats.on_game_start();
        self.schedule(result);
    }

    /// Arm the first tick, or park the error in the footer
    fn schedule(&mut self, result: GameResult<Duration>) {
        match result {
            Ok(delay) => {
                self.status = None;
                self.next_tick = Some(Instant::now() + delay);
            }
            Err(e) => {
                self.status = Some(format!("Cannot start: {}", e));
                self.next_tick = None;
            }
        }
    }

    fn on_tick(&mut self) {
        let outcome = self.engine.tick(&mut self.board);
        self.stats.record_tick(&outcome, self.engine.state());

        self.next_tick = outcome.next_delay.map(|delay| Instant::now() + delay);
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    if !self.engine.change_direction(direction) {
                        debug!(?direction, "Rejected reversal");
                    }
                }
                KeyAction::Reset => self.reset_game(),
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

async fn wait_for_tick(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
