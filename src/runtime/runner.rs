use crate::runtime::effect::Effect;
use crate::runtime::event::AppEvent;
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::app::AppState;
use crate::task::SaveExecutor;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(80);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    executor: SaveExecutor,
    key_bindings: KeyBindings,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal, executor: SaveExecutor) -> Self {
        Self {
            state,
            terminal,
            executor,
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
        }
    }

    /// Runs until the user exits and hands back the final form state.
    pub fn run(mut self) -> io::Result<AppState> {
        self.terminal.enter()?;
        tracing::info!("form opened");

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                for completion in self.executor.drain_ready() {
                    self.dispatch_app_event(AppEvent::SaveCompleted(completion))?;
                }

                let event = self.terminal.poll_event(POLL_TIMEOUT)?;
                self.dispatch_app_event(AppEvent::Terminal(event))?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        tracing::info!(saving = self.state.controller().submission().is_saving(), "form closed");
        run_result.and(exit_result).map(|()| self.state)
    }

    fn dispatch_app_event(&mut self, event: AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Terminal(TerminalEvent::Resize(size)) => {
                self.terminal.set_size(size);
                self.render()
            }
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                let intent = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Intent::InputKey(key));
                self.process_intent(intent)
            }
            AppEvent::Terminal(TerminalEvent::Tick) => self.process_intent(Intent::Tick),
            AppEvent::SaveCompleted(completion) => {
                let effects = Reducer::settle(&mut self.state, completion);
                self.apply_effects(effects)
            }
        }
    }

    fn process_intent(&mut self, intent: Intent) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::StartSave(request) => self.executor.spawn(request),
                Effect::RequestRender => render_requested = true,
            }
        }

        if render_requested {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.state, self.terminal.size());
        self.terminal.render_frame(&frame)
    }
}
