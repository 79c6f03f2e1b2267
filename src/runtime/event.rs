use crate::task::SaveCompletion;
use crate::terminal::TerminalEvent;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    SaveCompleted(SaveCompletion),
}
