use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::app::AppState;
use crate::task::SaveCompletion;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![]
            }
            Intent::Submit => match state.submit() {
                Some(request) => vec![Effect::StartSave(request), Effect::RequestRender],
                None => vec![Effect::RequestRender],
            },
            Intent::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Intent::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Intent::InputKey(key) => render_if(state.dispatch_key_to_focused(key)),
            Intent::Tick => render_if(state.tick()),
        }
    }

    pub fn settle(state: &mut AppState, completion: SaveCompletion) -> Vec<Effect> {
        render_if(state.settle(completion))
    }
}

fn render_if(changed: bool) -> Vec<Effect> {
    if changed {
        vec![Effect::RequestRender]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::Reducer;
    use crate::core::FieldValues;
    use crate::runtime::effect::Effect;
    use crate::runtime::intent::Intent;
    use crate::state::app::AppState;
    use crate::state::controller::FormController;
    use crate::state::submission::SubmissionState;
    use crate::task::{SaveCompletion, SaveReceipt};
    use crate::terminal::{KeyCode, KeyEvent};

    fn valid_state() -> AppState {
        AppState::new(FormController::prefilled(&FieldValues {
            name: "Al".to_string(),
            password: "abc123".to_string(),
            email: "a@b.com".to_string(),
            phone: "1234567890".to_string(),
        }))
    }

    #[test]
    fn submit_emits_start_save() {
        let mut state = valid_state();
        let effects = Reducer::reduce(&mut state, Intent::Submit);
        assert!(matches!(effects.first(), Some(Effect::StartSave(_))));
        assert!(state.controller().submission().is_saving());
    }

    #[test]
    fn settle_renders_once_and_ignores_replays() {
        let mut state = valid_state();
        let effects = Reducer::reduce(&mut state, Intent::Submit);
        let Some(Effect::StartSave(request)) = effects.into_iter().next() else {
            panic!("expected StartSave");
        };
        let completion = SaveCompletion {
            ticket: request.ticket,
            outcome: Ok(SaveReceipt::ok(request.values)),
        };

        assert_eq!(
            Reducer::settle(&mut state, completion.clone()),
            vec![Effect::RequestRender]
        );
        assert_eq!(
            state.controller().submission(),
            &SubmissionState::Succeeded("Saved successfully!".to_string())
        );
        assert!(Reducer::settle(&mut state, completion).is_empty());
    }

    #[test]
    fn tick_only_renders_while_saving() {
        let mut state = valid_state();
        assert!(Reducer::reduce(&mut state, Intent::Tick).is_empty());
        Reducer::reduce(&mut state, Intent::Submit);
        assert_eq!(
            Reducer::reduce(&mut state, Intent::Tick),
            vec![Effect::RequestRender]
        );
    }

    #[test]
    fn unhandled_key_requests_nothing() {
        let mut state = valid_state();
        let effects = Reducer::reduce(&mut state, Intent::InputKey(KeyEvent::plain(KeyCode::Up)));
        assert!(effects.is_empty());
    }

    #[test]
    fn exit_sets_flag() {
        let mut state = valid_state();
        Reducer::reduce(&mut state, Intent::Exit);
        assert!(state.should_exit());
    }
}
