use crate::task::save::{SaveBackend, SaveCompletion, SaveRequest};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

pub struct SaveExecutor {
    backend: Arc<dyn SaveBackend>,
    completion_tx: Sender<SaveCompletion>,
    completion_rx: Receiver<SaveCompletion>,
}

impl SaveExecutor {
    pub fn new(backend: impl SaveBackend) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<dyn SaveBackend>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SaveCompletion>();
        Self {
            backend,
            completion_tx,
            completion_rx,
        }
    }

    /// Runs the save on a detached worker. There is no cancellation: if the
    /// executor is gone when the save finishes, the completion is dropped.
    pub fn spawn(&self, request: SaveRequest) {
        let backend = Arc::clone(&self.backend);
        let completion_tx = self.completion_tx.clone();
        tracing::debug!(ticket = request.ticket, "spawning save worker");
        std::thread::spawn(move || {
            let outcome = backend.save(&request.values);
            let completion = SaveCompletion {
                ticket: request.ticket,
                outcome,
            };
            if completion_tx.send(completion).is_err() {
                tracing::debug!(ticket = request.ticket, "save settled after form was dropped");
            }
        });
    }

    pub fn drain_ready(&self) -> Vec<SaveCompletion> {
        let mut out = Vec::<SaveCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Blocks until the next completion or until `timeout` passes.
    pub fn wait_next(&self, timeout: Duration) -> Option<SaveCompletion> {
        match self.completion_rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SaveExecutor;
    use crate::core::{FieldId, FieldValues};
    use crate::task::save::{FakeSave, SaveRequest};
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn delivers_completion_with_matching_ticket() {
        let executor = SaveExecutor::new(FakeSave::new().with_delay(Duration::ZERO));
        let values = FieldValues::new().with(FieldId::Name, "Al");
        executor.spawn(SaveRequest {
            ticket: 7,
            values: values.clone(),
        });

        let completion = executor.wait_next(WAIT).expect("completion");
        assert_eq!(completion.ticket, 7);
        assert_eq!(completion.outcome.expect("ok").data, values);
    }

    #[test]
    fn drain_is_empty_before_anything_runs() {
        let executor = SaveExecutor::new(FakeSave::new());
        assert!(executor.drain_ready().is_empty());
    }

    #[test]
    fn dropping_executor_mid_save_does_not_panic() {
        let executor = SaveExecutor::new(FakeSave::new().with_delay(Duration::from_millis(20)));
        executor.spawn(SaveRequest {
            ticket: 1,
            values: FieldValues::new(),
        });
        drop(executor);
        std::thread::sleep(Duration::from_millis(60));
    }
}
