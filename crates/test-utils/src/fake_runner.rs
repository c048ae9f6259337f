use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use globwatch::errors::{GlobwatchError, Result};
use globwatch::exec::CommandRunner;

/// A fake command runner that:
/// - records every command it was asked to run
/// - optionally fails, to exercise the runtime's error path.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    executed: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Commands run so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);
        let fail = self.fail;

        Box::pin(async move {
            executed.lock().unwrap().push(command.to_string());
            if fail {
                return Err(GlobwatchError::Other(anyhow::anyhow!("fake failure")));
            }
            Ok(())
        })
    }
}
