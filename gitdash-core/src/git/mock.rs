use super::runner::{CommandOutput, CommandRunner, Program};
use std::{collections::HashMap, sync::Mutex};

/// Scripted runner for tests. Responses are keyed by the full invocation,
/// e.g. `"git add ."`; anything unscripted succeeds with empty output.
#[derive(Default)]
pub struct MockCommandRunner {
    pub responses: Mutex<HashMap<String, CommandOutput>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockCommandRunner {
    pub fn with_response(self, invocation: &str, output: &str, success: bool) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(invocation.to_string(), CommandOutput::new(output, success));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, invocation: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == invocation)
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: Program, args: &[&str]) -> CommandOutput {
        let invocation = if args.is_empty() {
            program.to_string()
        } else {
            format!("{program} {}", args.join(" "))
        };
        self.calls.lock().unwrap().push(invocation.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&invocation)
            .cloned()
            .unwrap_or_else(|| CommandOutput::new("", true))
    }
}
