use gitdash_core::{dispatch::Task, event::AppEvent, git::CommandRunner};
use std::{sync::Arc, thread};

use super::EventSender;

/// Run `task` on a detached worker. The worker always reports back exactly once.
pub(super) fn spawn_task(runner: &Arc<dyn CommandRunner>, sender: &EventSender, task: Task) {
    let runner = Arc::clone(runner);
    let sender = sender.clone();
    thread::spawn(move || {
        let result = task.execute(runner.as_ref());
        log::debug!("task {} finished (ok: {})", task.name(), result.is_ok());
        sender.send(AppEvent::CommandFinished(result));
    });
}
