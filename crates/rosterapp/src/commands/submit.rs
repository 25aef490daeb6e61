use crate::backend::UserBackend;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::screens::{ListScreen, Submission};

/// Submits the list screen's open form.
///
/// Validation failures send nothing. Otherwise exactly one create or update request is
/// issued and the list is reconciled with the server's answer.
pub fn run<B: UserBackend>(backend: &B, screen: &mut ListScreen) -> Result<CmdResult> {
    let Some(submission) = screen.begin_submit()? else {
        let message = screen
            .modal()
            .and_then(|m| m.error())
            .unwrap_or_default()
            .to_string();
        return Ok(CmdResult::default().with_message(CmdMessage::error(message)));
    };

    let (outcome, verb) = match &submission {
        Submission::Create(new_user) => (backend.create_user(new_user), "created"),
        Submission::Update(user) => (backend.update_user(user), "updated"),
    };

    let saved = outcome.as_ref().ok().cloned();
    screen.finish_submit(outcome);

    let result = match saved {
        Some(user) => CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "User {} ({}): {}",
                verb, user.id, user.name
            )))
            .with_users(vec![user]),
        None => {
            let message = screen
                .modal()
                .and_then(|m| m.error())
                .unwrap_or_default()
                .to_string();
            CmdResult::default().with_message(CmdMessage::error(message))
        }
    };
    Ok(result)
}
