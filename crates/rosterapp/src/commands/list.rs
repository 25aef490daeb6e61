use crate::backend::UserBackend;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::screens::{messages, ListScreen};

/// Issues the single "list all" request and settles the screen.
pub fn run<B: UserBackend>(backend: &B, screen: &mut ListScreen) -> Result<CmdResult> {
    screen.begin_load();
    screen.finish_load(backend.list_users());

    if let Some(message) = screen.state().error() {
        return Ok(CmdResult::default().with_message(CmdMessage::error(message)));
    }

    let mut result = CmdResult::default().with_users(screen.users().to_vec());
    if result.users.is_empty() {
        result.add_message(CmdMessage::info(messages::NO_USERS));
    }
    Ok(result)
}
