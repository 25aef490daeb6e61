use crate::backend::UserBackend;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::screens::DetailScreen;

/// Points the detail screen at `id`, fetching when the screen asks for it.
pub fn run<B: UserBackend>(
    backend: &B,
    screen: &mut DetailScreen,
    id: UserId,
) -> Result<CmdResult> {
    if screen.set_target(id.clone()) {
        screen.finish_load(&id, backend.get_user(&id));
    }

    let result = match (screen.user(), screen.state().error()) {
        (Some(user), _) => CmdResult::default().with_users(vec![user.clone()]),
        (None, Some(message)) => CmdResult::default().with_message(CmdMessage::error(message)),
        (None, None) => CmdResult::default(),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::{BackendCall, MemBackend};
    use crate::screens::messages;

    #[test]
    fn fetches_once_per_identifier() {
        let backend = MemBackend::seeded(3);
        let mut screen = DetailScreen::new();

        run(&backend, &mut screen, UserId::new("2")).unwrap();
        run(&backend, &mut screen, UserId::new("2")).unwrap();
        assert_eq!(backend.call_count(), 1);

        let result = run(&backend, &mut screen, UserId::new("3")).unwrap();
        assert_eq!(result.users[0].name, "User 3");
        assert_eq!(
            backend.calls(),
            vec![
                BackendCall::Get(UserId::new("2")),
                BackendCall::Get(UserId::new("3"))
            ]
        );
    }

    #[test]
    fn failed_load_is_retried() {
        let backend = MemBackend::seeded(3);
        backend.set_fail_requests(true);
        let mut screen = DetailScreen::new();
        let result = run(&backend, &mut screen, UserId::new("1")).unwrap();
        assert!(result.has_errors());

        backend.set_fail_requests(false);
        let result = run(&backend, &mut screen, UserId::new("1")).unwrap();
        assert!(!result.has_errors());
        assert_eq!(result.users[0].name, "User 1");
        assert_eq!(backend.call_count(), 2);
    }

    #[test]
    fn unknown_id_renders_not_found() {
        let backend = MemBackend::seeded(3);
        let mut screen = DetailScreen::new();

        let result = run(&backend, &mut screen, UserId::new("99")).unwrap();
        assert_eq!(
            result.messages,
            vec![CmdMessage::error(messages::USER_NOT_FOUND)]
        );
        assert_eq!(screen.state().error(), Some(messages::USER_NOT_FOUND));
    }

    #[test]
    fn transport_failure_renders_load_error() {
        let backend = MemBackend::seeded(3);
        backend.set_fail_requests(true);
        let mut screen = DetailScreen::new();

        run(&backend, &mut screen, UserId::new("1")).unwrap();
        assert_eq!(screen.state().error(), Some(messages::USER_LOAD_FAILED));
    }
}
