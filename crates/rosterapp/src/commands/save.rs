use crate::backend::UserBackend;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::screens::{messages, DetailScreen};

/// Saves the detail screen's form in place.
pub fn run<B: UserBackend>(backend: &B, screen: &mut DetailScreen) -> Result<CmdResult> {
    let Some(payload) = screen.begin_save()? else {
        let message = screen.save_error().unwrap_or_default().to_string();
        return Ok(CmdResult::default().with_message(CmdMessage::error(message)));
    };

    screen.finish_save(&payload.id, backend.update_user(&payload));

    let result = match (screen.saved(), screen.user()) {
        (true, Some(user)) => CmdResult::default()
            .with_message(CmdMessage::success(messages::DETAIL_SAVED))
            .with_users(vec![user.clone()]),
        _ => {
            let message = screen.save_error().unwrap_or_default().to_string();
            CmdResult::default().with_message(CmdMessage::error(message))
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::{BackendCall, MemBackend};
    use crate::commands::view;
    use crate::model::UserId;

    fn loaded(backend: &MemBackend) -> DetailScreen {
        let mut screen = DetailScreen::new();
        view::run(backend, &mut screen, UserId::new("2")).unwrap();
        screen
    }

    #[test]
    fn saves_and_adopts_the_result() {
        let backend = MemBackend::seeded(3);
        let mut screen = loaded(&backend);
        screen.edit(Some("Second".into()), Some("https://new.png".into()));

        let result = run(&backend, &mut screen).unwrap();
        assert_eq!(
            result.messages,
            vec![CmdMessage::success(messages::DETAIL_SAVED)]
        );
        assert!(screen.saved());
        assert_eq!(screen.user().unwrap().name, "Second");
        assert_eq!(backend.users()[1].avatar.as_deref(), Some("https://new.png"));
        assert_eq!(
            backend.calls().last(),
            Some(&BackendCall::Update(UserId::new("2")))
        );
    }

    #[test]
    fn blank_name_sends_nothing() {
        let backend = MemBackend::seeded(3);
        let mut screen = loaded(&backend);
        screen.edit(Some("".into()), None);

        let result = run(&backend, &mut screen).unwrap();
        assert!(result.has_errors());
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn failure_keeps_edits() {
        let backend = MemBackend::seeded(3);
        let mut screen = loaded(&backend);
        screen.edit(Some("Second".into()), None);
        backend.set_fail_requests(true);

        let result = run(&backend, &mut screen).unwrap();
        assert_eq!(
            result.messages,
            vec![CmdMessage::error(messages::DETAIL_SAVE_FAILED)]
        );
        assert_eq!(screen.draft().name, "Second");
        assert_eq!(screen.user().unwrap().name, "User 2");
    }
}
