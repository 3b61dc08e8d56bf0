use crate::database::question::Question;

/// Per-chat dialogue state. `InMemStorage` keys dialogues by chat id, so a
/// chat is either idle or waiting on exactly one question.
#[derive(Debug, Clone, Default)]
pub enum QuizState {
    #[default]
    Idle,
    AwaitingAnswer {
        question: Question,
    },
}
