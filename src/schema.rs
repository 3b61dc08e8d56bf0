use teloxide::{
    dispatching::{
        dialogue::{self, InMemStorage},
        UpdateFilterExt, UpdateHandler,
    },
    dptree,
    types::{Message, Update},
};

use crate::{
    commands::{self, Command},
    database::connection::Connection,
    quiz,
    state::QuizState,
};

/// Builds the update-dispatch tree. Only text messages enter; a chat with
/// a pending question has its next text consumed as an answer before any
/// command interpretation, and everything unmatched falls through to the
/// dispatcher's silent default handler.
pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = dptree::filter_map(commands::addressed_command)
        .branch(case![Command::Start].endpoint(commands::start))
        .branch(case![Command::Quiz].endpoint(quiz::send_question::<Connection>))
        .branch(case![Command::Help].endpoint(commands::help));

    let message_handler = Update::filter_message()
        .filter_map(|msg: Message| msg.text().map(ToOwned::to_owned))
        .branch(case![QuizState::AwaitingAnswer { question }].endpoint(quiz::grade_answer))
        .branch(command_handler);

    dialogue::enter::<Update, InMemStorage<QuizState>, QuizState, _>().branch(message_handler)
}
