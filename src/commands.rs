use teloxide::{
    prelude::Requester,
    types::{Me, Message},
    utils::command::BotCommands,
    Bot,
};

use crate::HandlerResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, BotCommands)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "greet and explain usage.")]
    Start,
    #[command(description = "ask a random question.")]
    Quiz,
    #[command(description = "display this help.")]
    Help,
}

/// Maps a text message to a command, or `None` when the message should be
/// ignored. In private chats every command counts; in group chats only
/// commands explicitly mentioning this bot (`/quiz@handle`) do.
///
/// `teloxide::filter_command` is not used here: it accepts unmentioned
/// commands in groups and rejects foreign mentions in private chats, and
/// this bot wants neither.
pub(crate) fn addressed_command(text: String, msg: Message, me: Me) -> Option<Command> {
    if !is_addressed_to(&text, msg.chat.is_private(), me.username()) {
        return None;
    }
    parse_command(&text)
}

fn is_addressed_to(text: &str, is_private: bool, handle: &str) -> bool {
    if is_private {
        return true;
    }

    let Some(first) = text.split_whitespace().next() else {
        return false;
    };
    if !first.starts_with('/') {
        return false;
    }

    match first.split_once('@') {
        Some((_, mention)) => mention.eq_ignore_ascii_case(handle),
        None => false,
    }
}

/// Command name: text after `/` up to the first whitespace, any `@handle`
/// suffix stripped, lowercased. Unknown names are silently dropped.
fn parse_command(text: &str) -> Option<Command> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name).to_lowercase();

    match name.as_str() {
        "start" => Some(Command::Start),
        "quiz" => Some(Command::Quiz),
        "help" => Some(Command::Help),
        _ => None,
    }
}

pub(crate) async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, "Send /quiz to start the quiz")
        .await?;
    Ok(())
}

pub(crate) async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}
