use std::sync::Arc;

use teloxide::{
    payloads::SendMessageSetters,
    prelude::Requester,
    types::{Message, ParseMode},
    Bot,
};
use tracing::instrument;

use crate::{
    database::{connection::FetchRandomQuestion, question::Question},
    state::QuizState,
    HandlerResult, UserDialogue,
};

#[instrument(level = "info", skip_all, fields(chat = %msg.chat.id))]
pub(crate) async fn send_question<Q: FetchRandomQuestion>(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    connection: Arc<Q>,
) -> HandlerResult {
    match connection.fetch_random_question().await {
        Ok(Some(question)) => {
            log::info!("[{}] asking question #{}", msg.chat.id, question.id());
            // Pending state first: a failed send leaves the question
            // pending, as the next message from the chat expects.
            dialogue
                .update(QuizState::AwaitingAnswer {
                    question: question.clone(),
                })
                .await?;
            bot.send_message(msg.chat.id, question.to_string())
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Ok(None) => {
            log::warn!("[{}] /quiz requested but the question table is empty", msg.chat.id);
            bot.send_message(msg.chat.id, "No questions are available yet.")
                .await?;
        }
        Err(e) => {
            log::error!("[{}] failed to fetch a question: {e}", msg.chat.id);
            bot.send_message(
                msg.chat.id,
                "Failed to fetch a question. Please try again later.",
            )
            .await?;
        }
    }

    Ok(())
}

#[instrument(level = "info", skip_all, fields(chat = %msg.chat.id))]
pub(crate) async fn grade_answer(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    text: String,
    question: Question,
) -> HandlerResult {
    // The pending entry is consumed by this message no matter what the
    // reply turns out to be.
    dialogue.exit().await?;

    let reply = match resolve_choice(&text, question.options()) {
        Some(choice) => {
            log::info!(
                "[{}] answered {} to question #{}",
                msg.chat.id,
                choice + 1,
                question.id()
            );
            grade_reply(choice, &question)
        }
        None => {
            log::info!(
                "[{}] unparseable answer to question #{}",
                msg.chat.id,
                question.id()
            );
            "Please send a number from 1 to 4.\n\nTry again: /quiz".to_owned()
        }
    };

    bot.send_message(msg.chat.id, reply)
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

/// Resolves a raw reply to a 0-based option index. A number 1–4 wins
/// outright; anything else falls back to a case-insensitive, trimmed match
/// against the option texts, so "80" picks the option literally named "80"
/// even though it parses as an out-of-range number.
pub(crate) fn resolve_choice(reply: &str, options: &[String; 4]) -> Option<usize> {
    let reply = reply.trim();

    if let Ok(number) = reply.parse::<i64>() {
        if (1..=4).contains(&number) {
            return Some(number as usize - 1);
        }
    }

    let reply = reply.to_lowercase();
    options
        .iter()
        .position(|option| option.trim().to_lowercase() == reply)
}

fn grade_reply(choice: usize, question: &Question) -> String {
    let correct = question.correct_index();
    let options = question.options();

    let mut reply = if choice == correct {
        format!(
            "✅ *Correct!*\n\nAnswer: {}. {}",
            correct + 1,
            options[correct]
        )
    } else {
        format!(
            "❌ *Wrong.*\n\nYour answer: {}. {}\n\nCorrect answer: {}. {}\n\nTry again.",
            choice + 1,
            options[choice],
            correct + 1,
            options[correct]
        )
    };
    reply.push_str("\n\nWant another question? Send /quiz");
    reply
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn http_port_question() -> Question {
        Question::stored(
            1,
            "Which port does HTTP use?".to_owned(),
            ["80", "443", "21", "25"].map(String::from),
            0,
            "Protocols".to_owned(),
        )
    }

    #[test]
    fn numeric_replies_map_to_zero_based_indices() {
        let question = http_port_question();
        for (reply, index) in [("1", 0), ("2", 1), ("3", 2), ("4", 3)] {
            assert_eq!(resolve_choice(reply, question.options()), Some(index));
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let question = http_port_question();
        assert_eq!(resolve_choice("  2  ", question.options()), Some(1));
        assert_eq!(resolve_choice("\t4\n", question.options()), Some(3));
    }

    #[test]
    fn option_text_matches_any_case_and_padding() {
        let options = ["TCP", "UDP", "HTTP", "ICMP"].map(String::from);
        assert_eq!(resolve_choice("udp", &options), Some(1));
        assert_eq!(resolve_choice("  icmp  ", &options), Some(3));
        assert_eq!(resolve_choice("Http", &options), Some(2));
    }

    #[test]
    fn out_of_range_numbers_fall_back_to_option_text() {
        let question = http_port_question();
        assert_eq!(resolve_choice("80", question.options()), Some(0));
        assert_eq!(resolve_choice("443", question.options()), Some(1));
    }

    #[test]
    fn unresolvable_replies_are_rejected() {
        let question = http_port_question();
        for reply in ["eighty", "0", "5", "-1", "", "   ", "1.5"] {
            assert_eq!(resolve_choice(reply, question.options()), None);
        }
    }

    #[test]
    fn first_matching_option_wins() {
        let options = ["yes", "no", "YES", "maybe"].map(String::from);
        assert_eq!(resolve_choice("Yes", &options), Some(0));
    }

    #[test]
    fn correct_reply_names_the_correct_option() {
        let question = http_port_question();
        let reply = grade_reply(0, &question);
        assert!(reply.contains("Correct"));
        assert!(reply.contains("1. 80"));
        assert!(reply.contains("Want another question? Send /quiz"));
    }

    #[test]
    fn incorrect_reply_names_both_options() {
        let question = http_port_question();
        let reply = grade_reply(1, &question);
        assert!(reply.contains("Wrong"));
        assert!(reply.contains("Your answer: 2. 443"));
        assert!(reply.contains("Correct answer: 1. 80"));
        assert!(reply.contains("Want another question? Send /quiz"));
    }
}
