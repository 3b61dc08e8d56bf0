//! Telegram quiz bot: polls for messages, keeps at most one pending
//! question per chat and grades replies against a SQLite-backed store.

use state::QuizState;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::Dialogue};

pub mod commands;
pub mod config;
pub mod database;
pub mod errors;
pub mod quiz;
pub mod schema;
pub mod state;

pub type UserDialogue = Dialogue<QuizState, InMemStorage<QuizState>>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;
