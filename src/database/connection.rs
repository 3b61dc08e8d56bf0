use std::path::Path;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow},
    Row,
};

use crate::{database::question::Question, errors::StorageError};

const CREATE_QUESTIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_text TEXT NOT NULL,
    options TEXT NOT NULL,
    correct_index INTEGER NOT NULL,
    category TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

pub struct Connection {
    pool: SqlitePool,
}

impl Connection {
    /// Opens the SQLite file, creating it if missing. The pool lives for
    /// the whole process.
    pub async fn connect(path: &Path) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePool::connect_with(options).await?;

        log::info!("connected to sqlite store at {}", path.display());
        Ok(Self { pool })
    }

    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_QUESTIONS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Inserts `defaults` only when the table is empty, in one transaction
    /// so a partial seed never survives. Returns how many rows went in.
    pub async fn seed_if_empty(&self, defaults: &[Question]) -> Result<usize, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            log::info!("question table already holds {count} questions");
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for question in defaults {
            let options =
                serde_json::to_string(question.options()).map_err(StorageError::EncodeOptions)?;
            sqlx::query(
                "INSERT INTO questions (question_text, options, correct_index, category) \
                 VALUES (?, ?, ?, ?)",
            )
            .bind(question.text())
            .bind(options)
            .bind(question.correct_index() as i64)
            .bind(question.category())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        log::info!("seeded {} default questions", defaults.len());
        Ok(defaults.len())
    }
}

pub(crate) trait FetchRandomQuestion {
    async fn fetch_random_question(&self) -> Result<Option<Question>, StorageError>;
}

pub(crate) trait InsertQuestion {
    async fn insert_question(&self, question: &Question) -> Result<i64, StorageError>;
}

impl FetchRandomQuestion for Connection {
    async fn fetch_random_question(&self) -> Result<Option<Question>, StorageError> {
        let row = sqlx::query(
            "SELECT id, question_text, options, correct_index, category \
             FROM questions ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(question_from_row(&row)?)),
            None => Ok(None),
        }
    }
}

impl InsertQuestion for Connection {
    async fn insert_question(&self, question: &Question) -> Result<i64, StorageError> {
        let options =
            serde_json::to_string(question.options()).map_err(StorageError::EncodeOptions)?;
        let result = sqlx::query(
            "INSERT INTO questions (question_text, options, correct_index, category) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(question.text())
        .bind(options)
        .bind(question.correct_index() as i64)
        .bind(question.category())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}

fn question_from_row(row: &SqliteRow) -> Result<Question, StorageError> {
    let id: i64 = row.try_get("id")?;
    let text: String = row.try_get("question_text")?;
    let options_json: String = row.try_get("options")?;
    let correct_index: i64 = row.try_get("correct_index")?;
    let category: Option<String> = row.try_get("category")?;

    let options: [String; 4] = serde_json::from_str(&options_json)
        .map_err(|source| StorageError::MalformedOptions { id, source })?;
    if !(0..4).contains(&correct_index) {
        return Err(StorageError::CorrectIndexOutOfRange {
            id,
            index: correct_index,
        });
    }

    Ok(Question::stored(
        id,
        text,
        options,
        correct_index as usize,
        category.unwrap_or_default(),
    ))
}
