use std::fmt;

/// One quiz question. Rows are immutable once created; `new` builds a
/// not-yet-stored question, `stored` rebuilds one fetched from the table.
#[derive(Debug, Clone)]
pub struct Question {
    id: i64,
    text: String,
    options: [String; 4],
    correct_index: usize,
    category: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: [String; 4],
        correct_index: usize,
        category: impl Into<String>,
    ) -> Self {
        debug_assert!(correct_index < 4);
        Self {
            id: 0,
            text: text.into(),
            options,
            correct_index,
            category: category.into(),
        }
    }

    pub fn stored(
        id: i64,
        text: String,
        options: [String; 4],
        correct_index: usize,
        category: String,
    ) -> Self {
        Self {
            id,
            text,
            options,
            correct_index,
            category,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📚 Category: {}", self.category)?;
        writeln!(f)?;
        writeln!(f, "❓ Question:")?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)?;
        for (i, option) in self.options.iter().enumerate() {
            writeln!(f, "{}) {}", i + 1, option)?;
        }
        writeln!(f)?;
        write!(f, "*Send the answer number (1, 2, 3 or 4):*")
    }
}

/// The out-of-the-box question set inserted on first run.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is an IP address?",
            [
                "A unique identifier of a device on a network",
                "A data transfer protocol",
                "A type of cable",
                "A network application",
            ]
            .map(String::from),
            0,
            "Basics",
        ),
        Question::new(
            "Which port does HTTP use?",
            ["80", "443", "21", "25"].map(String::from),
            0,
            "Protocols",
        ),
        Question::new(
            "What is DNS?",
            [
                "The domain name system",
                "A network protocol",
                "A type of server",
                "A programming language",
            ]
            .map(String::from),
            0,
            "Protocols",
        ),
        Question::new(
            "Which protocol establishes a connection?",
            ["TCP", "UDP", "HTTP", "ICMP"].map(String::from),
            0,
            "Protocols",
        ),
        Question::new(
            "What is a MAC address?",
            [
                "The physical address of a network card",
                "The IP address of a router",
                "A domain name",
                "A Wi-Fi password",
            ]
            .map(String::from),
            0,
            "Hardware",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_numbers_options_and_prompts_for_an_answer() {
        let question = Question::new(
            "Which port does HTTP use?",
            ["80", "443", "21", "25"].map(String::from),
            0,
            "Protocols",
        );

        let rendered = question.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "📚 Category: Protocols");
        assert_eq!(lines[2], "❓ Question:");
        assert_eq!(lines[3], "Which port does HTTP use?");
        assert_eq!(lines[5], "1) 80");
        assert_eq!(lines[6], "2) 443");
        assert_eq!(lines[7], "3) 21");
        assert_eq!(lines[8], "4) 25");
        assert_eq!(lines[10], "*Send the answer number (1, 2, 3 or 4):*");
    }

    #[test]
    fn default_set_is_well_formed() {
        let defaults = default_questions();
        assert_eq!(defaults.len(), 5);
        for question in &defaults {
            assert!(question.correct_index() < 4);
            assert!(!question.text().is_empty());
        }
    }
}
