//! Trivia question model and Open Trivia DB wire parsing
//!
//! The network fetch itself lives in the shell (it differs per platform);
//! this module owns the contract the sim consumes: a prompt, a shuffled
//! answer set containing the correct answer exactly once, and string
//! equality as the correctness check. Fetch failures are non-fatal: the
//! shell leaves the quiz view blank and retries, session state untouched.

use std::fmt;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Deserialize;

use crate::settings::QuizCategory;

/// A multiple-choice trivia question ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    /// Shuffled answers; contains `correct_answer` exactly once
    pub choices: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    /// The resolver contract: plain string equality against the right answer
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}

/// Supplies questions to the shell while a quiz is pending
pub trait QuizSource {
    fn fetch(&mut self, category: Option<QuizCategory>) -> Result<Question, QuizError>;
}

/// Quiz payload errors
#[derive(Debug)]
pub enum QuizError {
    /// The API answered but carried no questions
    EmptyResults,
    Malformed(serde_json::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::EmptyResults => write!(f, "trivia response contained no questions"),
            QuizError::Malformed(err) => write!(f, "malformed trivia response: {err}"),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::EmptyResults => None,
            QuizError::Malformed(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Malformed(err)
    }
}

/// Open Trivia DB response envelope (<https://opentdb.com/api.php>)
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Parse one question out of an Open Trivia DB JSON payload.
///
/// Decodes the HTML entities the API ships and shuffles the merged answer
/// list with the game's seeded RNG so presentation order is deterministic
/// per run.
pub fn parse_opentdb_response(json: &str, rng: &mut Pcg32) -> Result<Question, QuizError> {
    let response: ApiResponse = serde_json::from_str(json)?;
    let api = response.results.into_iter().next().ok_or(QuizError::EmptyResults)?;

    let correct_answer = decode_html_entities(&api.correct_answer);
    let mut choices: Vec<String> = api
        .incorrect_answers
        .iter()
        .map(|a| decode_html_entities(a))
        .collect();
    choices.push(correct_answer.clone());
    shuffle(&mut choices, rng);

    Ok(Question {
        prompt: decode_html_entities(&api.question),
        choices,
        correct_answer,
    })
}

/// Decode the entity set Open Trivia DB actually emits
pub fn decode_html_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#039;", "'")
        .replace("&rsquo;", "'")
        .replace("&lsquo;", "'")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
}

/// Fisher-Yates with the seeded sim RNG
fn shuffle(choices: &mut [String], rng: &mut Pcg32) {
    for i in (1..choices.len()).rev() {
        let j = rng.random_range(0..=i);
        choices.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const PAYLOAD: &str = r#"{
        "response_code": 0,
        "results": [{
            "type": "multiple",
            "difficulty": "easy",
            "category": "Science &amp; Nature",
            "question": "What is the chemical symbol for &quot;gold&quot;?",
            "correct_answer": "Au",
            "incorrect_answers": ["Ag", "Fe", "Pb"]
        }]
    }"#;

    #[test]
    fn parses_and_decodes_payload() {
        let mut rng = Pcg32::seed_from_u64(1);
        let question = parse_opentdb_response(PAYLOAD, &mut rng).unwrap();

        assert_eq!(question.prompt, "What is the chemical symbol for \"gold\"?");
        assert_eq!(question.correct_answer, "Au");
        assert_eq!(question.choices.len(), 4);
        assert_eq!(
            question.choices.iter().filter(|c| *c == "Au").count(),
            1,
            "correct answer appears exactly once"
        );
        assert!(question.is_correct("Au"));
        assert!(!question.is_correct("Fe"));
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut a = Pcg32::seed_from_u64(3);
        let mut b = Pcg32::seed_from_u64(3);
        let qa = parse_opentdb_response(PAYLOAD, &mut a).unwrap();
        let qb = parse_opentdb_response(PAYLOAD, &mut b).unwrap();
        assert_eq!(qa.choices, qb.choices);
    }

    #[test]
    fn empty_results_is_recoverable() {
        let mut rng = Pcg32::seed_from_u64(1);
        let err = parse_opentdb_response(r#"{"response_code":1,"results":[]}"#, &mut rng);
        assert!(matches!(err, Err(QuizError::EmptyResults)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let mut rng = Pcg32::seed_from_u64(1);
        let err = parse_opentdb_response("not json", &mut rng);
        assert!(matches!(err, Err(QuizError::Malformed(_))));
    }

    #[test]
    fn decodes_quote_entities() {
        assert_eq!(
            decode_html_entities("&ldquo;It&rsquo;s&rdquo; &lt;fine&gt; &amp; good"),
            "\"It's\" <fine> & good"
        );
    }
}
