//! The question bank: categories of multiple-choice questions, loaded from JSON.

use std::{fs, path::Path};

use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;

use crate::{Error, Result};

/// The most choices a question can have, since they're picked with the number keys.
pub const MAX_CHOICES: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    /// Index into `choices`.
    pub answer: usize,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer
    }

    pub fn answer_text(&self) -> &str {
        &self.choices[self.answer]
    }

    fn validate(&self) -> core::result::Result<(), String> {
        if !(2..=MAX_CHOICES).contains(&self.choices.len()) {
            return Err(format!(
                "question {:?} has {} choices, needs 2 to {}",
                self.prompt,
                self.choices.len(),
                MAX_CHOICES
            ));
        }
        if self.answer >= self.choices.len() {
            return Err(format!("question {:?} has answer {} out of range", self.prompt, self.answer));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

/// Every category of questions available.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuestionBank {
    categories: Vec<Category>,
}

impl QuestionBank {
    /// Parse and validate a bank from JSON text. Errors are plain descriptions; see [`Self::load`] for the real thing.
    pub fn from_json(src: &str) -> core::result::Result<Self, String> {
        let bank: Self = serde_json::from_str(src).map_err(|e| e.to_string())?;
        bank.validate()?;
        Ok(bank)
    }

    /// Load and validate a bank from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path).map_err(|source| Error::Asset {
            path: path.to_owned(),
            source,
        })?;
        let bank = Self::from_json(&src).map_err(|reason| Error::Questions {
            path: path.to_owned(),
            reason,
        })?;
        tracing::info!(
            categories = bank.categories.len(),
            questions = bank.categories.iter().map(|c| c.questions.len()).sum::<usize>(),
            "question bank loaded"
        );
        Ok(bank)
    }

    fn validate(&self) -> core::result::Result<(), String> {
        if self.categories.is_empty() {
            return Err("no categories".into());
        }
        for cat in &self.categories {
            if cat.name.trim().is_empty() {
                return Err("a category has no name".into());
            }
            if cat.questions.is_empty() {
                return Err(format!("category {:?} has no questions", cat.name));
            }
            for q in &cat.questions {
                q.validate()?;
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Up to `count` distinct category names, in random order.
    pub fn sample_categories(&self, rng: &mut impl Rng, count: usize) -> Vec<String> {
        self.categories
            .choose_multiple(rng, count)
            .map(|c| c.name.clone())
            .collect()
    }
}

/// A shuffled order to ask one category's questions in, reshuffled whenever it runs out.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    order: Vec<usize>,
}

impl Deck {
    /// The next question index out of `len`, reshuffling first if the deck is empty.
    pub fn draw(&mut self, len: usize, rng: &mut impl Rng) -> usize {
        if self.order.is_empty() {
            self.order = (0..len).collect();
            self.order.shuffle(rng);
        }
        self.order.pop().unwrap_or(0)
    }

    /// Throw away the current order, e.g. on switching category.
    pub fn reset(&mut self) {
        self.order.clear();
    }

    pub fn remaining(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
pub(crate) fn bundled() -> QuestionBank {
    QuestionBank::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("questions.json"))
        .expect("bundled questions should load")
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    const TINY: &str = r#"{"categories": [
        {"name": "Socks", "questions": [
            {"prompt": "Socks come in?", "choices": ["pairs", "trios"], "answer": 0},
            {"prompt": "Lost socks go?", "choices": ["dryer", "moon", "nowhere"], "answer": 0}
        ]}
    ]}"#;

    #[test]
    fn parses_valid_bank() {
        let bank = QuestionBank::from_json(TINY).unwrap();
        assert_eq!(bank.categories().len(), 1);
        let socks = bank.category("Socks").unwrap();
        assert_eq!(socks.questions[1].answer_text(), "dryer");
        assert!(socks.questions[0].is_correct(0));
        assert!(!socks.questions[0].is_correct(1));
        assert!(bank.category("Hats").is_none());
    }

    #[test]
    fn rejects_bad_banks() {
        assert!(QuestionBank::from_json(r#"{"categories": []}"#).is_err());
        assert!(QuestionBank::from_json(r#"{"categories": [{"name": "x", "questions": []}]}"#).is_err());
        assert!(QuestionBank::from_json(
            r#"{"categories": [{"name": "x", "questions": [{"prompt": "?", "choices": ["a"], "answer": 0}]}]}"#
        )
        .is_err());
        let err = QuestionBank::from_json(
            r#"{"categories": [{"name": "x", "questions": [{"prompt": "?", "choices": ["a", "b"], "answer": 2}]}]}"#,
        )
        .unwrap_err();
        assert!(err.contains("out of range"), "{}", err);
        let err = QuestionBank::from_json(
            r#"{"categories": [{"name": "x", "questions": [
                {"prompt": "?", "choices": ["a", "b", "c", "d", "e"], "answer": 0}
            ]}]}"#,
        )
        .unwrap_err();
        assert!(err.contains("5 choices"), "{}", err);
        let err = QuestionBank::from_json(
            r#"{"categories": [{"name": "  ", "questions": [{"prompt": "?", "choices": ["a", "b"], "answer": 0}]}]}"#,
        )
        .unwrap_err();
        assert_eq!(err, "a category has no name");
        assert!(QuestionBank::from_json("not json").is_err());
    }

    #[test]
    fn load_rejects_invalid_file() {
        let path = std::env::temp_dir().join(format!("trivia-roguelite-bad-bank-{}.json", std::process::id()));
        fs::write(&path, r#"{"categories": []}"#).unwrap();
        let res = QuestionBank::load(&path);
        fs::remove_file(&path).unwrap();
        match res {
            Err(Error::Questions { path: p, reason }) => {
                assert_eq!(p, path);
                assert_eq!(reason, "no categories");
            }
            other => panic!("expected questions error, got {:?}", other),
        }
    }

    #[test]
    fn load_reports_path() {
        let path = Path::new("/no/such/questions.json");
        match QuestionBank::load(path) {
            Err(Error::Asset { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected asset error, got {:?}", other),
        }
    }

    #[test]
    fn deck_covers_everything_before_repeating() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Deck::default();
        let first: HashSet<_> = (0..5).map(|_| deck.draw(5, &mut rng)).collect();
        assert_eq!(first.len(), 5);
        assert_eq!(deck.remaining(), 0);
        deck.draw(5, &mut rng);
        assert_eq!(deck.remaining(), 4);
        deck.reset();
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn samples_distinct_categories() {
        let bank = bundled();
        let mut rng = SmallRng::seed_from_u64(1);
        let picked = bank.sample_categories(&mut rng, 3);
        assert_eq!(picked.len(), 3.min(bank.categories().len()));
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len());
    }
}
