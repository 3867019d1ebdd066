//! Deck, Card and MultipleChoice models
//!
//! These entities are part of the schema but have no reachable read/write
//! path in the operation surface; they exist in the catalog for
//! completeness only.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    error::AppResult,
    validate::{Rule, Violations},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Deck {
    pub fn url(&self) -> String {
        format!("/catalog/deck/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub deck_id: i64,
}

impl Card {
    pub fn url(&self) -> String {
        format!("/catalog/card/{}", self.id)
    }
}

/// Multiple-choice question. `options` is stored as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoice {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub image_url: Option<String>,
    pub deck_id: i64,
}

impl MultipleChoice {
    pub fn url(&self) -> String {
        format!("/catalog/multiple-choice/{}", self.id)
    }
}

/// Field set for a deck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckFields {
    pub name: String,
    pub description: Option<String>,
}

impl DeckFields {
    pub fn validate(&self) -> AppResult<()> {
        let mut v = Violations::new();
        v.check("name", Some(&self.name), Rule::Required)
            .check("name", Some(&self.name), Rule::LenBetween(3, 100))
            .check("description", self.description.as_deref(), Rule::MaxLen(500))
            .check("description", self.description.as_deref(), Rule::NotBlank);
        v.into_result()
    }
}

/// Field set for a card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardFields {
    pub question: String,
    pub answer: String,
    pub deck_id: i64,
}

impl CardFields {
    pub fn validate(&self) -> AppResult<()> {
        let mut v = Violations::new();
        v.check("question", Some(&self.question), Rule::Required)
            .check("answer", Some(&self.answer), Rule::Required);
        v.into_result()
    }
}

/// Field set for a multiple-choice question
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultipleChoiceFields {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub image_url: Option<String>,
    pub deck_id: i64,
}

impl MultipleChoiceFields {
    pub fn validate(&self) -> AppResult<()> {
        let mut v = Violations::new();
        v.check("question", Some(&self.question), Rule::Required)
            // an empty option list counts as a missing field
            .check(
                "options",
                self.options.first().map(String::as_str),
                Rule::Required,
            )
            .check("correct_answer", Some(&self.correct_answer), Rule::Required)
            .check("image_url", self.image_url.as_deref(), Rule::NotBlank);
        v.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_name_bounds_match_genre_bounds() {
        assert!(DeckFields {
            name: "Rust".to_string(),
            description: None,
        }
        .validate()
        .is_ok());
        assert!(DeckFields {
            name: "ab".to_string(),
            description: None,
        }
        .validate()
        .is_err());
    }

    #[test]
    fn card_requires_question_and_answer() {
        let err = CardFields::default().validate().unwrap_err();
        match err {
            crate::AppError::Validation(violations) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["question", "answer"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn multiple_choice_requires_at_least_one_option() {
        let mut fields = MultipleChoiceFields {
            question: "Who wrote The Name of the Wind?".to_string(),
            options: vec![],
            correct_answer: "Patrick Rothfuss".to_string(),
            image_url: None,
            deck_id: 1,
        };
        let err = fields.validate().unwrap_err();
        match err {
            crate::AppError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "options");
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        fields.options = vec!["Patrick Rothfuss".to_string(), "Ursula Le Guin".to_string()];
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn blank_description_is_rejected_but_absent_is_fine() {
        let blank = DeckFields {
            name: "Rust".to_string(),
            description: Some("   ".to_string()),
        };
        assert!(blank.validate().is_err());

        let absent = DeckFields {
            name: "Rust".to_string(),
            description: None,
        };
        assert!(absent.validate().is_ok());
    }
}
