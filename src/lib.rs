//! Koine Sentence — random simple sentences in Koine Greek.
//!
//! Declines nouns, articles and αὐτος, conjugates present-tense verbs
//! (with ε-contraction), and composes them into sentences with
//! probabilistic optional constituents, using the vocabulary of Duff's
//! *Elements of New Testament Greek*, chapters 3–5.

pub mod core;
pub mod schema;

pub use crate::core::pipeline::{
    generate_sentences, strip_annotations, GeneratorError, SentenceGenerator,
};
