/// Sentence composition — verb and subject agreement, optional objects,
/// prepositional phrase, word order and punctuation.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::core::phrase::{pick, NounPhrase, PhraseBuilder, PrepositionalPhrase};
use crate::core::probability::Chance;
use crate::schema::category::{Case, Number, Person};

/// Sentence-final marks: full stop, question mark, raised dot.
pub const PUNCTUATION: [char; 3] = ['.', ';', '·'];

/// Verbs whose complement is not a plain accusative.
pub const NON_ACCUSATIVE_VERBS: [&str; 2] = ["πιστευ", "προσκυν"];

/// Verbs that take a genitive complement.
pub const GENITIVE_OBJECT_VERBS: [&str; 1] = ["ἀκου"];

/// One constituent of a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constituent {
    Verb(String),
    Subject(NounPhrase),
    DirectObject(NounPhrase),
    IndirectObject(NounPhrase),
    GenitiveObject(NounPhrase),
    Prepositional(PrepositionalPhrase),
}

impl fmt::Display for Constituent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verb(verb) => f.write_str(verb),
            Self::Subject(np)
            | Self::DirectObject(np)
            | Self::IndirectObject(np)
            | Self::GenitiveObject(np) => fmt::Display::fmt(np, f),
            Self::Prepositional(pp) => fmt::Display::fmt(pp, f),
        }
    }
}

/// A finished sentence: constituents in their final order plus one mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub constituents: Vec<Constituent>,
    pub punctuation: char,
}

impl Sentence {
    pub fn verb(&self) -> Option<&str> {
        self.constituents.iter().find_map(|c| match c {
            Constituent::Verb(v) => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn has(&self, pred: impl Fn(&Constituent) -> bool) -> bool {
        self.constituents.iter().any(pred)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constituent) in self.constituents.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{constituent}")?;
        }
        write!(f, "{}", self.punctuation)
    }
}

/// Whether the verb's surface form starts with any of `prefixes`.
///
/// Matches the inflected string, not the lexeme.
fn starts_with_any(verb: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| verb.starts_with(p))
}

/// Composes sentences from phrases.
#[derive(Debug, Clone, Copy)]
pub struct SentenceComposer<'a> {
    phrases: PhraseBuilder<'a>,
}

impl<'a> SentenceComposer<'a> {
    pub fn new(phrases: PhraseBuilder<'a>) -> Self {
        Self { phrases }
    }

    pub fn phrases(&self) -> &PhraseBuilder<'a> {
        &self.phrases
    }

    /// A finite verb and, for the third person, possibly an explicit
    /// nominative subject agreeing in number.
    pub fn verb_and_subject<R: Rng + ?Sized>(&self, rng: &mut R) -> (String, Option<NounPhrase>) {
        let person = *pick(rng, &Person::ALL);
        let number = *pick(rng, &Number::ALL);

        let subject = (person == Person::Third
            && self.phrases.probabilities().roll(Chance::SubjectNamed, rng))
        .then(|| self.phrases.noun_phrase(rng, Case::Nominative, Some(number)));

        let stem = pick(rng, self.phrases.lexicon().verb_stems());
        let verb = self.phrases.inflector().inflect_verb(stem, person, number);
        (verb, subject)
    }

    pub fn random_sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> Sentence {
        let probabilities = self.phrases.probabilities();
        let (verb, subject) = self.verb_and_subject(rng);

        let takes_accusative = !starts_with_any(&verb, &NON_ACCUSATIVE_VERBS);
        let takes_genitive = starts_with_any(&verb, &GENITIVE_OBJECT_VERBS);

        let mut constituents = vec![Constituent::Verb(verb)];
        if let Some(subject) = subject {
            constituents.push(Constituent::Subject(subject));
        }
        if probabilities.roll(Chance::DirectObject, rng) && takes_accusative {
            constituents.push(Constituent::DirectObject(
                self.phrases.noun_phrase(rng, Case::Accusative, None),
            ));
        }
        if probabilities.roll(Chance::IndirectObject, rng) {
            constituents.push(Constituent::IndirectObject(
                self.phrases.noun_phrase(rng, Case::Dative, None),
            ));
        }
        if probabilities.roll(Chance::DirectObject, rng) && takes_genitive {
            constituents.push(Constituent::GenitiveObject(
                self.phrases.noun_phrase(rng, Case::Genitive, None),
            ));
        }
        if probabilities.roll(Chance::Preposition, rng) {
            constituents.push(Constituent::Prepositional(
                self.phrases.prepositional_phrase(rng),
            ));
        }

        constituents.shuffle(rng);
        let punctuation = *pick(rng, &PUNCTUATION);

        Sentence {
            constituents,
            punctuation,
        }
    }
}
