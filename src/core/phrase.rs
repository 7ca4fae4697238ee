/// Phrase building — noun phrases with optional article and genitive
/// modifier, pronoun substitution, and prepositional phrases.

use rand::Rng;
use std::fmt;

use crate::core::inflect::Inflector;
use crate::core::lexicon::{Lexicon, Preposition};
use crate::core::probability::{Chance, Probabilities};
use crate::schema::category::{Case, Gender, Number};

/// Default cap on nested genitive modifiers.
pub const DEFAULT_MAX_POSSESSIVE_DEPTH: usize = 8;

/// Uniform pick from a pool the lexicon guarantees to be non-empty.
pub(crate) fn pick<'s, T, R: Rng + ?Sized>(rng: &mut R, items: &'s [T]) -> &'s T {
    &items[rng.gen_range(0..items.len())]
}

/// A generated noun phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounPhrase {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
    pub article: Option<String>,
    /// Declined noun, or the αὐτος form when `pronoun` is set.
    pub head: String,
    pub genitive: Option<Box<NounPhrase>>,
    pub pronoun: bool,
}

impl NounPhrase {
    /// Number of nested genitive modifiers below this phrase.
    pub fn possessive_depth(&self) -> usize {
        self.genitive
            .as_ref()
            .map_or(0, |g| 1 + g.possessive_depth())
    }
}

impl fmt::Display for NounPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref article) = self.article {
            write!(f, "{article} ")?;
        }
        f.write_str(&self.head)?;
        if let Some(ref genitive) = self.genitive {
            write!(f, " {genitive}")?;
        }
        Ok(())
    }
}

/// A preposition followed by a noun phrase in one of its governed cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepositionalPhrase {
    pub preposition: String,
    pub object: NounPhrase,
}

impl fmt::Display for PrepositionalPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preposition, self.object)
    }
}

/// Builds phrases from a lexicon under a probability policy.
#[derive(Debug, Clone, Copy)]
pub struct PhraseBuilder<'a> {
    lexicon: &'a Lexicon,
    probabilities: &'a Probabilities,
    inflector: Inflector<'a>,
    max_possessive_depth: usize,
}

impl<'a> PhraseBuilder<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        probabilities: &'a Probabilities,
        annotate: bool,
        max_possessive_depth: usize,
    ) -> Self {
        Self {
            lexicon,
            probabilities,
            inflector: Inflector::new(lexicon.tables(), annotate),
            max_possessive_depth,
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn probabilities(&self) -> &'a Probabilities {
        self.probabilities
    }

    pub fn inflector(&self) -> &Inflector<'a> {
        &self.inflector
    }

    /// Generate a noun phrase in `case`. A `None` number is drawn at random.
    pub fn noun_phrase<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        case: Case,
        number: Option<Number>,
    ) -> NounPhrase {
        self.noun_phrase_at(rng, case, number, 0)
    }

    fn noun_phrase_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        case: Case,
        number: Option<Number>,
        depth: usize,
    ) -> NounPhrase {
        let number = number.unwrap_or_else(|| *pick(rng, &Number::ALL));

        if self.probabilities.roll(Chance::Autos, rng) {
            let gender = *pick(rng, &Gender::ALL);
            return NounPhrase {
                case,
                number,
                gender,
                article: None,
                head: self.inflector.autos(case, number, gender),
                genitive: None,
                pronoun: true,
            };
        }

        let gender = *pick(rng, &Gender::ALL);
        let stem = pick(rng, self.lexicon.noun_stems(gender));
        let article = self
            .probabilities
            .roll(Chance::Article, rng)
            .then(|| self.inflector.article(case, number, gender));
        let head = self.inflector.decline_noun(stem, case, number, gender, false);

        let genitive = if depth >= self.max_possessive_depth {
            log::debug!("possessive chain capped at depth {depth}");
            None
        } else if self.probabilities.roll(Chance::Possessed, rng) {
            Some(Box::new(self.noun_phrase_at(rng, Case::Genitive, None, depth + 1)))
        } else {
            None
        };

        NounPhrase {
            case,
            number,
            gender,
            article,
            head,
            genitive,
            pronoun: false,
        }
    }

    /// A random preposition with an object in one of its governed cases.
    pub fn prepositional_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> PrepositionalPhrase {
        let preposition: &Preposition = pick(rng, self.lexicon.prepositions());
        let case = *pick(rng, preposition.cases());
        PrepositionalPhrase {
            preposition: preposition.form().to_string(),
            object: self.noun_phrase(rng, case, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builder<'a>(lex: &'a Lexicon, probs: &'a Probabilities) -> PhraseBuilder<'a> {
        PhraseBuilder::new(lex, probs, false, DEFAULT_MAX_POSSESSIVE_DEPTH)
    }

    #[test]
    fn pronoun_phrase_is_terminal() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::uniform(1.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let np = builder(&lex, &probs).noun_phrase(&mut rng, Case::Dative, None);
            assert!(np.pronoun);
            assert!(np.article.is_none());
            assert!(np.genitive.is_none());
            assert_eq!(
                np.head,
                lex.tables().autos.get(Case::Dative, np.number, np.gender)
            );
        }
    }

    #[test]
    fn article_agrees_with_noun() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::uniform(0.0).with(Chance::Article, 1.0);
        let b = builder(&lex, &probs);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let np = b.noun_phrase(&mut rng, Case::Accusative, Some(Number::Plural));
            assert_eq!(np.number, Number::Plural);
            assert_eq!(
                np.article.as_deref(),
                Some(lex.tables().articles.get(Case::Accusative, Number::Plural, np.gender))
            );
            assert!(np.genitive.is_none());
            assert_eq!(np.to_string().split(' ').count(), 2);
        }
    }

    #[test]
    fn bare_noun_has_no_article() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::uniform(0.0);
        let mut rng = StdRng::seed_from_u64(9);
        let np = builder(&lex, &probs).noun_phrase(&mut rng, Case::Nominative, None);
        assert!(!np.pronoun);
        assert!(np.article.is_none());
        assert_eq!(np.to_string(), np.head);
    }

    #[test]
    fn genitive_modifiers_are_genitive() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::default()
            .with(Chance::Possessed, 0.9)
            .with(Chance::Autos, 0.0);
        let b = builder(&lex, &probs);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..300 {
            let np = b.noun_phrase(&mut rng, Case::Nominative, None);
            let mut current = np.genitive.as_deref();
            while let Some(g) = current {
                assert_eq!(g.case, Case::Genitive);
                current = g.genitive.as_deref();
            }
        }
    }

    #[test]
    fn possessive_depth_is_capped() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::uniform(0.0).with(Chance::Possessed, 1.0);
        let b = PhraseBuilder::new(&lex, &probs, false, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let np = b.noun_phrase(&mut rng, Case::Nominative, None);
        assert_eq!(np.possessive_depth(), 3);
        assert_eq!(np.to_string().split(' ').count(), 4);
    }

    #[test]
    fn zero_stream_takes_first_options() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::uniform(0.0).with(Chance::Article, 1.0);
        let mut rng = StepRng::new(0, 0);
        let np = builder(&lex, &probs).noun_phrase(&mut rng, Case::Genitive, None);
        assert_eq!(np.to_string(), "του ἀγγελου");
    }

    #[test]
    fn prepositions_govern_their_objects() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::default();
        let b = builder(&lex, &probs);
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..2000 {
            let pp = b.prepositional_phrase(&mut rng);
            let prep = lex
                .prepositions()
                .iter()
                .find(|p| p.form() == pp.preposition)
                .unwrap();
            assert!(
                prep.governs(pp.object.case),
                "{} does not govern {}",
                pp.preposition,
                pp.object.case
            );
            assert!(pp.to_string().starts_with(&format!("{} ", pp.preposition)));
        }
    }

    #[test]
    fn annotated_phrase_tags_head_not_article() {
        let lex = Lexicon::builtin().unwrap();
        let probs = Probabilities::uniform(0.0).with(Chance::Article, 1.0);
        let b = PhraseBuilder::new(&lex, &probs, true, DEFAULT_MAX_POSSESSIVE_DEPTH);
        let mut rng = StepRng::new(0, 0);
        let np = b.noun_phrase(&mut rng, Case::Nominative, Some(Number::Singular));
        assert_eq!(np.to_string(), "ὁ ἀγγελος[nom.sg.m]");
    }
}
