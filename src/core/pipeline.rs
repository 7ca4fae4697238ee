/// The generation pipeline: lexicon + probabilities → sentences.
///
/// Everything fallible happens in `SentenceGeneratorBuilder::build`; a built
/// generator cannot fail.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::lexicon::{Lexicon, LexiconError};
use crate::core::phrase::{PhraseBuilder, DEFAULT_MAX_POSSESSIVE_DEPTH};
use crate::core::probability::{Probabilities, ProbabilityError};
use crate::core::sentence::{Sentence, SentenceComposer};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("probability error: {0}")]
    Probability(#[from] ProbabilityError),
}

/// A ready-to-use sentence generator. Built via `SentenceGenerator::builder()`.
///
/// Holds only immutable data, so one generator can serve many threads as
/// long as each brings its own random stream to [`generate_with`](Self::generate_with).
#[derive(Debug, Clone)]
pub struct SentenceGenerator {
    lexicon: Lexicon,
    probabilities: Probabilities,
    annotate: bool,
    max_possessive_depth: usize,
    seed: u64,
}

/// Builder for constructing a `SentenceGenerator`.
pub struct SentenceGeneratorBuilder {
    seed: Option<u64>,
    annotate: bool,
    max_possessive_depth: usize,
    lexicon_path: Option<PathBuf>,
    probabilities_path: Option<PathBuf>,
    /// Directly provided lexicon (for testing without files).
    lexicon: Option<Lexicon>,
    /// Directly provided probabilities (for testing without files).
    probabilities: Option<Probabilities>,
}

impl SentenceGenerator {
    pub fn builder() -> SentenceGeneratorBuilder {
        SentenceGeneratorBuilder {
            seed: None,
            annotate: false,
            max_possessive_depth: DEFAULT_MAX_POSSESSIVE_DEPTH,
            lexicon_path: None,
            probabilities_path: None,
            lexicon: None,
            probabilities: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn probabilities(&self) -> &Probabilities {
        &self.probabilities
    }

    pub fn annotates(&self) -> bool {
        self.annotate
    }

    pub fn composer(&self) -> SentenceComposer<'_> {
        SentenceComposer::new(PhraseBuilder::new(
            &self.lexicon,
            &self.probabilities,
            self.annotate,
            self.max_possessive_depth,
        ))
    }

    /// Generate `count` sentences from a stream seeded with the generator's
    /// seed. Repeated calls return the same sentences.
    pub fn generate_sentences(&self, count: usize) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng, count)
    }

    /// Generate `count` sentences drawing from a caller-owned stream.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        let composer = self.composer();
        (0..count)
            .map(|_| {
                let sentence = composer.random_sentence(rng).to_string();
                log::trace!("generated: {sentence}");
                sentence
            })
            .collect()
    }

    /// One structured sentence, for callers that inspect constituents.
    pub fn sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> Sentence {
        self.composer().random_sentence(rng)
    }
}

impl SentenceGeneratorBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tag every inflected word with the axes that produced it.
    pub fn annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Maximum number of nested genitive modifiers in one noun phrase.
    pub fn max_possessive_depth(mut self, depth: usize) -> Self {
        self.max_possessive_depth = depth;
        self
    }

    pub fn lexicon_file(mut self, path: impl AsRef<Path>) -> Self {
        self.lexicon_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn probabilities_file(mut self, path: impl AsRef<Path>) -> Self {
        self.probabilities_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Provide a lexicon directly (for testing without files).
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Provide probabilities directly (for testing without files).
    pub fn with_probabilities(mut self, probabilities: Probabilities) -> Self {
        self.probabilities = Some(probabilities);
        self
    }

    /// Files take precedence over directly provided values; with neither,
    /// the built-in lexicon and default probabilities are used.
    pub fn build(self) -> Result<SentenceGenerator, GeneratorError> {
        let lexicon = match (self.lexicon_path, self.lexicon) {
            (Some(path), _) => Lexicon::load_from_ron(&path)?,
            (None, Some(lexicon)) => lexicon,
            (None, None) => Lexicon::builtin()?,
        };

        let probabilities = match (self.probabilities_path, self.probabilities) {
            (Some(path), _) => Probabilities::load_from_ron(&path)?,
            (None, Some(probabilities)) => {
                probabilities.validate()?;
                probabilities
            }
            (None, None) => Probabilities::default(),
        };

        let seed = self.seed.unwrap_or_else(rand::random);

        log::debug!(
            "sentence generator ready: seed {seed}, {} verb stems, {} noun stems, {} prepositions",
            lexicon.verb_stems().len(),
            lexicon.noun_stem_count(),
            lexicon.prepositions().len()
        );

        Ok(SentenceGenerator {
            lexicon,
            probabilities,
            annotate: self.annotate,
            max_possessive_depth: self.max_possessive_depth,
            seed,
        })
    }
}

/// Generate `count` sentences with the built-in lexicon, default
/// probabilities and a fresh random seed.
pub fn generate_sentences(count: usize) -> Result<Vec<String>, GeneratorError> {
    Ok(SentenceGenerator::builder().build()?.generate_sentences(count))
}

/// Remove every `[...]` annotation group. An unclosed `[` is left as is.
pub fn strip_annotations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}
