/// Probability policy — named Bernoulli chances for optional constituents.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbabilityError {
    #[error("probability '{name}' must be within 0.0..=1.0, got {value}")]
    OutOfRange { name: &'static str, value: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// The optional decisions the generator makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chance {
    /// A third-person subject is spelled out instead of left implicit.
    SubjectNamed,
    /// An accusative object (and, for ἀκου-, a genitive complement).
    DirectObject,
    IndirectObject,
    Preposition,
    /// A noun phrase gets a trailing genitive modifier.
    Possessed,
    /// A noun phrase is just a form of αὐτος.
    Autos,
    Article,
}

impl Chance {
    pub const ALL: [Chance; 7] = [
        Chance::SubjectNamed,
        Chance::DirectObject,
        Chance::IndirectObject,
        Chance::Preposition,
        Chance::Possessed,
        Chance::Autos,
        Chance::Article,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SubjectNamed => "subject_named",
            Self::DirectObject => "direct_object",
            Self::IndirectObject => "indirect_object",
            Self::Preposition => "preposition",
            Self::Possessed => "possessed",
            Self::Autos => "autos",
            Self::Article => "article",
        }
    }
}

/// Probability of each [`Chance`] succeeding.
///
/// RON files may set any subset of fields; the rest keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Probabilities {
    pub subject_named: f64,
    pub direct_object: f64,
    pub indirect_object: f64,
    pub preposition: f64,
    pub possessed: f64,
    pub autos: f64,
    pub article: f64,
}

impl Default for Probabilities {
    fn default() -> Self {
        Self {
            subject_named: 0.8,
            direct_object: 0.7,
            indirect_object: 0.6,
            preposition: 0.5,
            possessed: 0.4,
            autos: 0.2,
            article: 0.7,
        }
    }
}

impl Probabilities {
    /// Every chance set to the same value.
    pub fn uniform(p: f64) -> Self {
        Self {
            subject_named: p,
            direct_object: p,
            indirect_object: p,
            preposition: p,
            possessed: p,
            autos: p,
            article: p,
        }
    }

    pub fn get(&self, chance: Chance) -> f64 {
        match chance {
            Chance::SubjectNamed => self.subject_named,
            Chance::DirectObject => self.direct_object,
            Chance::IndirectObject => self.indirect_object,
            Chance::Preposition => self.preposition,
            Chance::Possessed => self.possessed,
            Chance::Autos => self.autos,
            Chance::Article => self.article,
        }
    }

    pub fn with(mut self, chance: Chance, p: f64) -> Self {
        let slot = match chance {
            Chance::SubjectNamed => &mut self.subject_named,
            Chance::DirectObject => &mut self.direct_object,
            Chance::IndirectObject => &mut self.indirect_object,
            Chance::Preposition => &mut self.preposition,
            Chance::Possessed => &mut self.possessed,
            Chance::Autos => &mut self.autos,
            Chance::Article => &mut self.article,
        };
        *slot = p;
        self
    }

    /// Reject values outside `0.0..=1.0` (NaN included).
    pub fn validate(&self) -> Result<(), ProbabilityError> {
        for chance in Chance::ALL {
            let value = self.get(chance);
            if !(0.0..=1.0).contains(&value) {
                return Err(ProbabilityError::OutOfRange {
                    name: chance.name(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Draw once for `chance`.
    ///
    /// Values must have passed [`validate`](Self::validate).
    pub fn roll<R: Rng + ?Sized>(&self, chance: Chance, rng: &mut R) -> bool {
        rng.gen_bool(self.get(chance))
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, ProbabilityError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<Self, ProbabilityError> {
        let probabilities: Probabilities = ron::from_str(input)?;
        probabilities.validate()?;
        Ok(probabilities)
    }
}
