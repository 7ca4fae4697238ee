use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Grammatical case. Only the four cases the generator uses are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Accusative,
    Genitive,
    Dative,
}

/// Grammatical number. No dual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

/// Grammatical gender of nouns, articles, pronouns and adjectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Verb person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::Nominative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
    ];

    /// Short label used in annotations and preposition tables: "nom", "acc", "gen", "dat".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nominative => "nom",
            Self::Accusative => "acc",
            Self::Genitive => "gen",
            Self::Dative => "dat",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    /// "sg" or "pl".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Singular => "sg",
            Self::Plural => "pl",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    /// "m", "f" or "n".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Masculine => "m",
            Self::Feminine => "f",
            Self::Neuter => "n",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    /// "1", "2" or "3".
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(Case, Number, Gender, Person);

/// A case name that is not one of `nom`, `acc`, `gen`, `dat`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case '{0}'")]
pub struct UnknownCase(pub String);

impl FromStr for Case {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nom" => Ok(Self::Nominative),
            "acc" => Ok(Self::Accusative),
            "gen" => Ok(Self::Genitive),
            "dat" => Ok(Self::Dative),
            other => Err(UnknownCase(other.to_string())),
        }
    }
}
