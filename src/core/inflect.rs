/// Inflection — noun and adjective declension, verb conjugation with
/// ε-contraction.

use crate::core::lexicon::EndingTables;
use crate::schema::category::{Case, Gender, Number, Person};

/// Stem finals after which first-declension η endings become α.
const ALPHA_AFTER: &[char] = &['α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω', 'ρ'];

/// Sibilant stem finals: α in the singular nominative and accusative only.
const SIBILANTS: &[char] = &['ξ', 'σ', 'ψ'];

/// Keeps η despite its vowel final.
const ALPHA_EXCEPTION: &str = "ζω";

/// Ending onsets that swallow a stem-final ε without further change.
/// Tested before the bare ε and ο onsets.
const ABSORBING_ONSETS: &[&str] = &["η", "ω", "αι", "ει", "οι", "υι", "αυ", "ευ", "ηυ", "ου"];

/// Whether a feminine-pattern ending takes α in place of η for this stem.
///
/// Two disjoint triggers: a vowel or ρ final in the singular (ζω excepted),
/// or a sibilant final in the singular nominative/accusative of a noun.
pub fn takes_alpha(stem: &str, case: Case, number: Number, is_adjective: bool) -> bool {
    let singular = number == Number::Singular;
    let vowel_final = stem.ends_with(ALPHA_AFTER) && singular && stem != ALPHA_EXCEPTION;
    let sibilant_final = stem.ends_with(SIBILANTS)
        && singular
        && matches!(case, Case::Nominative | Case::Accusative)
        && !is_adjective;
    vowel_final || sibilant_final
}

/// η→α and ῃ→ᾳ on an ending, first occurrence of each.
pub fn alpha_ending(ending: &str) -> String {
    ending.replacen('η', "α", 1).replacen('ῃ', "ᾳ", 1)
}

/// Join an ε-final stem to an ending.
///
/// Stems without a final ε, and endings matching no contraction onset,
/// are concatenated unchanged.
pub fn contract_epsilon(stem: &str, ending: &str) -> String {
    let Some(root) = stem.strip_suffix('ε') else {
        return format!("{stem}{ending}");
    };

    if ABSORBING_ONSETS.iter().any(|onset| ending.starts_with(onset)) {
        format!("{root}{ending}")
    } else if let Some(rest) = ending.strip_prefix('ε') {
        format!("{root}ει{rest}")
    } else if let Some(rest) = ending.strip_prefix('ο') {
        format!("{root}ου{rest}")
    } else {
        format!("{stem}{ending}")
    }
}

/// Turns stems into surface forms using the ending tables.
///
/// With `annotate` set, every declined or conjugated word carries a
/// bracketed tag of the axes used, e.g. `λογος[nom.sg.m]` or `λυω[1.sg]`.
/// Articles are never tagged.
#[derive(Debug, Clone, Copy)]
pub struct Inflector<'a> {
    tables: &'a EndingTables,
    annotate: bool,
}

impl<'a> Inflector<'a> {
    pub fn new(tables: &'a EndingTables, annotate: bool) -> Self {
        Self { tables, annotate }
    }

    pub fn annotates(&self) -> bool {
        self.annotate
    }

    pub fn decline_noun(
        &self,
        stem: &str,
        case: Case,
        number: Number,
        gender: Gender,
        is_adjective: bool,
    ) -> String {
        let ending = self.tables.noun_endings.get(case, number, gender);
        let word = if takes_alpha(stem, case, number, is_adjective) {
            format!("{stem}{}", alpha_ending(ending))
        } else {
            format!("{stem}{ending}")
        };
        self.tag(word, &[case.label(), number.label(), gender.label()])
    }

    pub fn decline_adjective(&self, stem: &str, case: Case, number: Number, gender: Gender) -> String {
        self.decline_noun(stem, case, number, gender, true)
    }

    pub fn inflect_verb(&self, stem: &str, person: Person, number: Number) -> String {
        let ending = self.tables.verb_endings.get(person, number);
        let word = contract_epsilon(stem, ending);
        self.tag(word, &[person.label(), number.label()])
    }

    pub fn article(&self, case: Case, number: Number, gender: Gender) -> String {
        self.tables.articles.get(case, number, gender).to_string()
    }

    /// The pronoun αὐτος in the given form.
    pub fn autos(&self, case: Case, number: Number, gender: Gender) -> String {
        let word = self.tables.autos.get(case, number, gender).to_string();
        self.tag(word, &[case.label(), number.label(), gender.label()])
    }

    fn tag(&self, mut word: String, labels: &[&str]) -> String {
        if self.annotate {
            word.push('[');
            word.push_str(&labels.join("."));
            word.push(']');
        }
        word
    }
}
