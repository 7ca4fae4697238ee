/// Vocabulary and ending tables — the static data every inflection reads.
///
/// Vocabulary follows Duff, *Elements of New Testament Greek* (3rd ed.),
/// chapters 3–5. Custom vocabularies can be loaded from RON; the ending
/// tables are part of the grammar and always built in.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::category::{Case, Gender, Number, Person, UnknownCase};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("{table} table needs {expected} cells, found {found}")]
    CellCount {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("preposition line {line}: '{text}' has no case tokens")]
    MissingCases { line: usize, text: String },
    #[error("preposition line {line}: {source}")]
    UnknownCase {
        line: usize,
        #[source]
        source: UnknownCase,
    },
    #[error("duplicate preposition '{0}'")]
    DuplicatePreposition(String),
    #[error("no prepositions defined")]
    NoPrepositions,
    #[error("empty stem pool: {0}")]
    EmptyPool(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A case/number/gender table with all 24 cells present.
///
/// Cells are stored in authoring order: the singular block first, then the
/// plural block; inside each block case-major (nom, acc, gen, dat) and
/// gender-minor (m, f, n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CngTable {
    cells: [String; CngTable::CELLS],
}

impl CngTable {
    pub const CELLS: usize = 24;

    /// Build a table from whitespace-separated forms laid out in authoring order.
    pub fn from_words(table: &'static str, words: &str) -> Result<Self, LexiconError> {
        let forms: Vec<String> = words.split_whitespace().map(str::to_string).collect();
        let found = forms.len();
        let cells: [String; Self::CELLS] =
            forms.try_into().map_err(|_| LexiconError::CellCount {
                table,
                expected: Self::CELLS,
                found,
            })?;
        Ok(Self { cells })
    }

    pub fn get(&self, case: Case, number: Number, gender: Gender) -> &str {
        &self.cells[number.index() * 12 + case.index() * 3 + gender.index()]
    }
}

/// A person/number table with all 6 cells present.
///
/// Authoring order is 1sg, 2sg, 3sg, 1pl, 2pl, 3pl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnTable {
    cells: [String; PnTable::CELLS],
}

impl PnTable {
    pub const CELLS: usize = 6;

    pub fn from_words(table: &'static str, words: &str) -> Result<Self, LexiconError> {
        let forms: Vec<String> = words.split_whitespace().map(str::to_string).collect();
        let found = forms.len();
        let cells: [String; Self::CELLS] =
            forms.try_into().map_err(|_| LexiconError::CellCount {
                table,
                expected: Self::CELLS,
                found,
            })?;
        Ok(Self { cells })
    }

    pub fn get(&self, person: Person, number: Number) -> &str {
        &self.cells[number.index() * 3 + person.index()]
    }
}

const ARTICLE_FORMS: &str = "
    ὁ    ἡ    το
    τον  την  το
    του  της  του
    τῳ   τῃ   τῳ
    οἱ   αἱ   τα
    τους τας  τα
    των  των  των
    τοις ταις τοις
";

const NOUN_ENDINGS: &str = "
    ος  η   ον
    ον  ην  ον
    ου  ης  ου
    ῳ   ῃ   ῳ
    οι  αι  α
    ους ας  α
    ων  ων  ων
    οις αις οις
";

const AUTOS_FORMS: &str = "
    αὐτος  αὐτη   αὐτο
    αὐτον  αὐτην  αὐτο
    αὐτου  αὐτης  αὐτου
    αὐτῳ   αὐτῃ   αὐτῳ
    αὐτοι  αὐται  αὐτα
    αὐτους αὐτας  αὐτα
    αὐτων  αὐτων  αὐτων
    αὐτοις αὐταις αὐτοις
";

const VERB_ENDINGS: &str = "ω εις ει ομεν ετε ουσιν";

/// The four ending tables of the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingTables {
    pub articles: CngTable,
    pub noun_endings: CngTable,
    /// Full forms of the third-person pronoun αὐτος.
    pub autos: CngTable,
    pub verb_endings: PnTable,
}

impl EndingTables {
    pub fn standard() -> Result<Self, LexiconError> {
        Ok(Self {
            articles: CngTable::from_words("article", ARTICLE_FORMS)?,
            noun_endings: CngTable::from_words("noun ending", NOUN_ENDINGS)?,
            autos: CngTable::from_words("autos", AUTOS_FORMS)?,
            verb_endings: PnTable::from_words("verb ending", VERB_ENDINGS)?,
        })
    }
}

/// A preposition and the cases it may govern (never empty).
///
/// Only [`parse_prepositions`] constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preposition {
    form: String,
    governs: Vec<Case>,
}

impl Preposition {
    pub fn form(&self) -> &str {
        &self.form
    }

    /// The case government set, in table order.
    pub fn cases(&self) -> &[Case] {
        &self.governs
    }

    pub fn governs(&self, case: Case) -> bool {
        self.governs.contains(&case)
    }
}

/// Parse `preposition case case …` records, one per line.
///
/// Blank lines are skipped. A line without case tokens, an unknown case
/// name or a repeated preposition fails the whole table.
pub fn parse_prepositions(input: &str) -> Result<Vec<Preposition>, LexiconError> {
    let mut seen = FxHashSet::default();
    let mut prepositions = Vec::new();

    for (i, line) in input.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(form) = tokens.next() else {
            continue;
        };

        let mut governs = Vec::new();
        for token in tokens {
            let case = token
                .parse::<Case>()
                .map_err(|source| LexiconError::UnknownCase { line: i + 1, source })?;
            if !governs.contains(&case) {
                governs.push(case);
            }
        }
        if governs.is_empty() {
            return Err(LexiconError::MissingCases {
                line: i + 1,
                text: line.trim().to_string(),
            });
        }
        if !seen.insert(form.to_string()) {
            return Err(LexiconError::DuplicatePreposition(form.to_string()));
        }

        prepositions.push(Preposition {
            form: form.to_string(),
            governs,
        });
    }

    Ok(prepositions)
}

/// Noun stems grouped by gender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounStems {
    pub masculine: Vec<String>,
    pub feminine: Vec<String>,
    pub neuter: Vec<String>,
}

impl NounStems {
    pub fn for_gender(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
            Gender::Neuter => &self.neuter,
        }
    }
}

/// The complete vocabulary plus ending tables.
///
/// Every pool the generator draws from is guaranteed non-empty once
/// construction succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    tables: EndingTables,
    verb_stems: Vec<String>,
    noun_stems: NounStems,
    adjective_stems: Vec<String>,
    prepositions: Vec<Preposition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Lexicon")]
struct RonLexicon {
    verb_stems: Vec<String>,
    noun_stems: NounStems,
    #[serde(default)]
    adjective_stems: Vec<String>,
    prepositions: String,
}

impl Lexicon {
    pub fn new(
        verb_stems: Vec<String>,
        noun_stems: NounStems,
        adjective_stems: Vec<String>,
        prepositions: Vec<Preposition>,
    ) -> Result<Self, LexiconError> {
        if verb_stems.is_empty() {
            return Err(LexiconError::EmptyPool("verb stems"));
        }
        for (gender, label) in [
            (Gender::Masculine, "masculine noun stems"),
            (Gender::Feminine, "feminine noun stems"),
            (Gender::Neuter, "neuter noun stems"),
        ] {
            if noun_stems.for_gender(gender).is_empty() {
                return Err(LexiconError::EmptyPool(label));
            }
        }
        if prepositions.is_empty() {
            return Err(LexiconError::NoPrepositions);
        }

        Ok(Self {
            tables: EndingTables::standard()?,
            verb_stems,
            noun_stems,
            adjective_stems,
            prepositions,
        })
    }

    /// The built-in chapter 3–5 vocabulary.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::new(
            words(VERB_STEMS),
            NounStems {
                masculine: words(MASCULINE_NOUN_STEMS),
                feminine: words(FEMININE_NOUN_STEMS),
                neuter: words(NEUTER_NOUN_STEMS),
            },
            words(ADJECTIVE_STEMS),
            parse_prepositions(PREPOSITIONS)?,
        )
    }

    /// Load a vocabulary from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a vocabulary from a RON string.
    pub fn parse_ron(input: &str) -> Result<Self, LexiconError> {
        let raw: RonLexicon = ron::from_str(input)?;
        Self::new(
            raw.verb_stems,
            raw.noun_stems,
            raw.adjective_stems,
            parse_prepositions(&raw.prepositions)?,
        )
    }

    pub fn tables(&self) -> &EndingTables {
        &self.tables
    }

    pub fn verb_stems(&self) -> &[String] {
        &self.verb_stems
    }

    pub fn noun_stems(&self, gender: Gender) -> &[String] {
        self.noun_stems.for_gender(gender)
    }

    /// Declinable with `decline_adjective`; not drawn on by sentence composition.
    pub fn adjective_stems(&self) -> &[String] {
        &self.adjective_stems
    }

    pub fn prepositions(&self) -> &[Preposition] {
        &self.prepositions
    }

    pub fn noun_stem_count(&self) -> usize {
        Gender::ALL.iter().map(|&g| self.noun_stems(g).len()).sum()
    }
}

fn words(list: &str) -> Vec<String> {
    list.split_whitespace().map(str::to_string).collect()
}

// Chapter 3 then chapter 4 verbs.
const VERB_STEMS: &str = "
    ἀγ ἀκου βαλλ βλεπ διδασκ ἐχ λαμβαν λεγ λυ
    ζητε καλε λαλε ποιε τηρε φιλε πιστευ

    ἀναβλεπ ἀπολυ ἐκβαλλ ἐπικαλε κατοικε παρακαλε
    παραλαμβαν περιπατε προσκυνε συναγ ὑπαγ
";

const MASCULINE_NOUN_STEMS: &str = "
    ἀγγελ ἀδελφ ἀρτ δουλ θε κοσμ κυρι λογ νομ οἰκ οὐραν ὀχλ υἱ
    Χριστ ἀνθρωπ λα Παυλ Πετρ

    καιρ
";

const FEMININE_NOUN_STEMS: &str = "
    ἀγαπ ἀδελφ ἀρχ γ ζω φων ψυχ ἀμαρτι βασιλει ἐκκλησι ἡμερ καρδι
    Μαρι οἰκι ὡρ δοξ θαλασσ

    εἰρην κεφαλ συναγωγ Γαλιλαι
";

const NEUTER_NOUN_STEMS: &str = "
    βιβλι δαιμονι ἐργ εὐαγγελι ἱερ πλοι προσωπ σαββατ σημει τεκν
";

const ADJECTIVE_STEMS: &str = "
    ἀγαθ ἁγι ἑτερ ἰδι Ἰουδαι καλ μακαρι μον νεκρ ὁσ πονηρ τυφλ
    ἀγαπητ δικαι ἑκαστ κακ καιν πιστ
";

const PREPOSITIONS: &str = "
    ἀπο     gen
    δια     acc gen
    εἰς     acc
    ἐκ      gen
    ἐν      dat
    ἐνωπιον gen
    ἐξω     gen
    ἐπι     acc gen dat
    ἑως     gen
    κατα    acc gen
    μετα    acc gen
    παρα    acc gen dat
    περι    acc gen
    προ     gen
    προς    acc
    συν     dat
    ὑπερ    acc gen
    ὑπο     acc gen
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_build() {
        let tables = EndingTables::standard().unwrap();
        assert_eq!(
            tables.articles.get(Case::Nominative, Number::Singular, Gender::Masculine),
            "ὁ"
        );
        assert_eq!(
            tables.articles.get(Case::Dative, Number::Plural, Gender::Feminine),
            "ταις"
        );
        assert_eq!(
            tables.noun_endings.get(Case::Accusative, Number::Plural, Gender::Neuter),
            "α"
        );
        assert_eq!(
            tables.autos.get(Case::Genitive, Number::Singular, Gender::Feminine),
            "αὐτης"
        );
        assert_eq!(tables.verb_endings.get(Person::First, Number::Plural), "ομεν");
        assert_eq!(tables.verb_endings.get(Person::Third, Number::Plural), "ουσιν");
    }

    #[test]
    fn cng_layout_is_singular_block_then_plural_block() {
        let words: Vec<String> = (0..24).map(|i| format!("w{i}")).collect();
        let table = CngTable::from_words("probe", &words.join(" ")).unwrap();
        assert_eq!(table.get(Case::Nominative, Number::Singular, Gender::Masculine), "w0");
        assert_eq!(table.get(Case::Accusative, Number::Singular, Gender::Feminine), "w4");
        assert_eq!(table.get(Case::Dative, Number::Singular, Gender::Neuter), "w11");
        assert_eq!(table.get(Case::Nominative, Number::Plural, Gender::Masculine), "w12");
        assert_eq!(table.get(Case::Genitive, Number::Plural, Gender::Neuter), "w20");
        assert_eq!(table.get(Case::Dative, Number::Plural, Gender::Neuter), "w23");
    }

    #[test]
    fn wrong_cell_count_rejected() {
        let err = CngTable::from_words("short", "ὁ ἡ το").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::CellCount { table: "short", expected: 24, found: 3 }
        ));

        let err = PnTable::from_words("long", "ω εις ει ομεν ετε ουσιν ουσι").unwrap_err();
        assert!(matches!(err, LexiconError::CellCount { expected: 6, found: 7, .. }));
    }

    #[test]
    fn prepositions_parse() {
        let preps = parse_prepositions(PREPOSITIONS).unwrap();
        assert_eq!(preps.len(), 18);
        let epi = preps.iter().find(|p| p.form == "ἐπι").unwrap();
        assert_eq!(epi.governs, vec![Case::Accusative, Case::Genitive, Case::Dative]);
        let en = preps.iter().find(|p| p.form == "ἐν").unwrap();
        assert!(en.governs(Case::Dative));
        assert!(!en.governs(Case::Accusative));
    }

    #[test]
    fn preposition_without_cases_fails() {
        let err = parse_prepositions("ἀπο gen\nσυν\n").unwrap_err();
        assert!(matches!(err, LexiconError::MissingCases { line: 2, .. }));
    }

    #[test]
    fn preposition_with_unknown_case_fails() {
        let err = parse_prepositions("ἐν dat loc").unwrap_err();
        assert!(matches!(err, LexiconError::UnknownCase { line: 1, .. }));
        assert!(err.to_string().contains("loc"));
    }

    #[test]
    fn duplicate_preposition_fails() {
        let err = parse_prepositions("ἐν dat\nἐν acc").unwrap_err();
        assert!(matches!(err, LexiconError::DuplicatePreposition(ref p) if p == "ἐν"));
    }

    #[test]
    fn builtin_lexicon_counts() {
        let lex = Lexicon::builtin().unwrap();
        assert_eq!(lex.verb_stems.len(), 27);
        assert_eq!(lex.noun_stems.masculine.len(), 19);
        assert_eq!(lex.noun_stems.feminine.len(), 21);
        assert_eq!(lex.noun_stems.neuter.len(), 10);
        assert_eq!(lex.noun_stem_count(), 50);
        assert_eq!(lex.adjective_stems.len(), 18);
        assert_eq!(lex.verb_stems[0], "ἀγ");
    }

    #[test]
    fn empty_pools_rejected() {
        let preps = parse_prepositions("ἐν dat").unwrap();
        let nouns = NounStems {
            masculine: vec!["λογ".to_string()],
            feminine: vec![],
            neuter: vec!["ἐργ".to_string()],
        };
        let err = Lexicon::new(vec!["λυ".to_string()], nouns.clone(), vec![], preps.clone())
            .unwrap_err();
        assert!(matches!(err, LexiconError::EmptyPool("feminine noun stems")));

        let err = Lexicon::new(vec![], nouns, vec![], preps).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyPool("verb stems")));
    }

    #[test]
    fn parse_ron_lexicon() {
        let input = r#"Lexicon(
            verb_stems: ["λυ", "ποιε"],
            noun_stems: (
                masculine: ["λογ"],
                feminine: ["ἡμερ"],
                neuter: ["τεκν"],
            ),
            prepositions: "ἐν dat\nεἰς acc",
        )"#;
        let lex = Lexicon::parse_ron(input).unwrap();
        assert_eq!(lex.verb_stems, vec!["λυ", "ποιε"]);
        assert!(lex.adjective_stems.is_empty());
        assert_eq!(lex.prepositions.len(), 2);
    }

    #[test]
    fn parse_ron_rejects_bad_prepositions() {
        let input = r#"Lexicon(
            verb_stems: ["λυ"],
            noun_stems: (masculine: ["λογ"], feminine: ["ἡμερ"], neuter: ["τεκν"]),
            prepositions: "ἐν",
        )"#;
        assert!(matches!(
            Lexicon::parse_ron(input),
            Err(LexiconError::MissingCases { .. })
        ));
    }
}
