/// Vocabulary and probability loading from RON fixtures.

use koine_sentence::core::lexicon::{Lexicon, LexiconError};
use koine_sentence::core::probability::{Probabilities, ProbabilityError};
use koine_sentence::schema::category::{Case, Gender};
use koine_sentence::{GeneratorError, SentenceGenerator};
use std::path::Path;

#[test]
fn chapter3_lexicon_loads() {
    let lex = Lexicon::load_from_ron(Path::new("tests/fixtures/chapter3_lexicon.ron")).unwrap();
    assert_eq!(lex.verb_stems().len(), 16);
    assert_eq!(lex.noun_stems(Gender::Masculine).len(), 18);
    assert_eq!(lex.noun_stems(Gender::Feminine).len(), 17);
    assert_eq!(lex.noun_stems(Gender::Neuter).len(), 10);
    assert_eq!(lex.adjective_stems().len(), 3);

    let forms: Vec<&str> = lex.prepositions().iter().map(|p| p.form()).collect();
    assert_eq!(forms, vec!["ἀπο", "εἰς", "ἐκ", "ἐν", "ἐπι"]);
    let epi = &lex.prepositions()[4];
    assert_eq!(epi.cases(), &[Case::Accusative, Case::Genitive, Case::Dative]);
}

#[test]
fn unknown_case_in_file_fails_construction() {
    let err = Lexicon::load_from_ron(Path::new("tests/fixtures/bad_prepositions.ron")).unwrap_err();
    match err {
        LexiconError::UnknownCase { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(source.0, "abl");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sparse_probabilities_keep_defaults() {
    let p = Probabilities::load_from_ron(Path::new("tests/fixtures/sparse_probabilities.ron"))
        .unwrap();
    assert_eq!(p.autos, 0.0);
    assert_eq!(p.possessed, 0.0);
    assert_eq!(p.preposition, 1.0);
    assert_eq!(p.subject_named, 0.8);
    assert_eq!(p.article, 0.7);
}

#[test]
fn malformed_probability_file_is_ron_error() {
    assert!(matches!(
        Probabilities::parse_ron("(autos: \"often\")"),
        Err(ProbabilityError::Ron(_))
    ));
}

#[test]
fn generator_from_files_uses_file_vocabulary() {
    let generator = SentenceGenerator::builder()
        .seed(3)
        .lexicon_file("tests/fixtures/chapter3_lexicon.ron")
        .probabilities_file("tests/fixtures/sparse_probabilities.ron")
        .build()
        .unwrap();

    let allowed = ["ἀπο", "εἰς", "ἐκ", "ἐν", "ἐπι"];
    for sentence in generator.generate_sentences(200) {
        // preposition probability is 1.0, so every sentence has one
        let has_prep = sentence
            .trim_end_matches(['.', ';', '·'])
            .split(' ')
            .any(|w| allowed.contains(&w));
        assert!(has_prep, "no preposition in: {sentence}");
        assert!(!sentence.contains("αὐτ"), "pronoun despite autos 0.0: {sentence}");
    }
}

#[test]
fn bad_lexicon_file_fails_build() {
    let result = SentenceGenerator::builder()
        .lexicon_file("tests/fixtures/bad_prepositions.ron")
        .build();
    assert!(matches!(
        result,
        Err(GeneratorError::Lexicon(LexiconError::UnknownCase { .. }))
    ));
}
