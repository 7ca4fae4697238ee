/// Lexicon Linter — validates RON vocabularies before they reach the generator.
///
/// Usage: lexicon_linter <lexicon_file_or_dir>

use koine_sentence::core::lexicon::Lexicon;
use koine_sentence::core::sentence::{GENITIVE_OBJECT_VERBS, NON_ACCUSATIVE_VERBS};
use koine_sentence::schema::category::Gender;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::process;

/// Stems the complement rules are written for.
const TRIGGER_LEXEMES: &[&str] = &["πιστευ", "προσκυνε", "ἀκου"];

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: lexicon_linter <lexicon_file_or_dir>");
        process::exit(0);
    }

    let root = Path::new(&args[1]);
    let mut files = Vec::new();
    if root.is_file() {
        files.push(root.to_path_buf());
    } else if root.is_dir() {
        collect_ron_files(root, &mut files);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args[1]);
        process::exit(1);
    }
    files.sort();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for path in &files {
        match Lexicon::load_from_ron(path) {
            Ok(lexicon) => {
                println!("  Loaded: {}", path.display());
                warnings.extend(
                    lint_lexicon(&lexicon)
                        .into_iter()
                        .map(|w| format!("{}: {}", path.display(), w)),
                );
                print_summary(&lexicon);
            }
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    println!("\n=== Lexicon Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} files, {} errors, {} warnings",
        files.len(),
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn collect_ron_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_ron_files(&path, files);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                files.push(path);
            }
        }
    }
}

fn lint_lexicon(lexicon: &Lexicon) -> Vec<String> {
    let mut warnings = Vec::new();

    let pools: [(&str, &[String]); 5] = [
        ("verb", lexicon.verb_stems()),
        ("adjective", lexicon.adjective_stems()),
        ("masculine noun", lexicon.noun_stems(Gender::Masculine)),
        ("feminine noun", lexicon.noun_stems(Gender::Feminine)),
        ("neuter noun", lexicon.noun_stems(Gender::Neuter)),
    ];

    for (label, stems) in pools {
        let mut seen = FxHashSet::default();
        for stem in stems {
            if !seen.insert(stem.as_str()) {
                warnings.push(format!("duplicate {} stem '{}'", label, stem));
            }
        }
    }

    // Complement rules match the verb's surface prefix, so any other stem
    // sharing a trigger prefix inherits the rule.
    for stem in lexicon.verb_stems() {
        let trigger = NON_ACCUSATIVE_VERBS
            .iter()
            .chain(GENITIVE_OBJECT_VERBS.iter())
            .find(|t| stem.starts_with(**t));
        if let Some(trigger) = trigger {
            if !TRIGGER_LEXEMES.contains(&stem.as_str()) {
                warnings.push(format!(
                    "verb stem '{}' shares the complement trigger prefix '{}'",
                    stem, trigger
                ));
            }
        }
    }

    if lexicon.adjective_stems().is_empty() {
        warnings.push("no adjective stems".to_string());
    }

    warnings
}

fn print_summary(lexicon: &Lexicon) {
    let contract = lexicon
        .verb_stems()
        .iter()
        .filter(|s| s.ends_with('ε'))
        .count();
    println!(
        "    {} verbs ({} ε-contract), {} m / {} f / {} n nouns, {} adjectives, {} prepositions",
        lexicon.verb_stems().len(),
        contract,
        lexicon.noun_stems(Gender::Masculine).len(),
        lexicon.noun_stems(Gender::Feminine).len(),
        lexicon.noun_stems(Gender::Neuter).len(),
        lexicon.adjective_stems().len(),
        lexicon.prepositions().len()
    );
}
