/// Sentences — print random Koine Greek sentences, then their parsing.
///
/// Usage: koine_sentences [count] [--seed <n>] [--lexicon <path>] [--probabilities <path>]
///
/// The count may also come from the first run of digits in QUERY_STRING,
/// which makes the binary usable as a CGI script. The larger of the two
/// wins, and at least one sentence is always printed.

use koine_sentence::{strip_annotations, SentenceGenerator};
use std::io::{self, BufRead, IsTerminal};
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut count_arg: Option<String> = None;
    let mut seed = None;
    let mut lexicon_path = None;
    let mut probabilities_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = match args[i].parse::<u64>() {
                    Ok(s) => Some(s),
                    Err(_) => {
                        eprintln!("Invalid seed: {}", args[i]);
                        process::exit(1);
                    }
                };
            }
            "--lexicon" if i + 1 < args.len() => {
                i += 1;
                lexicon_path = Some(args[i].clone());
            }
            "--probabilities" if i + 1 < args.len() => {
                i += 1;
                probabilities_path = Some(args[i].clone());
            }
            other if count_arg.is_none() && !other.starts_with("--") => {
                count_arg = Some(other.to_string());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let query_string = std::env::var("QUERY_STRING").ok();
    let count = requested_count(count_arg.as_deref(), query_string.as_deref());

    let mut builder = SentenceGenerator::builder().annotate(true);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    if let Some(ref path) = lexicon_path {
        builder = builder.lexicon_file(path);
    }
    if let Some(ref path) = probabilities_path {
        builder = builder.probabilities_file(path);
    }
    let generator = match builder.build() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    println!("Content-Type: text/plain; charset=utf-8");
    println!();

    let sentences = generator.generate_sentences(count);
    for sentence in &sentences {
        println!("{}", strip_annotations(sentence));
    }
    println!();

    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        println!("Press enter to see parsing.");
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();
    } else if query_string.is_some() {
        println!("To generate N sentences at a time, add ?N to the URL.");
        println!();
        println!("{}", "-".repeat(72));
        println!();
    } else {
        println!("{}", "-".repeat(72));
        println!();
    }

    for sentence in &sentences {
        println!("{}", sentence);
    }
    println!();
    println!("(N.B. There may be other valid ways to parse this Greek.)");
}

/// Leading decimal digits of `s` as a number; 0 when there are none.
fn leading_number(s: &str) -> usize {
    let digits: String = s.trim_start().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// The first run of digits anywhere in `s`; 0 when there is none.
fn first_number(s: &str) -> usize {
    match s.find(|c: char| c.is_ascii_digit()) {
        Some(start) => leading_number(&s[start..]),
        None => 0,
    }
}

fn requested_count(arg: Option<&str>, query_string: Option<&str>) -> usize {
    let from_arg = arg.map_or(0, leading_number);
    let from_query = query_string.map_or(0, first_number);
    from_arg.max(from_query).max(1)
}

fn print_usage() {
    println!("Usage: koine_sentences [count] [--seed <n>] [--lexicon <path>] [--probabilities <path>]");
    println!();
    println!("Prints <count> random Koine Greek sentences (default 1), then the");
    println!("same sentences with every inflected word tagged by case.number.gender");
    println!("or person.number. Set QUERY_STRING=N to choose the count as a CGI script.");
}
