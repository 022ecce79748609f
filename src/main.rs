//! Wordlist Query CLI
//!
//! Command-line front-end for the dictionary queries.

use std::process;

use wordlist_query::{Dictionary, OverflowPolicy, WordStatus, ALPHABET, LONGEST_WORD};

const USAGE_TEXT: &str = include_str!("text/usage.txt");

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn usage_error(usage: &str) -> ! {
    eprintln!("Usage: wordlist-query {}", usage);
    eprintln!("Use --help for usage information.");
    process::exit(1);
}

fn run_check(dictionary: &Dictionary, words: &[String]) {
    if words.is_empty() {
        usage_error("check <dictionary> <word>...");
    }
    let statuses = dictionary
        .spell_check_all(words)
        .unwrap_or_else(|e| fail(e));

    for (word, status) in words.iter().zip(statuses) {
        match status {
            WordStatus::Found => println!("{:<20} ✓ found", word),
            WordStatus::NotFound => println!("{:<20} ✗ not found", word),
        }
    }
}

fn run_starts(dictionary: &Dictionary, letter: Option<&String>) {
    let mut chars = match letter {
        Some(s) => s.chars(),
        None => usage_error("starts <dictionary> <letter>"),
    };
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => fail("Letter must be a single character."),
    };

    let count = dictionary
        .words_starting_with(letter)
        .unwrap_or_else(|e| fail(e));
    println!(
        "{} word(s) start with '{}'",
        count,
        wordlist_query::to_upper(&letter.to_string())
    );
}

fn run_letters(dictionary: &Dictionary) {
    let counts = dictionary.letter_counts().unwrap_or_else(|e| fail(e));
    let total: u64 = counts.iter().sum();

    println!("{:>6} {:>10}", "Letter", "Words");
    println!("{}", "-".repeat(17));
    for (letter, count) in ALPHABET.iter().zip(counts) {
        println!("{:>6} {:>10}", letter, count);
    }
    println!("{}", "-".repeat(17));
    println!("{:>6} {:>10}", "Total", total);
}

fn run_lengths(dictionary: &Dictionary, max: Option<&String>) {
    let max_length: u8 = match max {
        Some(s) => s
            .parse()
            .unwrap_or_else(|_| fail("Max length must be a number from 0 to 255.")),
        None => LONGEST_WORD as u8,
    };

    let mut histogram = vec![0u64; usize::from(max_length) + 1];
    dictionary
        .word_lengths(&mut histogram, max_length)
        .unwrap_or_else(|e| fail(e));

    let biggest = histogram.iter().copied().max().unwrap_or(0).max(1);
    println!("{:>6} {:>10}", "Length", "Words");
    println!("{}", "-".repeat(17));
    for (length, &count) in histogram.iter().enumerate().skip(1) {
        if count == 0 {
            continue;
        }
        let bar = "█".repeat(((count * 40 / biggest) as usize).max(1));
        println!("{:>6} {:>10} {}", length, count, bar);
    }
    if histogram[0] > 0 {
        println!("Blank lines: {}", histogram[0]);
    }
}

fn run_info(dictionary: &Dictionary) {
    let info = dictionary.info().unwrap_or_else(|e| fail(e));
    println!("Dictionary: {}", dictionary.path().display());
    println!("  Words: {}", info.count);
    println!("  Shortest word: {} characters", info.shortest);
    println!("  Longest word: {} characters", info.longest);
}

fn main() {
    env_logger::init();

    let mut policy = OverflowPolicy::default();
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
                return;
            }
            "--truncate" => policy = OverflowPolicy::Truncate,
            "--skip" => policy = OverflowPolicy::Skip,
            _ => args.push(arg),
        }
    }

    if args.len() < 2 {
        println!("{}", USAGE_TEXT);
        process::exit(1);
    }

    let dictionary = Dictionary::new(&args[1]).with_overflow_policy(policy);

    match args[0].as_str() {
        "check" | "c" => run_check(&dictionary, &args[2..]),
        "starts" | "s" => run_starts(&dictionary, args.get(2)),
        "letters" | "l" => run_letters(&dictionary),
        "lengths" | "len" => run_lengths(&dictionary, args.get(2)),
        "info" | "i" => run_info(&dictionary),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information.");
            process::exit(1);
        }
    }
}
