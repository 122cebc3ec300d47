//! Build script to generate embedded puzzle data
//!
//! Reads the curated similarity table and hint list and generates Rust source
//! code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_similarities(
        "data/similarities.txt",
        &Path::new(&out_dir).join("similarities.rs"),
    );

    generate_word_list(
        "data/hints.txt",
        &Path::new(&out_dir).join("hints.rs"),
        "HINT_WORDS",
        "Curated hint words shown to players",
    );

    // Rebuild if data files change
    println!("cargo:rerun-if-changed=data/similarities.txt");
    println!("cargo:rerun-if-changed=data/hints.txt");
}

fn generate_similarities(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated similarity table").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Hand-authored base similarities as `(word, related, score)` triples"
    )
    .unwrap();
    writeln!(output, "pub const BASE_SIMILARITIES: &[(&str, &str, f64)] = &[").unwrap();

    let mut count = 0usize;
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [word, related, score] = fields.as_slice() else {
            panic!("{input_path}:{}: expected `word related score`", line_no + 1);
        };
        let score: f64 = score
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad score: {e}", line_no + 1));

        writeln!(output, "    (\"{word}\", \"{related}\", {score:?}),").unwrap();
        count += 1;
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in `BASE_SIMILARITIES`").unwrap();
    writeln!(output, "pub const BASE_SIMILARITIES_COUNT: usize = {count};").unwrap();
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
