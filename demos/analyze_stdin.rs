//! Analyze Text from Stdin
//!
//! Pipe any text in and get the three sections back:
//!
//! ```bash
//! cat notes.txt | cargo run --example analyze_stdin
//! ```

use std::io::Read;

use gist::analyze;

fn main() {
    let mut text = String::new();
    let _ = std::io::stdin().read_to_string(&mut text);

    // Empty input is a prompt-for-input condition, not an error
    if text.trim().is_empty() {
        println!("Please paste some text before analyzing.");
        return;
    }

    println!("{}", analyze(&text));
}
