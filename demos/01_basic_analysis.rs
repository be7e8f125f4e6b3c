//! Basic Text Analysis
//!
//! The minimal example: turn meeting notes into a summary, keyword
//! themes, and action items.
//!
//! ```bash
//! cargo run --example 01_basic_analysis
//! ```

use gist::Analyzer;

fn main() {
    let notes = "The platform migration is on track for the beta. \
        Two services still fail the soak test. \
        We should freeze non-critical changes until the soak test passes. \
        Ops must sign off on the rollback plan. \
        The beta announcement needs a deadline from marketing.";

    let report = Analyzer::new().analyze(notes);

    println!("Input: {} chars\n", notes.len());
    println!("{report}");

    // The summary is the first two sentences verbatim, the insights are
    // the most repeated content words, and every action item is one of
    // the original sentences.
}
