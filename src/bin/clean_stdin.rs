//! Simple CLI that reads HTML from stdin and writes the cleaned document to stdout.

use rs_article_cleaner::clean_html;
use std::io::{self, Read};

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    println!("{}", clean_html(&html));
}
