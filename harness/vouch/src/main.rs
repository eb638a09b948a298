//! Vouch CLI
//!
//! Runs the demo test modules compiled into this binary.

use vouch::Catalog;

#[path = "../demos/example.test.rs"]
mod example;
#[path = "../demos/matchers.test.rs"]
mod matchers;

fn main() {
    let catalog = Catalog::new()
        .module("example", example::register)
        .module("matchers", matchers::register);

    let code = vouch::cli::main_with_args(std::env::args().skip(1), &catalog);
    std::process::exit(code);
}
