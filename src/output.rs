//! Colored status lines shown to the user while a project is generated.
use console::style;

/// Announces a step that is about to run.
pub fn step(msg: &str) {
    println!("{} {}", style("\u{203a}").cyan().bold(), style(msg).cyan());
}

pub fn success(msg: &str) {
    println!(
        "{} {}",
        style("\u{2713}").green().bold(),
        style(msg).green()
    );
}

pub fn warning(msg: &str) {
    eprintln!(
        "{} {}",
        style("\u{26a0}").yellow().bold(),
        style(msg).yellow()
    );
}

/// Errors go to stderr and are never suppressed.
pub fn failure(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), style(msg).red());
}
