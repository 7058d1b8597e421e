use crate::Mode;
use anyhow::{Context, Result};
use console::Style;
use rpassword::read_password;
use std::io::{self, Write};
use sylpass::generator::{MAX_LENGTH, MIN_LENGTH, SEPARATOR};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Retry,
}

pub struct PasswordStats {
    pub length: usize,
    pub digits: usize,
    pub uppercase: usize,
    pub separators: usize,
}

impl PasswordStats {
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count(),
            digits: password.chars().filter(|c| c.is_ascii_digit()).count(),
            uppercase: password.chars().filter(|c| c.is_uppercase()).count(),
            separators: password.chars().filter(|c| *c == SEPARATOR).count(),
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

pub fn parse_mode(input: &str) -> Option<Mode> {
    match input.trim().to_lowercase().as_str() {
        "a" | "auto" | "automatic" => Some(Mode::Auto),
        "c" | "custom" => Some(Mode::Custom),
        _ => None,
    }
}

/// Any integer is accepted; the range is checked by the generator.
pub fn parse_length(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

pub fn parse_decision(input: &str) -> Option<Decision> {
    match input.trim().to_lowercase().as_str() {
        "" | "ok" | "ok!" | "y" | "yes" => Some(Decision::Accept),
        "r" | "retry" | "repeat" => Some(Decision::Retry),
        _ => None,
    }
}

/// NFC normalises and strips the line terminator. Other whitespace is kept
/// so that it reaches validation.
pub fn normalize_input(s: &str) -> String {
    s.trim_end_matches(['\n', '\r']).nfc().collect()
}

fn read_line() -> Result<String> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    if read == 0 {
        anyhow::bail!("Input closed");
    }

    Ok(input)
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_line()
}

pub fn greet() {
    println!("Hello! I will pick a password for you.");
    println!("Automatic mode builds one from syllables, custom mode starts it with a sequence of yours.");
    println!();
}

pub fn prompt_mode() -> Result<Mode> {
    loop {
        let input = prompt("Mode [a]utomatic or [c]ustom")?;
        if let Some(mode) = parse_mode(&input) {
            return Ok(mode);
        }
        println!("Please answer \"a\" or \"c\".");
    }
}

pub fn prompt_length() -> Result<i64> {
    let label = format!(
        "Total password length from {} to {} (inclusive)",
        MIN_LENGTH, MAX_LENGTH
    );

    loop {
        let input = prompt(&label)?;
        match parse_length(&input) {
            Some(length) => return Ok(length),
            None => {
                tracing::debug!("non-numeric length entered");
                println!("Please enter the length using digits.");
            }
        }
    }
}

pub fn prompt_sequence(echo: bool) -> Result<Zeroizing<String>> {
    println!("Enter a sequence no longer than the total password length,");
    println!("for example your favourite brand. Use latin letters and/or digits.");

    let raw = if echo {
        Zeroizing::new(prompt("Sequence")?)
    } else {
        print!("Sequence (hidden): ");
        io::stdout().flush()?;
        Zeroizing::new(read_password().context("Failed to read sequence")?)
    };

    Ok(Zeroizing::new(normalize_input(&raw)))
}

pub fn prompt_decision() -> Result<Decision> {
    loop {
        let input = prompt("[OK] or [r]etry")?;
        if let Some(decision) = parse_decision(&input) {
            return Ok(decision);
        }
        println!("Please answer \"ok\" or \"r\".");
    }
}

pub fn display_password(output: &Zeroizing<String>, mode: Mode, options: &DisplayOptions) {
    if options.quiet {
        println!("{}", &**output);
        return;
    }

    println!("\nYour password:\n\n{}\n", &**output);
    display_stats(&PasswordStats::of(output), mode, options);
}

pub fn display_rejection(message: &str, options: &DisplayOptions) {
    if options.quiet {
        eprintln!("{}", message);
        return;
    }

    let style = if options.color_support {
        Style::new().yellow()
    } else {
        Style::new()
    };
    let (_, check_warn) = get_status_symbols(options.unicode_support);

    println!(
        "\n{} {}\n",
        style.apply_to(format!("[{}]", check_warn)),
        style.apply_to(message)
    );
}

fn display_stats(stats: &PasswordStats, mode: Mode, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    let styled = |ok: bool| {
        if !options.color_support {
            Style::new()
        } else if ok {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    };

    let digit_ok = stats.digits > 0;
    let upper_ok = stats.uppercase > 0;

    println!("Stats:");
    println!(
        "  {} Length     {} {}",
        branch,
        stats.length,
        if stats.length == 1 { "char" } else { "chars" }
    );
    println!(
        "  {} Digits     {} {}",
        branch,
        styled(digit_ok).apply_to(format!("[{}]", if digit_ok { check_ok } else { check_warn })),
        styled(digit_ok).apply_to(stats.digits)
    );
    println!(
        "  {} Capitals   {} {}",
        branch,
        styled(upper_ok).apply_to(format!("[{}]", if upper_ok { check_ok } else { check_warn })),
        styled(upper_ok).apply_to(stats.uppercase)
    );
    println!("  {} Separators {}", branch, stats.separators);
    println!(
        "  {} Mode       {}",
        last,
        match mode {
            Mode::Auto => "automatic",
            Mode::Custom => "custom",
        }
    );
    println!();
}
