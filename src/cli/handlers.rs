// src/cli/handlers.rs
use anyhow::Context;
use console::style;
use serde::Serialize;

use passmeter::core::Config;
use passmeter::generators::PasswordGenerator;
use passmeter::models::{Complexity, GeneratedPassword, PasswordPolicy, ScoreResult};
use passmeter::strength::{self, StrengthReport};

use super::commands::GenerateArgs;
use super::menu;

// Translate command line flags into a policy, falling back to the configured defaults
pub fn build_policy(args: &GenerateArgs, config: &Config) -> PasswordPolicy {
    let length = args.length.unwrap_or(config.default_password_length);

    if args.preset {
        return PasswordPolicy::recommended().with_length(length);
    }

    let mut policy = PasswordPolicy::new()
        .with_length(length)
        .with_lowercase(args.lower)
        .with_uppercase(args.upper)
        .with_digits(args.digits)
        .with_symbols(args.symbols)
        .with_avoid_ambiguous(args.avoid_ambiguous || config.default_avoid_ambiguous)
        .with_force_every_used_class(args.force_every || config.default_force_every_class);

    if let Some(count) = args.min_lower {
        policy = policy.with_min_lowercase(count);
    }
    if let Some(count) = args.min_upper {
        policy = policy.with_min_uppercase(count);
    }
    if let Some(count) = args.min_digits {
        policy = policy.with_min_digits(count);
    }
    if let Some(count) = args.min_symbols {
        policy = policy.with_min_symbols(count);
    }

    policy
}

pub fn handle_generate(args: &GenerateArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let policy = build_policy(args, config);
    log::debug!("Generating with policy: {:?}", policy);

    let mut generator = PasswordGenerator::new();

    if args.continuous {
        return menu::run_continuous(&mut generator, &policy, args.score, json);
    }

    let generated = generate_one(&mut generator, &policy, args.score)?;
    print_generated(&generated, json)
}

pub fn generate_one(
    generator: &mut PasswordGenerator,
    policy: &PasswordPolicy,
    with_score: bool,
) -> anyhow::Result<GeneratedPassword> {
    let password = generator.generate_password(policy)?;

    let strength = if with_score {
        Some(
            generator
                .analyze_password_strength(&password)
                .context("Failed to score generated password")?,
        )
    } else {
        None
    };

    Ok(GeneratedPassword { password, strength })
}

pub fn print_generated(generated: &GeneratedPassword, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(generated)?;
        return Ok(());
    }

    match &generated.strength {
        Some(result) => println!("{}  {}", generated.password, format_result(result)),
        None => println!("{}", generated.password),
    }
    Ok(())
}

pub fn handle_score(password: &str, breakdown: bool, json: bool) -> anyhow::Result<()> {
    let report = strength::analyze(password)?;

    if json {
        if breakdown {
            print_json(&report)?;
        } else {
            print_json(&report.result())?;
        }
        return Ok(());
    }

    println!("Strength: {}", format_result(&report.result()));
    if breakdown {
        print_breakdown(&report);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_result(result: &ScoreResult) -> String {
    let tier = result.tier.to_string();
    let tier = match result.tier {
        Complexity::TooWeak | Complexity::Weak => style(tier).red(),
        Complexity::Good => style(tier).yellow(),
        Complexity::Strong | Complexity::VeryStrong => style(tier).green(),
    };
    format!("{}/100 ({})", result.score, tier)
}

fn print_breakdown(report: &StrengthReport) {
    let rows: [(&str, String); 18] = [
        ("Length", report.length.to_string()),
        ("Uppercase letters", report.uppercase.to_string()),
        ("Lowercase letters", report.lowercase.to_string()),
        ("Digits", report.digits.to_string()),
        ("Symbols", report.symbols.to_string()),
        ("Middle digits or symbols", report.middle_digits_or_symbols.to_string()),
        ("Letters only", report.letters_only.to_string()),
        ("Digits only", report.digits_only.to_string()),
        ("Repeated characters", report.repeated_characters.to_string()),
        ("Repeat penalty", report.repeat_penalty.to_string()),
        ("Consecutive uppercase", report.consecutive_uppercase.to_string()),
        ("Consecutive lowercase", report.consecutive_lowercase.to_string()),
        ("Consecutive digits", report.consecutive_digits.to_string()),
        ("Consecutive symbols", report.consecutive_symbols.to_string()),
        ("Sequential letters", report.sequential_letters.to_string()),
        ("Sequential digits", report.sequential_digits.to_string()),
        ("Sequential symbols", report.sequential_symbols.to_string()),
        ("Requirements met", format!("{}/5", report.requirements_met)),
    ];

    for (label, value) in rows.iter() {
        println!("  {:<26} {}", label, value);
    }
}
