//! Checks the bundled dictionaries for entries the matcher can never use.
//!
//! Run from the repository root:
//! `cargo run -p legalform-xtask --bin validate-dictionaries`

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use legalform::legal_form::AliasTable;
use legalform::legal_form::tokenize::{alias_key, clean, fold_diacritics};

#[derive(Parser, Debug)]
#[command(about = "Validate the legal-form list and the alias table")]
struct Args {
    #[arg(long, default_value = "resources/legal_forms.txt")]
    legal_forms: PathBuf,

    #[arg(long, default_value = "resources/aliases.json")]
    aliases: PathBuf,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let forms_content = fs::read_to_string(&args.legal_forms)
        .with_context(|| format!("Failed to read {:?}", args.legal_forms))?;
    let aliases_content = fs::read_to_string(&args.aliases)
        .with_context(|| format!("Failed to read {:?}", args.aliases))?;
    let table: AliasTable = serde_json::from_str(&aliases_content)
        .with_context(|| format!("Failed to parse {:?}", args.aliases))?;

    let (phrases, mut problems) = check_legal_forms(&forms_content);
    problems.extend(check_aliases(&table, &phrases));

    if problems.is_empty() {
        println!(
            "OK: {} legal forms, {} alias tables",
            phrases.len(),
            table.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for problem in &problems {
        eprintln!("{}", problem);
    }
    eprintln!("{} problem(s) found", problems.len());
    Ok(ExitCode::FAILURE)
}

/// Returns the phrases of the list and the problems found in it.
fn check_legal_forms(content: &str) -> (HashSet<String>, Vec<String>) {
    let mut phrases = HashSet::new();
    let mut problems = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cleaned = clean(line);
        if cleaned != line {
            problems.push(format!(
                "legal forms line {}: {:?} is not cleaned, expected {:?}",
                index + 1,
                line,
                cleaned
            ));
        }
        if cleaned.is_empty() {
            continue;
        }
        if !phrases.insert(cleaned) {
            problems.push(format!("legal forms line {}: duplicate {:?}", index + 1, line));
        }
    }

    (phrases, problems)
}

fn check_aliases(table: &AliasTable, phrases: &HashSet<String>) -> Vec<String> {
    let reachable: HashSet<String> = phrases.iter().map(|p| fold_diacritics(p)).collect();
    let mut problems = Vec::new();

    let sorted: BTreeMap<&String, BTreeMap<&String, &String>> = table
        .iter()
        .map(|(country, entries)| (country, entries.iter().collect()))
        .collect();

    for (country, entries) in sorted {
        if *country != country.trim().to_uppercase() {
            problems.push(format!("aliases: country {:?} is not an upper-case code", country));
        }
        for (key, alias) in entries {
            let (_, canonical) = alias_key(key);
            if canonical != *key {
                problems.push(format!(
                    "aliases[{}]: key {:?} is not canonical, expected {:?}",
                    country, key, canonical
                ));
            } else if !reachable.contains(key.as_str()) {
                problems.push(format!(
                    "aliases[{}]: key {:?} is not a known legal form",
                    country, key
                ));
            }
            if alias.trim().is_empty() {
                problems.push(format!("aliases[{}]: key {:?} has an empty alias", country, key));
            }
        }
    }

    problems
}
