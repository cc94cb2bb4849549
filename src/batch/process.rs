use crate::batch::{ProcessResult, Task};
use crate::legal_form::aliases::canonical_country;
use crate::legal_form::{CompanyNameNormalizer, Dictionaries};
use crate::models::{AliasRecord, OutputRecord, StripMiddleRecord, StripRecord};
use anyhow::Result;
use log::info;
use rayon::prelude::*;
use std::io::Write;

/// Run `task` over every input in parallel.
pub fn process(task: &Task, dictionaries: &Dictionaries, inputs: &[String]) -> ProcessResult {
    let normalizer = normalizer_for(task, dictionaries);

    let records: Vec<OutputRecord> = inputs
        .par_iter()
        .map(|input| process_input(task, dictionaries, &normalizer, input))
        .collect();

    let legal_form_count = records.iter().filter(|r| has_legal_form(r)).count();
    info!(
        "Found a legal form in {} of {} inputs",
        legal_form_count,
        records.len()
    );

    ProcessResult {
        records,
        legal_form_count,
    }
}

fn normalizer_for<'d>(task: &Task, dictionaries: &'d Dictionaries) -> CompanyNameNormalizer<'d> {
    let normalizer = CompanyNameNormalizer::new(&dictionaries.legal_forms, &dictionaries.aliases);
    match task {
        Task::Normalize {
            country: Some(country),
            mode,
        } => normalizer.with_mode(*mode).with_default_country(country.clone()),
        Task::Normalize { country: None, mode } => normalizer.with_mode(*mode),
        _ => normalizer,
    }
}

fn process_input(
    task: &Task,
    dictionaries: &Dictionaries,
    normalizer: &CompanyNameNormalizer<'_>,
    input: &str,
) -> OutputRecord {
    match task {
        Task::Strip => {
            let (company, legal_form) = dictionaries.legal_forms.strip(input);
            OutputRecord::Strip(StripRecord {
                input: input.to_string(),
                company,
                legal_form,
            })
        }
        Task::StripMiddle => {
            let (company, legal_form, trailing) = dictionaries.legal_forms.strip_middle(input);
            OutputRecord::StripMiddle(StripMiddleRecord {
                input: input.to_string(),
                company,
                legal_form,
                trailing,
            })
        }
        Task::Alias { country } => OutputRecord::Alias(AliasRecord {
            country: canonical_country(country),
            legal_form: input.to_string(),
            alias: dictionaries.aliases.find(country, input),
        }),
        Task::Normalize { .. } => OutputRecord::Normalize(normalizer.normalize(input, None).into()),
    }
}

fn has_legal_form(record: &OutputRecord) -> bool {
    match record {
        OutputRecord::Strip(r) => !r.legal_form.is_empty(),
        OutputRecord::StripMiddle(r) => !r.legal_form.is_empty(),
        OutputRecord::Alias(r) => !r.alias.is_empty(),
        OutputRecord::Normalize(r) => !r.name.legal_form.is_empty(),
    }
}

/// Write `records` as JSON lines.
pub fn write_json_lines<W: Write>(mut writer: W, records: &[OutputRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
