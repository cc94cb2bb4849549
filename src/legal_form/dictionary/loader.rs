//! Load legal-form sets and alias tables from files.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{info, warn};

use crate::legal_form::aliases::Aliases;
use crate::legal_form::dictionary::defaults::{DEFAULT_ALIASES, DEFAULT_LEGAL_FORMS};
use crate::legal_form::index::LegalForms;
use crate::legal_form::tokenize::clean;

/// On-disk format of a dictionary file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    /// One phrase per line; blank lines and `#` comments are skipped.
    Text,
    Json,
    Yaml,
}

impl DictionaryFormat {
    /// Anything that is not `.json`, `.yml` or `.yaml` is read as text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yml") | Some("yaml") => Self::Yaml,
            _ => Self::Text,
        }
    }
}

/// Parse the plain text legal-form format.
pub fn parse_legal_forms_text(content: &str) -> LegalForms {
    let phrases = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    LegalForms::new(phrases.inspect(|phrase| warn_if_not_clean(phrase)))
}

/// Parse a legal-form set in the given format.
pub fn parse_legal_forms(content: &str, format: DictionaryFormat) -> Result<LegalForms> {
    let phrases: Vec<String> = match format {
        DictionaryFormat::Text => return Ok(parse_legal_forms_text(content)),
        DictionaryFormat::Json => serde_json::from_str(content)
            .context("Failed to parse legal forms as a JSON array of strings")?,
        DictionaryFormat::Yaml => serde_yaml::from_str(content)
            .context("Failed to parse legal forms as a YAML sequence of strings")?,
    };
    Ok(LegalForms::new(
        phrases.iter().inspect(|phrase| warn_if_not_clean(phrase)),
    ))
}

/// Parse an alias table in the given format.
pub fn parse_aliases(content: &str, format: DictionaryFormat) -> Result<Aliases> {
    match format {
        DictionaryFormat::Json => Aliases::from_json_str(content),
        DictionaryFormat::Yaml => Aliases::from_yaml_str(content),
        DictionaryFormat::Text => bail!("Alias tables must be JSON or YAML"),
    }
}

/// Load a legal-form set from `path`.
pub fn load_legal_forms(path: &Path) -> Result<LegalForms> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read legal forms from {:?}", path))?;
    let forms = parse_legal_forms(&content, DictionaryFormat::from_path(path))
        .with_context(|| format!("Invalid legal forms file {:?}", path))?;
    info!("Loaded {} legal forms from {:?}", forms.len(), path);
    Ok(forms)
}

/// Load an alias table from `path`.
pub fn load_aliases(path: &Path) -> Result<Aliases> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read aliases from {:?}", path))?;
    let aliases = parse_aliases(&content, DictionaryFormat::from_path(path))
        .with_context(|| format!("Invalid alias file {:?}", path))?;
    info!("Loaded {} aliases from {:?}", aliases.len(), path);
    Ok(aliases)
}

fn warn_if_not_clean(phrase: &str) {
    let cleaned = clean(phrase);
    if cleaned != phrase {
        warn!("Legal form {:?} is not in cleaned form, using {:?}", phrase, cleaned);
    }
}

/// Where to load each dictionary from; unset sources use the embedded
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct DictionarySources {
    pub legal_forms: Option<PathBuf>,
    pub aliases: Option<PathBuf>,
}

/// Loaded dictionaries, borrowing the embedded defaults where possible.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    pub legal_forms: Cow<'static, LegalForms>,
    pub aliases: Cow<'static, Aliases>,
}

impl DictionarySources {
    pub fn load(&self) -> Result<Dictionaries> {
        let legal_forms = match &self.legal_forms {
            Some(path) => Cow::Owned(load_legal_forms(path)?),
            None => Cow::Borrowed(&*DEFAULT_LEGAL_FORMS),
        };
        let aliases = match &self.aliases {
            Some(path) => Cow::Owned(load_aliases(path)?),
            None => Cow::Borrowed(&*DEFAULT_ALIASES),
        };
        Ok(Dictionaries {
            legal_forms,
            aliases,
        })
    }
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self {
            legal_forms: Cow::Borrowed(&*DEFAULT_LEGAL_FORMS),
            aliases: Cow::Borrowed(&*DEFAULT_ALIASES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DictionaryFormat::from_path(Path::new("a.json")), DictionaryFormat::Json);
        assert_eq!(DictionaryFormat::from_path(Path::new("a.YAML")), DictionaryFormat::Yaml);
        assert_eq!(DictionaryFormat::from_path(Path::new("a.yml")), DictionaryFormat::Yaml);
        assert_eq!(DictionaryFormat::from_path(Path::new("a.txt")), DictionaryFormat::Text);
        assert_eq!(DictionaryFormat::from_path(Path::new("forms")), DictionaryFormat::Text);
    }

    #[test]
    fn test_parse_legal_forms_text_skips_comments() {
        let forms = parse_legal_forms_text("# header\n\nllc\n  gmbh  \n#kg\n");
        assert_eq!(forms.len(), 2);
        assert!(forms.contains("llc"));
        assert!(forms.contains("gmbh"));
        assert!(!forms.contains("kg"));
    }

    #[test]
    fn test_parse_legal_forms_cleans_entries() {
        let forms = parse_legal_forms(r#"["L.L.C.", "Pvt. Ltd."]"#, DictionaryFormat::Json).unwrap();
        assert!(forms.contains("llc"));
        assert!(forms.contains("pvtltd"));
    }

    #[test]
    fn test_parse_legal_forms_yaml() {
        let forms = parse_legal_forms("- ag\n- kg\n", DictionaryFormat::Yaml).unwrap();
        assert_eq!(forms.len(), 2);
    }

    #[test]
    fn test_parse_legal_forms_invalid_json() {
        let result = parse_legal_forms(r#"{"llc": true}"#, DictionaryFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_aliases_rejects_text() {
        assert!(parse_aliases("limited ltd", DictionaryFormat::Text).is_err());
    }

    #[test]
    fn test_load_legal_forms_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forms.txt");
        fs::write(&path, "llc\nkg\n").unwrap();

        let forms = load_legal_forms(&path).unwrap();
        assert_eq!(forms.strip("Example KG"), ("Example".to_string(), "KG".to_string()));
    }

    #[test]
    fn test_load_aliases_from_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("aliases.yaml");
        fs::write(&path, "'*':\n  limited: ltd\nKY:\n  limited: kyltd\n").unwrap();

        let aliases = load_aliases(&path).unwrap();
        assert_eq!(aliases.find("KY", "Limited"), "kyltd");
        assert_eq!(aliases.find("GB", "Limited"), "ltd");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_aliases(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.json"));
    }

    #[test]
    fn test_sources_default_to_embedded() {
        let dictionaries = DictionarySources::default().load().unwrap();
        assert!(matches!(dictionaries.legal_forms, Cow::Borrowed(_)));
        assert!(matches!(dictionaries.aliases, Cow::Borrowed(_)));
        assert!(!dictionaries.legal_forms.is_empty());
    }

    #[test]
    fn test_sources_override_one_dictionary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forms.json");
        fs::write(&path, r#"["inc"]"#).unwrap();

        let sources = DictionarySources {
            legal_forms: Some(path),
            aliases: None,
        };
        let dictionaries = sources.load().unwrap();
        assert_eq!(dictionaries.legal_forms.len(), 1);
        assert!(matches!(dictionaries.aliases, Cow::Borrowed(_)));
    }
}
