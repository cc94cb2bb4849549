use serde::Serialize;

use crate::legal_form::NormalizedName;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StripRecord {
    pub input: String,
    pub company: String,
    pub legal_form: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StripMiddleRecord {
    pub input: String,
    pub company: String,
    pub legal_form: String,
    pub trailing: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub country: String,
    pub legal_form: String,
    pub alias: String,
}

/// A [`NormalizedName`] together with its record-linkage key.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NormalizeRecord {
    #[serde(flatten)]
    pub name: NormalizedName,
    pub key: String,
}

impl From<NormalizedName> for NormalizeRecord {
    fn from(name: NormalizedName) -> Self {
        let key = name.key();
        Self { name, key }
    }
}

/// One line of command output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum OutputRecord {
    Strip(StripRecord),
    StripMiddle(StripMiddleRecord),
    Alias(AliasRecord),
    Normalize(NormalizeRecord),
}
