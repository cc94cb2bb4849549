pub mod batch;
pub mod cli;
pub mod legal_form;
pub mod models;

pub use legal_form::{
    Aliases, CompanyNameNormalizer, LegalForms, NameQuery, NormalizedName, StripMode,
    default_aliases, default_legal_forms, find_alias, strip, strip_middle,
};
