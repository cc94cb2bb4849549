mod input;
mod process;

use crate::legal_form::StripMode;
use crate::models::OutputRecord;

/// The operation applied to every input name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Strip,
    StripMiddle,
    Alias {
        country: String,
    },
    Normalize {
        country: Option<String>,
        mode: StripMode,
    },
}

pub struct ProcessResult {
    /// One record per input, in input order.
    pub records: Vec<OutputRecord>,
    pub legal_form_count: usize,
}

pub use self::input::{read_inputs, read_lines};
pub use self::process::{process, write_json_lines};
