mod output;

pub use output::{AliasRecord, NormalizeRecord, OutputRecord, StripMiddleRecord, StripRecord};
