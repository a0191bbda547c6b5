mod filing_status;
mod schedules;
mod tax_bracket;

pub use filing_status::FilingStatus;
pub use schedules::bracket_table;
pub use tax_bracket::{BracketTable, TaxBracket, validate_table};
