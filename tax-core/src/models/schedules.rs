//! Fixed 2009 federal rate schedules, one per filing status.

use rust_decimal_macros::dec;

use super::{BracketTable, FilingStatus, TaxBracket};

static SINGLE: [TaxBracket; 6] = [
    TaxBracket::bounded(dec!(8350), dec!(0.10)),
    TaxBracket::bounded(dec!(33950), dec!(0.15)),
    TaxBracket::bounded(dec!(82250), dec!(0.25)),
    TaxBracket::bounded(dec!(171550), dec!(0.28)),
    TaxBracket::bounded(dec!(372950), dec!(0.33)),
    TaxBracket::unbounded(dec!(0.35)),
];

static MARRIED_JOINTLY: [TaxBracket; 6] = [
    TaxBracket::bounded(dec!(16700), dec!(0.10)),
    TaxBracket::bounded(dec!(67900), dec!(0.15)),
    TaxBracket::bounded(dec!(137050), dec!(0.25)),
    TaxBracket::bounded(dec!(208850), dec!(0.28)),
    TaxBracket::bounded(dec!(372950), dec!(0.33)),
    TaxBracket::unbounded(dec!(0.35)),
];

static MARRIED_SEPARATELY: [TaxBracket; 6] = [
    TaxBracket::bounded(dec!(8350), dec!(0.10)),
    TaxBracket::bounded(dec!(33950), dec!(0.15)),
    TaxBracket::bounded(dec!(68525), dec!(0.25)),
    TaxBracket::bounded(dec!(104425), dec!(0.28)),
    TaxBracket::bounded(dec!(186475), dec!(0.33)),
    TaxBracket::unbounded(dec!(0.35)),
];

static HEAD_OF_HOUSEHOLD: [TaxBracket; 6] = [
    TaxBracket::bounded(dec!(11950), dec!(0.10)),
    TaxBracket::bounded(dec!(45500), dec!(0.15)),
    TaxBracket::bounded(dec!(117450), dec!(0.25)),
    TaxBracket::bounded(dec!(190200), dec!(0.28)),
    TaxBracket::bounded(dec!(372950), dec!(0.33)),
    TaxBracket::unbounded(dec!(0.35)),
];

/// Returns the bracket schedule for `status`, lowest bracket first.
pub fn bracket_table(status: FilingStatus) -> BracketTable {
    match status {
        FilingStatus::Single => &SINGLE,
        FilingStatus::MarriedJointly => &MARRIED_JOINTLY,
        FilingStatus::MarriedSeparately => &MARRIED_SEPARATELY,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::validate_table;

    #[test]
    fn every_schedule_is_well_formed() {
        for status in FilingStatus::ALL {
            assert_eq!(validate_table(bracket_table(status)), Ok(()), "{status}");
        }
    }

    #[test]
    fn every_schedule_starts_at_ten_percent_and_tops_out_at_thirty_five() {
        for status in FilingStatus::ALL {
            let table = bracket_table(status);

            assert_eq!(table[0].rate, dec!(0.10));
            assert_eq!(table[table.len() - 1], TaxBracket::unbounded(dec!(0.35)));
        }
    }

    #[test]
    fn head_of_household_first_limit() {
        let table = bracket_table(FilingStatus::HeadOfHousehold);

        assert_eq!(table[0].upper_limit, Some(dec!(11950)));
        assert_eq!(table[1].upper_limit, Some(dec!(45500)));
    }

    #[test]
    fn married_separately_differs_from_single_above_fifteen_percent() {
        let single = bracket_table(FilingStatus::Single);
        let separate = bracket_table(FilingStatus::MarriedSeparately);

        assert_eq!(single[..2], separate[..2]);
        assert_eq!(separate[2].upper_limit, Some(dec!(68525)));
        assert_eq!(single[2].upper_limit, Some(dec!(82250)));
    }
}
