// src/assemble.rs
//
// Composes the per-section parsers into one ParcelRecord.

use serde_json::Value;

use crate::config::consts::{DUE_DATES_LABEL, PAYMENT_HISTORY_LABEL, TAX_HISTORY_LABEL};
use crate::core::money::fmt_money;
use crate::core::text::first_year4;
use crate::parse::{due_dates, fields, reconcile, tax_history};
use crate::record::{self, Agency, ParcelRecord};
use crate::segment::RawParcelBlock;

/// Derive the structured record for one raw block. Total: missing
/// sections degrade to empty strings and zero amounts, never an error.
pub fn assemble(block: &RawParcelBlock) -> ParcelRecord {
    let text = block.as_str();

    let parcel_number = fields::parcel_number(text);
    let payment_history = fields::section_after(text, PAYMENT_HISTORY_LABEL);
    let tax_year = first_year4(payment_history).map(String::from).unwrap_or_default();

    let tax_section = fields::section_after(text, TAX_HISTORY_LABEL);
    let totals = tax_history::parse_current_year(tax_section);
    let money = reconcile::reconcile(&totals);
    let delinquencies = tax_history::parse_delinquencies(tax_section);

    let dates = due_dates::resolve(fields::section_after(text, DUE_DATES_LABEL));

    logd!(
        "assemble: parcel='{}' taxYear='{}' totalTax={} payments={} delinquencies={}",
        parcel_number, tax_year, totals.total_tax, totals.payments, delinquencies.len()
    );

    ParcelRecord {
        parcel_number,
        tax_year,
        agencies: vec![Agency {
            installment_amount1: fmt_money(money.installment1),
            installment_due_date1: dates.due1,
            installment_delinquent_date1: dates.delinquent1,
            installment_paid_amount1: fmt_money(money.paid1),
            installment_un_paid_amount1: fmt_money(money.unpaid1),
            installment_amount2: fmt_money(money.installment2),
            installment_due_date2: dates.due2,
            installment_delinquent_date2: dates.delinquent2,
            installment_paid_amount2: fmt_money(money.paid2),
            installment_un_paid_amount2: fmt_money(money.unpaid2),
        }],
        delinquencies,
        delinquent_notes: Vec::new(),
    }
}

/// Enforce the agency key-order invariant on an already-serialized
/// record: a later stage may have injected `taxYear` into agency
/// entries, and it must end up immediately after `delinquentNotes`.
/// Entries without the key are left untouched.
pub fn apply_agency_key_order(parcel: &mut Value) {
    if let Some(agencies) = parcel.get_mut("agencies").and_then(Value::as_array_mut) {
        for entry in agencies {
            record::order_tax_year(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(text: &str) -> RawParcelBlock {
        RawParcelBlock(s!(text))
    }

    fn sample() -> RawParcelBlock {
        block(
            "Property Information:\n\
             Parcel Number\n02-07-13-428-001.000-074\n\
             Owner\nDoe John\n\
             Payment History:\nSpring 2024 Payment received\n\
             Tax History:\n\
             Year Spring Fall Delinquency Total Payments\n\
             (most recent first)\n\
             2024\n$661.02 $661.02 $0.00 $1,322.04 $1,322.04\n\
             2023 $650.00 $650.00 $75.00 $1,300.00 $1,225.00\n\
             Due Dates:\nMay 12, 2025\nNovember 10, 2025\n",
        )
    }

    #[test]
    fn full_record_paid_in_full() {
        let rec = assemble(&sample());
        assert_eq!(rec.parcel_number, "02-07-13-428-001.000-074");
        assert_eq!(rec.tax_year, "2024");
        assert_eq!(rec.agencies.len(), 1);
        let a = &rec.agencies[0];
        assert_eq!(a.installment_amount1, "$661.02");
        assert_eq!(a.installment_amount2, "$661.02");
        assert_eq!(a.installment_paid_amount1, "$661.02");
        assert_eq!(a.installment_paid_amount2, "$661.02");
        assert_eq!(a.installment_un_paid_amount1, "$0.00");
        assert_eq!(a.installment_un_paid_amount2, "$0.00");
        assert_eq!(a.installment_due_date1, "05/12/2025");
        assert_eq!(a.installment_delinquent_date1, "05/13/2025");
        assert_eq!(a.installment_due_date2, "11/10/2025");
        assert_eq!(a.installment_delinquent_date2, "11/11/2025");
        assert_eq!(rec.delinquencies.len(), 1);
        assert_eq!(rec.delinquencies[0].tax_year, "2023");
        assert_eq!(rec.delinquencies[0].payoff_amount, "$75.00");
        assert!(rec.delinquent_notes.is_empty());
    }

    #[test]
    fn empty_block_degrades_to_defaults() {
        let rec = assemble(&block("nothing recognizable"));
        assert_eq!(rec.parcel_number, "");
        assert_eq!(rec.tax_year, "");
        let a = &rec.agencies[0];
        assert_eq!(a.installment_amount1, "$0.00");
        assert_eq!(a.installment_due_date1, "");
        assert_eq!(a.installment_delinquent_date1, "");
        assert!(rec.delinquencies.is_empty());
    }

    #[test]
    fn tax_year_comes_from_payment_history() {
        // the year in the payment-history section wins, not the tax table's
        let rec = assemble(&block(
            "Parcel Number\nX\nPayment History:\nFall 2019 payment\nTax History:\n2024\n$1.00 $1.00 $0.00 $2.00 $2.00\n",
        ));
        assert_eq!(rec.tax_year, "2019");
    }

    #[test]
    fn injected_agency_tax_year_is_relocated() {
        let mut parcel = json!({
            "agencies": [
                {"taxYear": "2024", "installmentAmount1": "$1.00", "delinquentNotes": []},
                {"installmentAmount1": "$2.00"}
            ]
        });
        apply_agency_key_order(&mut parcel);
        let keys: Vec<&str> = parcel["agencies"][0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["installmentAmount1", "delinquentNotes", "taxYear"]);
        assert_eq!(parcel["agencies"][1]["installmentAmount1"], "$2.00");
    }
}
