// src/parse/reconcile.rs
//
// Derives per-installment paid/unpaid amounts from the current year's
// totals. The county's rule table is reproduced literally, including its
// quirks; see the tests pinning them down.

use super::tax_history::CurrentYearTotals;
use crate::core::money::round2;

/// The payment situations the rule table covers. The four rules jointly
/// exhaust (payments == totalTax | payments < totalTax) × (delinquency
/// == 0 | delinquency > 0); payments above the annual tax match no rule
/// and derive all-zero paid/unpaid amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    /// payments == totalTax, no delinquency
    PaidInFull,
    /// payments < totalTax, no delinquency
    Underpaid,
    /// payments < totalTax, delinquency owed
    UnderpaidDelinquent,
    /// payments == totalTax, delinquency owed
    PaidButDelinquent,
    /// payments > totalTax; uncovered by the rule table
    Overpaid,
}

pub fn classify(t: &CurrentYearTotals) -> PaymentStatus {
    let delinquent = t.delinquency > 0.0;
    if t.payments == t.total_tax {
        if delinquent { PaymentStatus::PaidButDelinquent } else { PaymentStatus::PaidInFull }
    } else if t.payments < t.total_tax {
        if delinquent { PaymentStatus::UnderpaidDelinquent } else { PaymentStatus::Underpaid }
    } else {
        PaymentStatus::Overpaid
    }
}

/// Derived installment amounts, rounded to cents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reconciliation {
    pub installment1: f64,
    pub installment2: f64,
    pub paid1: f64,
    pub paid2: f64,
    pub unpaid1: f64,
    pub unpaid2: f64,
}

/// Apply the rule table. The two installments are always an exact half
/// split of the total tax, whatever was actually paid.
pub fn reconcile(t: &CurrentYearTotals) -> Reconciliation {
    let installment1 = round2(t.total_tax / 2.0);
    let installment2 = installment1;

    let (mut paid1, mut paid2) = (0.0f64, 0.0f64);
    let (mut unpaid1, mut unpaid2) = (0.0f64, 0.0f64);

    match classify(t) {
        PaymentStatus::PaidInFull => {
            paid1 = installment1;
            paid2 = installment2;
        }
        PaymentStatus::Underpaid => {
            // Matches the county worksheet: the first installment counts
            // as paid and the whole shortfall lands on the second;
            // unpaid1 stays zero. paid2 is zero at this point, so
            // unpaid2 is the full second installment.
            paid1 = installment1;
            unpaid2 = installment2 - paid2;
        }
        PaymentStatus::UnderpaidDelinquent | PaymentStatus::PaidButDelinquent => {
            paid1 = t.spring;
            paid2 = t.fall;
            unpaid1 = (installment1 - paid1).max(0.0);
            unpaid2 = (installment2 - paid2).max(0.0);
        }
        PaymentStatus::Overpaid => {}
    }

    Reconciliation {
        installment1,
        installment2,
        paid1: round2(paid1),
        paid2: round2(paid2),
        unpaid1: round2(unpaid1),
        unpaid2: round2(unpaid2),
    }
}
