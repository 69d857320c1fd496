// src/record.rs
//
// Serialized record shapes. Key order is part of the contract: downstream
// consumers compare serialized output positionally, so field order is
// fixed at the type level and map patching exists only for keys a later
// stage may have injected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One agency's two-installment obligation. All amounts are rendered
/// currency strings, dates are "MM/DD/YYYY" (or empty when the page gave
/// none).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub installment_amount1: String,
    pub installment_due_date1: String,
    pub installment_delinquent_date1: String,
    pub installment_paid_amount1: String,
    pub installment_un_paid_amount1: String,
    pub installment_amount2: String,
    pub installment_due_date2: String,
    pub installment_delinquent_date2: String,
    pub installment_paid_amount2: String,
    pub installment_un_paid_amount2: String,
}

/// A historical year still carrying a delinquent balance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelinquencyEntry {
    pub payoff_amount: String,
    pub tax_year: String,
}

/// The fully derived representation of one parcel's tax/payment state.
/// `delinquent_notes` is always present and empty here; a downstream
/// enrichment step owns its contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelRecord {
    pub parcel_number: String,
    pub tax_year: String,
    pub agencies: Vec<Agency>,
    pub delinquencies: Vec<DelinquencyEntry>,
    pub delinquent_notes: Vec<String>,
}

/// Top-level envelope of the persisted output format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelEnvelope {
    pub parcels: Vec<ParcelRecord>,
}

/// Relocate `key` to sit immediately after `after`, keeping every other
/// key's relative order. No-op when either key is absent — deleting a
/// key nobody asked to move would lose data.
pub fn move_key_after(map: &mut Map<String, Value>, key: &str, after: &str) {
    if !map.contains_key(after) || !map.contains_key(key) {
        return;
    }
    // Rebuild instead of remove-then-insert: with preserve_order the
    // map's `remove` is a swap_remove, which would shuffle the last key
    // into the removed slot.
    let mut moved = None;
    let entries: Vec<(String, Value)> = std::mem::take(map)
        .into_iter()
        .filter_map(|(k, v)| {
            if k == key {
                moved = Some(v);
                None
            } else {
                Some((k, v))
            }
        })
        .collect();
    for (k, v) in entries {
        let hit = k == after;
        map.insert(k, v);
        if hit {
            if let Some(v) = moved.take() {
                map.insert(s!(key), v);
            }
        }
    }
}

/// Enforce the ordering invariant on one map-like entry: a `taxYear`
/// key, if present, follows `delinquentNotes`.
pub fn order_tax_year(entry: &mut Value) {
    if let Value::Object(map) = entry {
        move_key_after(map, "taxYear", "delinquentNotes");
    }
}
