// src/dataset.rs
//
// Pairs raw parcel blocks with the records a previous Output run
// persisted, producing instruction-tuning examples. The pairing is
// positional: the Nth block goes with the Nth record, so both inputs
// must come from the same scrape in the same order.

use serde::Serialize;
use serde_json::Value;

use crate::assemble::apply_agency_key_order;
use crate::core::text::single_line;
use crate::record::order_tax_year;
use crate::segment::RawParcelBlock;

/// One supervised example: empty instruction, single-line raw text as
/// input, the persisted envelope as output.
#[derive(Clone, Debug, Serialize)]
pub struct DatasetExample {
    pub instruction: String,
    pub input: String,
    pub output: Value,
}

/// taxYear of the first parcel in the envelope; any missing piece
/// degrades to an empty string.
fn probe_tax_year(output: &Value) -> String {
    output
        .get("parcels")
        .and_then(Value::as_array)
        .and_then(|p| p.first())
        .and_then(|p| p.get("taxYear"))
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_default()
}

/// Zip blocks with persisted envelopes. A length mismatch is logged and
/// the zip truncates to the shorter side — there is no correlation key
/// in the source data to match on.
pub fn build(blocks: &[RawParcelBlock], outputs: Vec<Value>) -> Vec<DatasetExample> {
    if blocks.len() != outputs.len() {
        loge!(
            "dataset: {} raw block(s) vs {} output record(s); pairing truncates",
            blocks.len(),
            outputs.len()
        );
    }

    let mut examples = Vec::with_capacity(blocks.len().min(outputs.len()));
    for (raw, mut output) in blocks.iter().zip(outputs) {
        let tax_year = probe_tax_year(&output);
        logd!("dataset: example {} taxYear='{}'", examples.len() + 1, tax_year);

        if let Some(parcels) = output.get_mut("parcels").and_then(Value::as_array_mut) {
            for parcel in parcels {
                apply_agency_key_order(parcel);
                order_tax_year(parcel);
            }
        }

        examples.push(DatasetExample {
            instruction: s!(),
            input: single_line(raw.as_str()),
            output,
        });
    }
    examples
}

/// Serialize the example list with two-space indentation. serde_json
/// leaves non-ASCII characters unescaped, as the consumers expect.
pub fn render(examples: &[DatasetExample]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(examples)
}
