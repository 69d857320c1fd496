// src/config/consts.rs

// Section labels as they appear in the scraped page text
pub const RECORD_START: &str = "Property Information:";
pub const PARCEL_NUMBER_LABEL: &str = "Parcel Number";
pub const PAYMENT_HISTORY_LABEL: &str = "Payment History:";
pub const TAX_HISTORY_LABEL: &str = "Tax History:";
pub const DUE_DATES_LABEL: &str = "Due Dates:";

// Record boundary: the due-dates section closes every record. The county
// page prints both due dates verbatim, so the observed upstream run ends
// each record with these exact phrases (whitespace between them varies).
pub const RECORD_END_PHRASES: [&str; 3] =
    [DUE_DATES_LABEL, "May 12, 2025", "November 10, 2025"];

// Tax-history table: number of header lines before the per-year rows
pub const TAX_HISTORY_HEADER_LINES: usize = 2;

// Output stage formatting
pub const RECORD_DIVIDER: &str = "--------------------------------------------------------------------------------";
pub const RECORD_HEADER_PREFIX: &str = "--- Record ";
pub const RECORD_HEADER_SUFFIX: &str = " ---";

// Date formats
pub const DUE_DATE_IN_FMT: &str = "%B %d, %Y"; // "May 12, 2025"
pub const DUE_DATE_OUT_FMT: &str = "%m/%d/%Y"; // "05/12/2025"

// Default paths
pub const DEFAULT_RAW_FILE: &str = "data/raw_text.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "out/output.txt";
pub const DEFAULT_DATASET_FILE: &str = "out/dataset.json";

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
