// src/core/money.rs
//
// Currency amounts as they appear in county tax tables: "$1,234.56".
// Internally plain f64, rounded to cents after every derivation.

/// Round to two decimals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Parse a currency token ("$1,234.56", "1,234.56") to a value.
pub fn parse_money(tok: &str) -> Option<f64> {
    let t = tok.trim();
    let t = t.strip_prefix('$').unwrap_or(t);
    if t.is_empty() { return None; }
    let cleaned: String = t.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok()
}

/// All currency tokens in a line, in order: '$' followed by a non-empty
/// run of digits, commas and dots.
pub fn money_tokens(line: &str) -> Vec<&str> {
    let b = line.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < b.len() {
        if b[i] == b'$' {
            let start = i;
            i += 1;
            while i < b.len() && (b[i].is_ascii_digit() || b[i] == b',' || b[i] == b'.') {
                i += 1;
            }
            if i > start + 1 {
                out.push(&line[start..i]);
            }
        } else {
            i += 1;
        }
    }
    out
}

/// Render with currency symbol, thousands separators, two decimals.
pub fn fmt_money(v: f64) -> String {
    let cents = (v * 100.0).round() as i64;
    let neg = cents < 0;
    let dollars = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let ds = dollars.to_string();
    let n = ds.len();
    let mut out = String::with_capacity(n + 8);
    if neg { out.push('-'); }
    out.push('$');
    for (i, ch) in ds.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out.push('.');
    out.push_str(&format!("{frac:02}"));
    out
}
