// src/parse/tax_history.rs
//
// The tax-history section lists one row per year, most recent first:
// year, spring amount, fall amount, delinquent amount, total tax,
// payments. Two layouts occur in the wild: the whole row on one line, or
// the year on its own line with the amounts on the next.

use crate::config::consts::TAX_HISTORY_HEADER_LINES;
use crate::core::money::{fmt_money, money_tokens, parse_money};
use crate::core::text::{leading_year4, trimmed_lines, year4};
use crate::record::DelinquencyEntry;

/// The five monetary columns of the current (first) year row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurrentYearTotals {
    pub spring: f64,
    pub fall: f64,
    pub delinquency: f64,
    pub total_tax: f64,
    pub payments: f64,
}

/// Extract the current year's totals: the first line that is a bare
/// 4-digit year marks the row, the next non-empty line carries the
/// amounts. Fewer than five currency tokens zero-fills every column so
/// a malformed table never aborts the batch.
pub fn parse_current_year(section: &str) -> CurrentYearTotals {
    let lines = trimmed_lines(section);

    let mut data_line = "";
    for (idx, line) in lines.iter().enumerate() {
        if year4(line).is_some() {
            if idx + 1 < lines.len() {
                data_line = lines[idx + 1];
            }
            break;
        }
    }

    let toks = money_tokens(data_line);
    if toks.len() < 5 {
        logd!("tax_history: {} token(s) on current-year line, zero-filling", toks.len());
        return CurrentYearTotals::default();
    }

    let amt = |i: usize| parse_money(toks[i]).unwrap_or(0.0);
    CurrentYearTotals {
        spring: amt(0),
        fall: amt(1),
        delinquency: amt(2),
        total_tax: amt(3),
        payments: amt(4),
    }
}

/// The leading money token of a field, trailing text ignored:
/// "$75.00abc" yields "$75.00".
fn money_prefix(tok: &str) -> Option<&str> {
    let rest = tok.strip_prefix('$')?;
    let end = rest
        .bytes()
        .position(|b| !(b.is_ascii_digit() || b == b',' || b == b'.'))
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&tok[..end + 1]) }
}

/// Same-line row: `<year> <money> <money> <money>` with optional
/// trailing tokens. The third money token is the delinquent amount.
fn same_line_delinquent<'a>(line: &'a str) -> Option<(&'a str, &'a str)> {
    let (year, rest) = leading_year4(line)?;
    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() < 3 {
        return None;
    }
    let toks: Vec<&str> = fields[..3].iter().map(|f| money_prefix(f)).collect::<Option<_>>()?;
    Some((year, toks[2]))
}

fn push_if_positive(out: &mut Vec<DelinquencyEntry>, year: &str, tok: &str) {
    let Some(amount) = parse_money(tok) else { return };
    if amount > 0.0 {
        out.push(DelinquencyEntry {
            payoff_amount: fmt_money(amount),
            tax_year: s!(year),
        });
    }
}

/// Scan the full history for years still carrying a delinquent balance.
/// The first two lines are table headers. Rows match in same-line mode
/// or split mode (year alone, amounts on the following line); anything
/// else advances one line so malformed input cannot loop forever.
/// Zero-delinquency years are omitted entirely.
pub fn parse_delinquencies(section: &str) -> Vec<DelinquencyEntry> {
    let all = trimmed_lines(section);
    let lines = if all.len() > TAX_HISTORY_HEADER_LINES {
        &all[TAX_HISTORY_HEADER_LINES..]
    } else {
        &[][..]
    };

    let mut out = Vec::new();
    let mut i = 0usize;
    while i < lines.len() {
        if let Some((year, tok)) = same_line_delinquent(lines[i]) {
            push_if_positive(&mut out, year, tok);
            i += 1;
            continue;
        }
        if let Some(year) = year4(lines[i]) {
            if i + 1 < lines.len() {
                let toks = money_tokens(lines[i + 1]);
                if toks.len() >= 3 {
                    push_if_positive(&mut out, year, toks[2]);
                }
                i += 2;
                continue;
            }
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_five_columns() {
        let section = "Year Spring Fall Delinquency Total Payments\n(most recent first)\n\
                       2024\n$661.02 $661.02 $0.00 $1,322.04 $1,322.04\n\
                       2023\n$650.00 $650.00 $75.00 $1,300.00 $1,225.00\n";
        let t = parse_current_year(section);
        assert_eq!(t.spring, 661.02);
        assert_eq!(t.fall, 661.02);
        assert_eq!(t.delinquency, 0.0);
        assert_eq!(t.total_tax, 1322.04);
        assert_eq!(t.payments, 1322.04);
    }

    #[test]
    fn short_current_year_line_zero_fills() {
        let t = parse_current_year("2024\n$100.00 $100.00\n");
        assert_eq!(t, CurrentYearTotals::default());
        assert_eq!(parse_current_year(""), CurrentYearTotals::default());
    }

    #[test]
    fn extra_tokens_keep_the_first_five() {
        let t = parse_current_year("2024\n$1.00 $2.00 $3.00 $4.00 $5.00 $6.00\n");
        assert_eq!(t.payments, 5.0);
    }

    #[test]
    fn same_line_row_with_positive_delinquency() {
        let section = "header one\nheader two\n2023 $500.00 $500.00 $75.00\n";
        let d = parse_delinquencies(section);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].tax_year, "2023");
        assert_eq!(d[0].payoff_amount, "$75.00");
    }

    #[test]
    fn same_line_row_with_zero_delinquency_is_omitted() {
        let section = "header one\nheader two\n2023 $500.00 $500.00 $0.00\n";
        assert!(parse_delinquencies(section).is_empty());
    }

    #[test]
    fn split_rows_consume_two_lines() {
        let section = "h1\nh2\n\
                       2022\n$400.00 $400.00 $0.00\n\
                       2021\n$300.00 $300.00 $120.50 $600.00 $479.50\n";
        let d = parse_delinquencies(section);
        // 2022 has zero delinquency; 2021's amounts line was not
        // re-scanned as its own row
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].tax_year, "2021");
        assert_eq!(d[0].payoff_amount, "$120.50");
    }

    #[test]
    fn unmatched_lines_advance_one() {
        let section = "h1\nh2\nno row here\n2020 $100.00 $100.00 $5.00\n";
        let d = parse_delinquencies(section);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].tax_year, "2020");
    }

    #[test]
    fn trailing_year_without_amounts_is_skipped() {
        assert!(parse_delinquencies("h1\nh2\n2019\n").is_empty());
    }

    #[test]
    fn money_token_with_trailing_text_keeps_its_prefix() {
        let d = parse_delinquencies("h1\nh2\n2018 $1.00 $1.00 $75.00abc\n");
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].payoff_amount, "$75.00");
    }

    #[test]
    fn non_ascii_lines_are_scanned_safely() {
        // owner names can interleave with rows; accented text must not
        // derail the scan
        let section = "h1\nh2\nJosè Garcia\n2017 $1.00 $1.00 $20.00\nRenée\n";
        let d = parse_delinquencies(section);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].tax_year, "2017");
        assert_eq!(d[0].payoff_amount, "$20.00");
    }

    #[test]
    fn payoff_amount_is_reformatted() {
        let d = parse_delinquencies("h1\nh2\n2018 $1.00 $1.00 $1234.5\n");
        assert_eq!(d[0].payoff_amount, "$1,234.50");
    }
}
