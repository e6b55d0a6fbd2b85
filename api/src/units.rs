use alloy_primitives::utils::{format_ether, parse_ether};
use alloy_primitives::{Address, U256};

use crate::consts::ONE_DAY;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses a positive decimal ETH amount (e.g. `"0.25"`) into wei.
///
/// Signs, exponents and more than 18 fractional digits are rejected.
pub fn parse_eth(input: &str) -> Option<U256> {
    let input = input.trim();
    if input.is_empty() || input == "." {
        return None;
    }
    if !input.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if input.matches('.').count() > 1 {
        return None;
    }
    let wei = parse_ether(input).ok()?;
    (wei > U256::ZERO).then_some(wei)
}

/// Formats wei as ETH, keeping at least one fractional digit: `1.0`, `0.25`.
pub fn format_eth(wei: U256) -> String {
    let full = format_ether(wei);
    match full.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{frac}")
            }
        }
        None => format!("{full}.0"),
    }
}

/// Parses a `0x`-prefixed 20-byte hex address, any letter case.
pub fn parse_address(input: &str) -> Option<Address> {
    let input = input.trim();
    if !input.starts_with("0x") || input.len() != 42 {
        return None;
    }
    input.parse().ok()
}

/// `0x1234...abcd` form of an address.
pub fn short_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

/// Formats a Unix timestamp as a UTC calendar date, e.g. `Oct 16, 2026`.
pub fn format_date(timestamp: u64) -> String {
    let (year, month, day) = civil_from_days((timestamp / ONE_DAY) as i64);
    format!("{} {}, {}", MONTHS[(month - 1) as usize], day, year)
}

/// Formats the UTC time of day of a Unix timestamp, e.g. `14:05:09 UTC`.
pub fn format_time(timestamp: u64) -> String {
    let secs = timestamp % ONE_DAY;
    format!(
        "{:02}:{:02}:{:02} UTC",
        secs / 3_600,
        secs % 3_600 / 60,
        secs % 60
    )
}

/// Days since 1970-01-01 to (year, month, day) in the proleptic Gregorian calendar.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Truncates to `max` characters, appending `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}
