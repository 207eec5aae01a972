//! Price strings shared by every presentation surface.

use crate::models::{Currency, ListingType, ListingView};

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Format an amount for display.
///
/// USD is a grouped whole-dollar figure (`$2,500`). TZS is abbreviated:
/// `1.9B TZS`, `2.5M TZS`, `950K TZS`, or a grouped figure below a thousand.
/// Non-finite input gives an empty string.
pub fn format_price(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return String::new();
    }

    match currency {
        Currency::Usd => format!("${}", group_thousands(&whole(amount))),
        Currency::Tzs => {
            let rounded = amount.round();
            if rounded >= BILLION {
                format!("{}B TZS", one_decimal(amount / BILLION))
            } else if rounded >= MILLION {
                format!("{}M TZS", one_decimal(amount / MILLION))
            } else if rounded >= THOUSAND {
                format!("{}K TZS", whole(amount / THOUSAND))
            } else {
                format!("{} TZS", group_thousands(&whole(amount)))
            }
        }
    }
}

/// Same as [`format_price`] for untyped input such as template values.
/// Text that isn't a number gives an empty string.
pub fn format_price_text(amount: &str, currency: &str) -> String {
    match amount.trim().parse::<f64>() {
        Ok(value) => format_price(value, Currency::from_code(currency)),
        Err(_) => String::new(),
    }
}

/// Card price: the active amount, with `/month` for rentals
pub fn price_label(listing: &ListingView) -> String {
    let Some(amount) = listing.amount else {
        return String::new();
    };

    let price = format_price(amount, listing.currency);
    match listing.listing_type {
        ListingType::Sale => price,
        ListingType::Rent if price.is_empty() => price,
        ListingType::Rent => format!("{}/month", price),
    }
}

/// One decimal place, with a trailing `.0` dropped
fn one_decimal(value: f64) -> String {
    let mut text = format!("{:.1}", (value * 10.0).round() / 10.0);
    if text.ends_with(".0") {
        text.truncate(text.len() - 2);
    }
    text
}

/// Nearest whole number, in full digits (no `i64` ceiling)
fn whole(value: f64) -> String {
    // `+ 0.0` turns -0.0 into 0.0
    format!("{:.0}", value.round() + 0.0)
}

fn group_thousands(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", number),
    };
    let mut grouped = String::with_capacity(number.len() + digits.len() / 3);

    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
