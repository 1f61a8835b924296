use crate::domain::shoe::Cents;

/// US-dollar display text, e.g. `Cents(123456)` -> `"$1,234.56"`.
pub fn format_price(amount: Cents) -> String {
    let dollars = amount.0 / 100;
    let cents = amount.0 % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${grouped}.{cents:02}")
}

pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
