// SPDX-License-Identifier: MPL-2.0
//! Rupee amount formatting with Indian digit grouping.
//!
//! The last three digits form one group and every group before them has two
//! digits: `1,250`, `22,000`, `1,00,000`, `12,34,56,789`.

/// Groups the digits of `amount` the way `en-IN` does, without a currency sign.
#[must_use]
pub fn group_indian(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    let lead = head.len() % 2;
    if lead > 0 {
        out.push_str(&head[..lead]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead > 0 {
            out.push(',');
        }
        // digits are ASCII
        out.extend(pair.iter().map(|&b| b as char));
    }

    out.push(',');
    out.push_str(tail);
    out
}

/// Formats `amount` as a rupee value, e.g. `₹22,000`.
#[must_use]
pub fn format_inr(amount: u32) -> String {
    format!("₹{}", group_indian(amount))
}
