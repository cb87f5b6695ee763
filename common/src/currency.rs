/// Format a rupee amount for display, e.g. `Rs. 15,000`.
pub fn format_rupees(amount: u64) -> String {
    format!("Rs. {}", group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(format_rupees(0), "Rs. 0");
        assert_eq!(format_rupees(999), "Rs. 999");
        assert_eq!(format_rupees(4500), "Rs. 4,500");
        assert_eq!(format_rupees(15000), "Rs. 15,000");
        assert_eq!(format_rupees(1234567), "Rs. 1,234,567");
    }
}
