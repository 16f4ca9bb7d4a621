//! Display formatting for card numbers. Presentation only: nothing here
//! feeds back into validation.

/// Groups a card number for display while typing: 4-6-5 for the American
/// Express layout (`34`/`37` prefix, capped at 15 digits), otherwise groups
/// of four capped at 19 digits. Non-digit characters are stripped first.
pub fn group_digits(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.starts_with("34") || digits.starts_with("37") {
        group_by(&digits, &[4, 6, 5])
    } else {
        group_by(&digits, &[4, 4, 4, 4, 3])
    }
}

/// Masks all but the last four digits of a card number.
pub fn mask_digits(digits: &str) -> String {
    let suffix_index = digits.len().saturating_sub(4);
    let mut masked = String::with_capacity(digits.len());
    for (index, ch) in digits.chars().enumerate() {
        if index >= suffix_index {
            masked.push(ch);
        } else {
            masked.push('*');
        }
    }
    masked
}

fn group_by(digits: &str, groups: &[usize]) -> String {
    let mut output = String::with_capacity(digits.len() + groups.len());
    let mut chars = digits.chars();
    for (index, size) in groups.iter().enumerate() {
        let group: String = chars.by_ref().take(*size).collect();
        if group.is_empty() {
            break;
        }
        if index > 0 {
            output.push(' ');
        }
        output.push_str(&group);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{group_digits, mask_digits};

    #[test]
    fn it_groups_digits_for_display() {
        assert_eq!(group_digits("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(group_digits("4111-1111-1111-1111"), "4111 1111 1111 1111");
        assert_eq!(group_digits("341111111111111"), "3411 111111 11111");
        assert_eq!(group_digits("3411"), "3411");
        assert_eq!(group_digits("34111"), "3411 1");
        assert_eq!(group_digits("41112"), "4111 2");
        assert_eq!(group_digits(""), "");
    }

    #[test]
    fn it_caps_the_digit_count() {
        assert_eq!(
            group_digits("4111111111111111111999"),
            "4111 1111 1111 1111 111",
        );
        assert_eq!(group_digits("34111111111111155555"), "3411 111111 11111");
    }

    #[test]
    fn it_masks_digits() {
        assert_eq!(mask_digits("4111111111111111"), "************1111");
        assert_eq!(mask_digits("341111111111111"), "***********1111");
        assert_eq!(mask_digits("123"), "123");
        assert_eq!(mask_digits(""), "");
    }
}
