//! Property-based tests for the validators.

use super::*;
use chrono::Days;
use proptest::prelude::*;

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 18).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Any future stay of at least one night is accepted with the right length
    #[test]
    fn future_stays_accepted(offset in 0u64..3650, nights in 1u64..60) {
        let check_in = base_day() + Days::new(offset);
        let check_out = check_in + Days::new(nights);
        let stay = validate_date_range(
            &check_in.format(DATE_FORMAT).to_string(),
            &check_out.format(DATE_FORMAT).to_string(),
            base_day(),
        ).unwrap();
        prop_assert_eq!(u64::try_from(stay.nights()).unwrap(), nights);
    }

    // Stays whose check-out does not follow check-in are always rejected
    #[test]
    fn reversed_stays_rejected(offset in 0u64..3650, back in 0u64..60) {
        let check_in = base_day() + Days::new(offset + 60);
        let check_out = check_in - Days::new(back);
        let result = validate_date_range(
            &check_in.format(DATE_FORMAT).to_string(),
            &check_out.format(DATE_FORMAT).to_string(),
            base_day(),
        );
        prop_assert!(result.is_err());
    }

    // Check-in before today is rejected no matter how long the stay
    #[test]
    fn past_check_in_rejected(back in 1u64..3650, nights in 1u64..60) {
        let check_in = base_day() - Days::new(back);
        let check_out = check_in + Days::new(nights);
        let err = validate_date_range(
            &check_in.format(DATE_FORMAT).to_string(),
            &check_out.format(DATE_FORMAT).to_string(),
            base_day(),
        ).unwrap_err();
        prop_assert!(err.to_string().contains("Check-in date cannot be in the past"));
    }

    // Phone numbers of 10 to 15 digits pass, with or without a plus
    #[test]
    fn digit_phones_accepted(digits in "[0-9]{10,15}", plus in any::<bool>()) {
        let phone = if plus { format!("+{digits}") } else { digits };
        prop_assert!(validate_phone(Some(&phone)).is_ok());
    }

    // Too few digits always fails
    #[test]
    fn short_phones_rejected(digits in "[0-9]{1,9}") {
        prop_assert!(validate_phone(Some(&digits)).is_err());
    }

    // Strings without an @ are never valid emails
    #[test]
    fn emails_need_at_sign(local in "[a-z0-9.]{1,30}") {
        prop_assert!(validate_email(Some(&local)).is_err());
    }

    // Non-positive ids are rejected for every payment field
    #[test]
    fn non_positive_ids_rejected(id in i64::MIN..=0) {
        prop_assert!(validate_payment(id, 1, 10.0, "Cash").is_err());
        prop_assert!(validate_payment(1, id, 10.0, "Cash").is_err());
    }

    // Positive finite amounts with a known method always pass
    #[test]
    fn positive_amounts_accepted(amount in 0.01f64..1_000_000.0, index in 0usize..3) {
        let method = PaymentMethod::ALL[index];
        prop_assert_eq!(validate_payment(1, 1, amount, method.as_str()).unwrap(), method);
    }
}
