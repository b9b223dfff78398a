#[cfg(test)]
mod tests {
    use crate::models::{BookingDates, BookingRequest, ValidationError};
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    // Helper function to produce an arbitrary calendar date within the
    // range the booking service realistically sees
    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is valid in every month")
        })
    }

    proptest! {
        // Any checkin strictly after checkout must be rejected at
        // construction, before anything touches the network
        #[test]
        fn test_checkin_after_checkout_always_rejected(
            checkout in arb_date(),
            offset_days in 1i64..3650,
        ) {
            let checkin = checkout + Duration::days(offset_days);
            let result = BookingDates::new(checkin, checkout);
            prop_assert_eq!(
                result.unwrap_err(),
                ValidationError::CheckinAfterCheckout { checkin, checkout }
            );
        }

        // Any ordered pair constructs, and the stored dates are untouched
        #[test]
        fn test_ordered_dates_always_accepted(
            checkin in arb_date(),
            offset_days in 0i64..3650,
        ) {
            let checkout = checkin + Duration::days(offset_days);
            let dates = BookingDates::new(checkin, checkout).unwrap();
            prop_assert_eq!(dates.checkin(), checkin);
            prop_assert_eq!(dates.checkout(), checkout);
        }

        // The dates invariant holds through BookingRequest construction too
        #[test]
        fn test_booking_request_never_holds_inverted_dates(
            checkin in arb_date(),
            offset_days in 0i64..3650,
            totalprice in 0i64..100_000,
            depositpaid in any::<bool>(),
        ) {
            let checkout = checkin + Duration::days(offset_days);
            let dates = BookingDates::new(checkin, checkout).unwrap();
            let booking =
                BookingRequest::new("James", "Brown", totalprice, depositpaid, dates, None)
                    .unwrap();
            prop_assert!(booking.bookingdates().checkin() <= booking.bookingdates().checkout());
        }
    }
}
