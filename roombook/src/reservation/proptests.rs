//! Property-based tests for reservation records and the status lifecycle.

use super::{normalize_birthday, ReservationDraft, ReservationId, ReservationStatus, RoomType};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop::sample::select(ReservationStatus::ALL.to_vec())
}

fn room_type_strategy() -> impl Strategy<Value = RoomType> {
    prop::sample::select(RoomType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Blank birthdays never survive as text
    #[test]
    fn blank_birthday_is_absent(blank in "[ \t]{0,8}") {
        prop_assert_eq!(normalize_birthday(&blank).unwrap(), None);
    }

    // Any well-formed date survives normalization unchanged
    #[test]
    fn formatted_birthday_parses_back(date in date_strategy()) {
        let text = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(normalize_birthday(&text).unwrap(), Some(date));
    }

    // Terminal statuses reject every move
    #[test]
    fn terminal_status_rejects_all(to in status_strategy()) {
        prop_assert!(ReservationStatus::CheckedOut.transition_to(to).is_err());
        prop_assert!(ReservationStatus::Canceled.transition_to(to).is_err());
    }

    // A status never transitions to itself
    #[test]
    fn no_self_transition(status in status_strategy()) {
        prop_assert!(!status.can_transition_to(status));
    }

    // Draft date validation agrees with calendar order
    #[test]
    fn draft_date_order(check_in in date_strategy(), check_out in date_strategy()) {
        let draft = ReservationDraft::new("Jane", "Doe", check_in, check_out);
        prop_assert_eq!(draft.validate().is_ok(), check_out > check_in);
    }

    // Room type labels parse back to the same variant
    #[test]
    fn room_type_label_parses(room_type in room_type_strategy()) {
        prop_assert_eq!(room_type.label().parse::<RoomType>().unwrap(), room_type);
    }

    // Numeric and textual ids decode identically
    #[test]
    fn numeric_and_text_ids_agree(n in 0i64..1_000_000) {
        let numeric: ReservationId = serde_json::from_str(&n.to_string()).unwrap();
        let text: ReservationId = serde_json::from_str(&format!("\"{n}\"")).unwrap();
        prop_assert_eq!(numeric, text);
    }
}
