#![forbid(unsafe_code)]

//! Property tests for range classification.

use proptest::prelude::*;

use rangebind::{NumberMode, RangeResult, RawValue, TracingSink, evaluate};

fn eval_ints(current: i64, min: i64, max: i64) -> RangeResult {
    evaluate(
        &RawValue::Text(current.to_string()),
        &RawValue::Text(min.to_string()),
        &RawValue::Text(max.to_string()),
        NumberMode::Integer,
        &TracingSink,
    )
}

proptest! {
    #[test]
    fn out_of_range_iff_outside_the_bounds(
        current in -1_000i64..=1_000,
        min in -1_000i64..=1_000,
        max in -1_000i64..=1_000,
    ) {
        prop_assume!(min <= max);
        let result = eval_ints(current, min, max);
        let outside = current < min || current > max;
        prop_assert_eq!(result.out_of_range, outside);
        prop_assert_eq!(result.in_range, !outside);
    }

    #[test]
    fn exactly_one_position_holds_within_the_range(
        min in -500i64..=500,
        span in 1i64..=200,
        offset in 0i64..=200,
    ) {
        let max = min + span;
        let current = min + offset.min(span);
        let result = eval_ints(current, min, max);

        prop_assert_eq!(result.at_min, current == min);
        prop_assert_eq!(result.at_max, current == max);
        let strictly_between = !result.at_min && !result.at_max;
        let positions =
            u8::from(result.at_min) + u8::from(result.at_max) + u8::from(strictly_between);
        prop_assert_eq!(positions, 1);
        prop_assert!(result.in_range);
    }

    #[test]
    fn boundary_values_are_inclusive(
        min in -1_000i64..=1_000,
        span in 0i64..=1_000,
    ) {
        let result = eval_ints(min, min, min + span);
        prop_assert!(result.at_min);
        prop_assert!(!result.out_of_range);

        let result = eval_ints(min + span, min, min + span);
        prop_assert!(result.at_max);
        prop_assert!(!result.out_of_range);
    }

    #[test]
    fn parsed_value_round_trips_through_text(value in -10_000i64..=10_000) {
        let result = eval_ints(value, -10_000, 10_000);
        prop_assert_eq!(result.value, Some(value as f64));
    }
}
