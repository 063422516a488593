use lockforge::estimator::{estimate_duration, estimate_tries, AttackDuration, AttackEstimate};
use rstest::rstest;

#[test]
fn test_tries_endpoints() {
    assert_eq!(estimate_tries(0), 10);
    assert_eq!(estimate_tries(100), 100_000_000);
}

#[rstest]
#[case(72, 1_096_478)]
#[case(62, 218_776)]
#[case(57, 97_724)]
#[case(40, 6_310)]
fn test_tries_regression(#[case] score: u8, #[case] expected: u64) {
    assert_eq!(estimate_tries(score), expected);
}

#[test]
fn test_tries_monotonic() {
    let mut prev = 0;
    for s in 0..=100u8 {
        let t = estimate_tries(s);
        assert!(t >= prev, "tries dropped at score {}", s);
        prev = t;
    }
}

#[test]
fn test_scores_above_range_saturate() {
    assert_eq!(estimate_tries(250), estimate_tries(100));
}

#[rstest]
#[case(10, 10, "1.0s")]
#[case(595, 10, "59.5s")]
#[case(19_498, 10, "32m 30s")]
#[case(1_096_478, 10, "30h 27m")]
#[case(2_089_296, 10, "2d 10h")]
#[case(100_000_000, 10, "115d 17h")]
#[case(100_000_000, 1_000_000, "1m 40s")]
fn test_duration_format(#[case] tries: u64, #[case] rate: u64, #[case] expected: &str) {
    assert_eq!(estimate_duration(tries, rate).to_string(), expected);
}

#[test]
fn test_duration_unit_thresholds() {
    assert!(matches!(
        AttackDuration::from_seconds(59.9),
        AttackDuration::Seconds { .. }
    ));
    assert_eq!(
        AttackDuration::from_seconds(60.0),
        AttackDuration::Minutes {
            minutes: 1,
            seconds: 0
        }
    );
    assert_eq!(
        AttackDuration::from_seconds(3600.0),
        AttackDuration::Hours {
            hours: 1,
            minutes: 0
        }
    );
    assert_eq!(
        AttackDuration::from_seconds(47.0 * 3600.0 + 59.0 * 60.0),
        AttackDuration::Hours {
            hours: 47,
            minutes: 59
        }
    );
    assert_eq!(
        AttackDuration::from_seconds(48.0 * 3600.0),
        AttackDuration::Days { days: 2, hours: 0 }
    );
}

#[rstest]
#[case(119.6, "2m 0s")]
#[case(119.4, "1m 59s")]
#[case(3599.7, "1h 0m")]
fn test_seconds_never_roll_over(#[case] seconds: f64, #[case] expected: &str) {
    assert_eq!(AttackDuration::from_seconds(seconds).to_string(), expected);
}

#[test]
fn test_zero_rate_does_not_divide_by_zero() {
    assert_eq!(estimate_duration(10, 0).to_string(), "10.0s");
}

#[test]
fn test_estimate_from_score() {
    let est = AttackEstimate::from_score(0, 10);
    assert_eq!(est.tries, 10);
    assert_eq!(est.duration.to_string(), "1.0s");
}
