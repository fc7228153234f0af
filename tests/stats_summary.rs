use formchart::Error;
use formchart::stats::{Statistics, round2, summarize};

#[test]
fn population_std_dev_and_mean() {
    // mean = 5, squared deviations sum to 32, 32 / 8 = 4 -> sd = 2
    let s = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(s.sum, 40.0);
    assert_eq!(s.average, 5.0);
    assert_eq!(s.std_dev, 2.0);
    assert_eq!(s.min, 2.0);
    assert_eq!(s.max, 9.0);
}

#[test]
fn median_is_upper_element_for_even_counts() {
    // [1,2,3,4] -> index 2 of sorted -> 3, not 2.5
    let s = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
    assert_eq!(s.median, 3.0);

    let s = summarize(&[9.0, 1.0, 5.0]).unwrap();
    assert_eq!(s.median, 5.0);

    let s = summarize(&[7.0]).unwrap();
    assert_eq!(s.median, 7.0);
    assert_eq!(s.std_dev, 0.0);
}

#[test]
fn values_are_rounded_to_two_places() {
    // 10 / 3 = 3.333..
    let s = summarize(&[1.0, 2.0, 7.0]).unwrap();
    assert_eq!(s.average, 3.33);
    // sd = sqrt(((1-10/3)^2 + (2-10/3)^2 + (7-10/3)^2) / 3) = 2.6247..
    assert_eq!(s.std_dev, 2.62);
    assert_eq!(round2(1.005_000_1), 1.01);
    assert_eq!(round2(-2.456), -2.46);
}

#[test]
fn sample_sales_data() {
    let s = summarize(&[12.0, 19.0, 3.0, 17.0, 28.0, 24.0]).unwrap();
    assert_eq!(s.sum, 103.0);
    assert_eq!(s.average, 17.17);
    assert_eq!(s.max, 28.0);
    assert_eq!(s.min, 3.0);
    // sorted: 3 12 17 19 24 28 -> index 3
    assert_eq!(s.median, 19.0);
    assert_eq!(s.std_dev, 8.11);
}

#[test]
fn huge_finite_values_stay_finite() {
    assert_eq!(round2(1e307), 1e307);
    assert_eq!(round2(-1e307), -1e307);
    let s = summarize(&[1e307]).unwrap();
    assert!(s.sum.is_finite());
    assert_eq!(s.sum, 1e307);
    assert_eq!(s.max, 1e307);
    assert_eq!(s.median, 1e307);
    assert_eq!(s.std_dev, 0.0);
}

#[test]
fn empty_input_is_rejected() {
    let err = summarize(&[]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn nan_corrupts_summaries() {
    let s = summarize(&[1.0, f64::NAN, 3.0]).unwrap();
    assert!(s.sum.is_nan());
    assert!(s.average.is_nan());
    assert!(s.max.is_nan());
    assert!(s.min.is_nan());
    assert!(s.std_dev.is_nan());
    // NaN sorts last: [1, 3, NaN] -> index 1
    assert_eq!(s.median, 3.0);
}

#[test]
fn display_uses_two_decimals() {
    let s = Statistics {
        sum: 10.0,
        average: 2.5,
        max: 4.0,
        min: 1.0,
        median: 3.0,
        std_dev: 1.12,
    };
    assert_eq!(
        s.to_string(),
        "sum=10.00 average=2.50 max=4.00 min=1.00 median=3.00 stdDev=1.12"
    );
}
