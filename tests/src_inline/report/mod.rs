use super::*;

#[test]
fn test_format_float_integral_keeps_decimal_point() {
    assert_eq!(format_float(1.0), "1.0");
    assert_eq!(format_float(100.0), "100.0");
    assert_eq!(format_float(0.0), "0.0");
    assert_eq!(format_float(-3.0), "-3.0");
}

#[test]
fn test_format_float_shortest_digits() {
    assert_eq!(format_float(0.95), "0.95");
    assert_eq!(format_float(0.9), "0.9");
    assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_float(72.5 * 40.0 / 100.0), "29.0");
    assert_eq!(format_float(0.0001), "0.0001");
}

#[test]
fn test_format_float_scientific() {
    assert_eq!(format_float(0.00001), "1e-05");
    assert_eq!(format_float(0.000015), "1.5e-05");
    assert_eq!(format_float(1e16), "1e+16");
    assert_eq!(format_float(1e15), "1000000000000000.0");
}

#[test]
fn test_format_float_non_finite() {
    assert_eq!(format_float(f64::NAN), "nan");
    assert_eq!(format_float(f64::INFINITY), "inf");
    assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
}
