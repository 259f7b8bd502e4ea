/// Format a table value with a fixed number of decimal places.
pub fn format_decimal(value: f64, precision: usize) -> String {
	format!("{:.1$}", value, precision)
}

#[test]
fn test_format_decimal() {
	assert_eq!(format_decimal(7.12345, 2), "7.12");
	assert_eq!(format_decimal(1.0, 0), "1");
	assert_eq!(format_decimal(0.1234567, 6), "0.123457");
}
