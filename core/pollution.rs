use crate::classifier::PollutionCategory;

/// The share of the river in each pollution category, in percent. These figures are fixed and do not depend on the sample table.
pub const POLLUTION_DISTRIBUTION: [(PollutionCategory, f64); 3] = [
	(PollutionCategory::Clean, 20.0),
	(PollutionCategory::SlightlyPolluted, 50.0),
	(PollutionCategory::Polluted, 30.0),
];

#[test]
fn test_pollution_distribution() {
	let total: f64 = POLLUTION_DISTRIBUTION
		.iter()
		.map(|(_, percentage)| percentage)
		.sum();
	assert_eq!(total, 100.0);
	let labels: Vec<String> = POLLUTION_DISTRIBUTION
		.iter()
		.map(|(category, percentage)| format!("{} {}", category, percentage))
		.collect();
	insta::assert_debug_snapshot!(labels, @r###"
 [
     "Clean 20",
     "Slightly Polluted 50",
     "Polluted 30",
 ]
 "###);
}
