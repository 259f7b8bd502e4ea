use crate::dataset::Parameter;
use klang_deps::lexical;
use klang_util::finite::Finite;
use thiserror::Error;

/// The six readings collected by the prediction form, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reading {
	Nh3n,
	Cod,
	Bod,
	Do,
	Ph,
	Tss,
}

impl Reading {
	pub const ALL: [Reading; 6] = [
		Reading::Nh3n,
		Reading::Cod,
		Reading::Bod,
		Reading::Do,
		Reading::Ph,
		Reading::Tss,
	];

	/// The name of the form field and query parameter.
	pub fn field_name(self) -> &'static str {
		match self {
			Reading::Nh3n => "nh3n",
			Reading::Cod => "cod",
			Reading::Bod => "bod",
			Reading::Do => "do",
			Reading::Ph => "ph",
			Reading::Tss => "tss",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Reading::Nh3n => "NH3N (mg/L)",
			Reading::Cod => "COD (mg/L)",
			Reading::Bod => "BOD (mg/L)",
			Reading::Do => "DO (mg/L)",
			Reading::Ph => "pH",
			Reading::Tss => "TSS (mg/L)",
		}
	}

	pub fn parameter(self) -> Parameter {
		match self {
			Reading::Nh3n => Parameter::Nh3n,
			Reading::Cod => Parameter::Cod,
			Reading::Bod => Parameter::Bod,
			Reading::Do => Parameter::Do,
			Reading::Ph => Parameter::Ph,
			Reading::Tss => Parameter::Tss,
		}
	}
}

/// PredictionInput holds one non-negative value for each [`Reading`](enum.Reading.html).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PredictionInput {
	pub nh3n: f64,
	pub cod: f64,
	pub bod: f64,
	pub dissolved_oxygen: f64,
	pub ph: f64,
	pub tss: f64,
}

impl PredictionInput {
	pub fn get(&self, reading: Reading) -> f64 {
		match reading {
			Reading::Nh3n => self.nh3n,
			Reading::Cod => self.cod,
			Reading::Bod => self.bod,
			Reading::Do => self.dissolved_oxygen,
			Reading::Ph => self.ph,
			Reading::Tss => self.tss,
		}
	}

	pub fn set(&mut self, reading: Reading, value: f64) {
		let field = match reading {
			Reading::Nh3n => &mut self.nh3n,
			Reading::Cod => &mut self.cod,
			Reading::Bod => &mut self.bod,
			Reading::Do => &mut self.dissolved_oxygen,
			Reading::Ph => &mut self.ph,
			Reading::Tss => &mut self.tss,
		};
		*field = value;
	}

	/// Parse every reading with `value_for`. A missing or blank value reads as 0.
	pub fn parse<'a>(
		value_for: impl Fn(Reading) -> Option<&'a str>,
	) -> Result<PredictionInput, InvalidReadingError> {
		let mut input = PredictionInput::default();
		for reading in Reading::ALL.iter().cloned() {
			input.set(reading, parse_reading(reading, value_for(reading))?);
		}
		Ok(input)
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidReadingError {
	#[error("{} must be a number, got \"{}\"", .0.label(), .1)]
	NotANumber(Reading, String),
	#[error("{} must be a finite number", .0.label())]
	NotFinite(Reading),
	#[error("{} must not be negative", .0.label())]
	Negative(Reading),
}

/// Parse a single reading. A missing or blank value reads as 0.
pub fn parse_reading(reading: Reading, value: Option<&str>) -> Result<f64, InvalidReadingError> {
	let value = match value.map(str::trim) {
		None | Some("") => return Ok(0.0),
		Some(value) => value,
	};
	let parsed = lexical::parse::<f64, _>(value)
		.map_err(|_| InvalidReadingError::NotANumber(reading, value.to_owned()))?;
	let parsed = Finite::new(parsed).map_err(|_| InvalidReadingError::NotFinite(reading))?;
	if parsed.get() < 0.0 {
		return Err(InvalidReadingError::Negative(reading));
	}
	Ok(parsed.get())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PollutionCategory {
	Clean,
	SlightlyPolluted,
	Polluted,
}

impl PollutionCategory {
	pub const ALL: [PollutionCategory; 3] = [
		PollutionCategory::Clean,
		PollutionCategory::SlightlyPolluted,
		PollutionCategory::Polluted,
	];

	pub fn label(self) -> &'static str {
		match self {
			PollutionCategory::Clean => "Clean",
			PollutionCategory::SlightlyPolluted => "Slightly Polluted",
			PollutionCategory::Polluted => "Polluted",
		}
	}

	pub fn css_class(self) -> &'static str {
		match self {
			PollutionCategory::Clean => "clean",
			PollutionCategory::SlightlyPolluted => "slightly-polluted",
			PollutionCategory::Polluted => "polluted",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			PollutionCategory::Clean => "#76c7c0",
			PollutionCategory::SlightlyPolluted => "#ffcc00",
			PollutionCategory::Polluted => "#ff6f61",
		}
	}

	/// Map a water quality class index, as stored in the `WQC` column, to its category.
	pub fn from_class_index(index: usize) -> Option<PollutionCategory> {
		PollutionCategory::ALL.get(index).cloned()
	}
}

impl std::fmt::Display for PollutionCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// Only ammoniacal nitrogen and biochemical oxygen demand decide the category. The remaining readings are collected but ignored.
pub fn classify(input: &PredictionInput) -> PollutionCategory {
	if input.nh3n < 3.0 && input.bod < 3.0 {
		PollutionCategory::Clean
	} else if input.nh3n < 6.0 {
		PollutionCategory::SlightlyPolluted
	} else {
		PollutionCategory::Polluted
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn input(nh3n: f64, bod: f64) -> PredictionInput {
		PredictionInput {
			nh3n,
			bod,
			..Default::default()
		}
	}

	#[test]
	fn test_classify() {
		assert_eq!(classify(&input(2.0, 2.0)), PollutionCategory::Clean);
		assert_eq!(classify(&input(4.0, 5.0)), PollutionCategory::SlightlyPolluted);
		assert_eq!(classify(&input(7.0, 1.0)), PollutionCategory::Polluted);
		assert_eq!(classify(&input(2.0, 3.0)), PollutionCategory::SlightlyPolluted);
		assert_eq!(classify(&input(0.0, 0.0)), PollutionCategory::Clean);
	}

	#[test]
	fn test_classify_thresholds_are_strict() {
		assert_eq!(classify(&input(3.0, 0.0)), PollutionCategory::SlightlyPolluted);
		assert_eq!(classify(&input(6.0, 0.0)), PollutionCategory::Polluted);
		assert_eq!(classify(&input(5.99, 100.0)), PollutionCategory::SlightlyPolluted);
	}

	#[test]
	fn test_classify_ignores_other_readings() {
		for (nh3n, bod) in &[(2.0, 2.0), (4.0, 5.0), (7.0, 1.0)] {
			let expected = classify(&input(*nh3n, *bod));
			for other in &[0.0, 0.5, 9.9, 1000.0] {
				let input = PredictionInput {
					nh3n: *nh3n,
					bod: *bod,
					cod: *other,
					dissolved_oxygen: *other,
					ph: *other,
					tss: *other,
				};
				assert_eq!(classify(&input), expected);
			}
		}
	}

	#[test]
	fn test_category() {
		assert_eq!(
			PollutionCategory::from_class_index(1),
			Some(PollutionCategory::SlightlyPolluted)
		);
		assert_eq!(PollutionCategory::from_class_index(3), None);
		assert_eq!(PollutionCategory::Polluted.css_class(), "polluted");
		assert_eq!(PollutionCategory::Clean.color(), "#76c7c0");
		assert_eq!(PollutionCategory::SlightlyPolluted.to_string(), "Slightly Polluted");
	}

	#[test]
	fn test_parse_reading() {
		assert_eq!(parse_reading(Reading::Nh3n, None), Ok(0.0));
		assert_eq!(parse_reading(Reading::Nh3n, Some("  ")), Ok(0.0));
		assert_eq!(parse_reading(Reading::Bod, Some("2.5")), Ok(2.5));
		assert_eq!(parse_reading(Reading::Bod, Some(" 7 ")), Ok(7.0));
		assert_eq!(
			parse_reading(Reading::Ph, Some("abc")),
			Err(InvalidReadingError::NotANumber(Reading::Ph, "abc".to_owned()))
		);
		assert_eq!(
			parse_reading(Reading::Tss, Some("-0.1")),
			Err(InvalidReadingError::Negative(Reading::Tss))
		);
		assert_eq!(
			InvalidReadingError::Negative(Reading::Tss).to_string(),
			"TSS (mg/L) must not be negative"
		);
		for value in &["1e999", "inf", "NaN", "Infinity"] {
			assert_eq!(
				parse_reading(Reading::Nh3n, Some(*value)),
				Err(InvalidReadingError::NotFinite(Reading::Nh3n))
			);
		}
		assert_eq!(
			InvalidReadingError::NotFinite(Reading::Bod).to_string(),
			"BOD (mg/L) must be a finite number"
		);
	}

	#[test]
	fn test_parse_prediction_input() {
		let input = PredictionInput::parse(|reading| match reading {
			Reading::Nh3n => Some("4"),
			Reading::Bod => Some("5"),
			Reading::Do => Some("8.2"),
			_ => None,
		})
		.unwrap();
		assert_eq!(input.nh3n, 4.0);
		assert_eq!(input.bod, 5.0);
		assert_eq!(input.dissolved_oxygen, 8.2);
		assert_eq!(input.cod, 0.0);
		assert_eq!(classify(&input), PollutionCategory::SlightlyPolluted);
		let error = PredictionInput::parse(|reading| match reading {
			Reading::Cod => Some("ten"),
			_ => None,
		})
		.unwrap_err();
		assert_eq!(error.to_string(), "COD (mg/L) must be a number, got \"ten\"");
	}
}
