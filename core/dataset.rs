use klang_deps::rand::Rng;
use thiserror::Error;

/// A column of the synthetic sample table. The first seventeen are water quality readings. `Wqc` is the water quality class label, 0 for clean, 1 for slightly polluted and 2 for polluted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
	Nh3n,
	Bod,
	Cod,
	Do,
	Ph,
	Tss,
	Col,
	Ec,
	Floatables,
	Od,
	Sal,
	Taste,
	Tds,
	Temp,
	Turb,
	Fc,
	Tc,
	Wqc,
}

/// The distribution a column's values are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distribution {
	/// Uniform over the half open interval `[low, high)`.
	Uniform { low: f64, high: f64 },
	/// Uniform over the integers `low..=high`.
	Integer { low: i64, high: i64 },
}

impl Parameter {
	pub const ALL: [Parameter; 18] = [
		Parameter::Nh3n,
		Parameter::Bod,
		Parameter::Cod,
		Parameter::Do,
		Parameter::Ph,
		Parameter::Tss,
		Parameter::Col,
		Parameter::Ec,
		Parameter::Floatables,
		Parameter::Od,
		Parameter::Sal,
		Parameter::Taste,
		Parameter::Tds,
		Parameter::Temp,
		Parameter::Turb,
		Parameter::Fc,
		Parameter::Tc,
		Parameter::Wqc,
	];

	pub fn name(self) -> &'static str {
		match self {
			Parameter::Nh3n => "NH3N",
			Parameter::Bod => "BOD",
			Parameter::Cod => "COD",
			Parameter::Do => "DO",
			Parameter::Ph => "pH",
			Parameter::Tss => "TSS",
			Parameter::Col => "Col",
			Parameter::Ec => "EC",
			Parameter::Floatables => "Floatables",
			Parameter::Od => "Od",
			Parameter::Sal => "SAL",
			Parameter::Taste => "Taste",
			Parameter::Tds => "TDS",
			Parameter::Temp => "Temp",
			Parameter::Turb => "Turb",
			Parameter::Fc => "FC",
			Parameter::Tc => "TC",
			Parameter::Wqc => "WQC",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Parameter::Nh3n => "Ammoniacal nitrogen (mg/L)",
			Parameter::Bod => "Biochemical oxygen demand (mg/L)",
			Parameter::Cod => "Chemical oxygen demand (mg/L)",
			Parameter::Do => "Dissolved oxygen (mg/L)",
			Parameter::Ph => "pH",
			Parameter::Tss => "Total suspended solids (mg/L)",
			Parameter::Col => "Color",
			Parameter::Ec => "Electrical conductivity",
			Parameter::Floatables => "Floatables",
			Parameter::Od => "Odor",
			Parameter::Sal => "Salinity",
			Parameter::Taste => "Taste",
			Parameter::Tds => "Total dissolved solids (mg/L)",
			Parameter::Temp => "Temperature",
			Parameter::Turb => "Turbidity",
			Parameter::Fc => "Fecal coliform",
			Parameter::Tc => "Total coliform",
			Parameter::Wqc => "Water quality class",
		}
	}

	pub fn distribution(self) -> Distribution {
		let uniform = |low, high| Distribution::Uniform { low, high };
		match self {
			Parameter::Nh3n | Parameter::Bod | Parameter::Cod | Parameter::Do => uniform(0.0, 10.0),
			Parameter::Ph => uniform(6.5, 8.5),
			Parameter::Tss | Parameter::Col | Parameter::Turb => uniform(0.0, 100.0),
			Parameter::Ec => uniform(0.0, 500.0),
			Parameter::Floatables => uniform(0.0, 50.0),
			Parameter::Od => uniform(0.0, 5.0),
			Parameter::Sal => uniform(0.0, 35.0),
			Parameter::Taste => Distribution::Integer { low: 0, high: 1 },
			Parameter::Tds => uniform(0.0, 200.0),
			Parameter::Temp => uniform(20.0, 35.0),
			Parameter::Fc => uniform(0.0, 1000.0),
			Parameter::Tc => uniform(0.0, 5000.0),
			Parameter::Wqc => Distribution::Integer { low: 0, high: 2 },
		}
	}

	/// The position of this parameter's column in the sample table.
	pub fn index(self) -> usize {
		Parameter::ALL
			.iter()
			.position(|parameter| *parameter == self)
			.unwrap_or(0)
	}
}

impl std::fmt::Display for Parameter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown parameter \"{0}\"")]
pub struct ParseParameterError(pub String);

impl std::str::FromStr for Parameter {
	type Err = ParseParameterError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Parameter::ALL
			.iter()
			.find(|parameter| parameter.name() == s)
			.cloned()
			.ok_or_else(|| ParseParameterError(s.to_owned()))
	}
}

impl Distribution {
	pub fn sample<R>(&self, rng: &mut R) -> f64
	where
		R: Rng + ?Sized,
	{
		match *self {
			Distribution::Uniform { low, high } => rng.gen_range(low..high),
			Distribution::Integer { low, high } => rng.gen_range(low..=high) as f64,
		}
	}

	pub fn contains(&self, value: f64) -> bool {
		match *self {
			Distribution::Uniform { low, high } => low <= value && value < high,
			Distribution::Integer { low, high } => {
				value.fract() == 0.0 && low as f64 <= value && value <= high as f64
			}
		}
	}
}

/// SampleTable is a column oriented table with one column of synthetic values per [`Parameter`](enum.Parameter.html), in the order of `Parameter::ALL`.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleTable {
	columns: Vec<Vec<f64>>,
	n_rows: usize,
}

impl SampleTable {
	/// Draw `n_rows` values for every parameter independently from its distribution.
	pub fn generate<R>(rng: &mut R, n_rows: usize) -> SampleTable
	where
		R: Rng + ?Sized,
	{
		let columns = Parameter::ALL
			.iter()
			.map(|parameter| {
				let distribution = parameter.distribution();
				(0..n_rows).map(|_| distribution.sample(rng)).collect()
			})
			.collect();
		SampleTable { columns, n_rows }
	}

	pub fn n_rows(&self) -> usize {
		self.n_rows
	}

	pub fn column(&self, parameter: Parameter) -> &[f64] {
		&self.columns[parameter.index()]
	}

	pub fn columns(&self) -> impl Iterator<Item = (Parameter, &[f64])> {
		Parameter::ALL
			.iter()
			.cloned()
			.zip(self.columns.iter().map(|column| column.as_slice()))
	}

	/// The first `n` rows, each with one value per parameter.
	pub fn head(&self, n: usize) -> Vec<Vec<f64>> {
		(0..n.min(self.n_rows))
			.map(|row_index| {
				self.columns
					.iter()
					.map(|column| column[row_index])
					.collect()
			})
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use klang_deps::rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn test_generated_values_are_in_range() {
		for seed in 0..8 {
			for n_rows in &[1, 3, 100, 1000] {
				let table = SampleTable::generate(&mut StdRng::seed_from_u64(seed), *n_rows);
				assert_eq!(table.n_rows(), *n_rows);
				for (parameter, column) in table.columns() {
					assert_eq!(column.len(), *n_rows);
					let distribution = parameter.distribution();
					for value in column {
						assert!(
							distribution.contains(*value),
							"{} value {} is outside {:?} (seed {}, {} rows)",
							parameter,
							value,
							distribution,
							seed,
							n_rows
						);
					}
				}
				let ph = table.column(Parameter::Ph);
				assert!(ph.iter().all(|value| (6.5..=8.5).contains(value)));
				let taste = table.column(Parameter::Taste);
				assert!(taste.iter().all(|value| *value == 0.0 || *value == 1.0));
				let wqc = table.column(Parameter::Wqc);
				assert!(wqc
					.iter()
					.all(|value| *value == 0.0 || *value == 1.0 || *value == 2.0));
			}
		}
		let wqc = SampleTable::generate(&mut StdRng::seed_from_u64(42), 1000);
		for class in &[0.0, 1.0, 2.0] {
			assert!(wqc.column(Parameter::Wqc).contains(class));
		}
	}

	#[test]
	fn test_seeded_generation_is_deterministic() {
		let a = SampleTable::generate(&mut StdRng::seed_from_u64(7), 100);
		let b = SampleTable::generate(&mut StdRng::seed_from_u64(7), 100);
		assert_eq!(a, b);
	}

	#[test]
	fn test_head() {
		let table = SampleTable::generate(&mut StdRng::seed_from_u64(1), 100);
		let head = table.head(5);
		assert_eq!(head.len(), 5);
		assert!(head.iter().all(|row| row.len() == Parameter::ALL.len()));
		assert_eq!(head[3][Parameter::Bod.index()], table.column(Parameter::Bod)[3]);
		assert_eq!(SampleTable::generate(&mut StdRng::seed_from_u64(1), 2).head(5).len(), 2);
	}

	#[test]
	fn test_parse_parameter() {
		assert_eq!("NH3N".parse::<Parameter>(), Ok(Parameter::Nh3n));
		assert_eq!("pH".parse::<Parameter>(), Ok(Parameter::Ph));
		assert_eq!("WQC".parse::<Parameter>(), Ok(Parameter::Wqc));
		assert_eq!(
			"ph".parse::<Parameter>(),
			Err(ParseParameterError("ph".to_owned()))
		);
		for parameter in Parameter::ALL.iter() {
			assert_eq!(parameter.name().parse::<Parameter>(), Ok(*parameter));
		}
		assert_eq!(Parameter::Tc.index(), 16);
	}
}
