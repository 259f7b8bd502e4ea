use klang_deps::num_traits::ToPrimitive;

/// Compute the quantile `q` of `sorted`, which must be sorted in ascending order, interpolating linearly between the two nearest values. Returns `None` if `sorted` is empty or `q` is outside `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
	if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
		return None;
	}
	let index = (sorted.len() - 1).to_f64()? * q;
	let lower = index.floor().to_usize()?;
	let fract = index.fract();
	let lower_value = sorted[lower];
	match sorted.get(lower + 1) {
		Some(upper_value) if fract > 0.0 => Some(lower_value + (upper_value - lower_value) * fract),
		_ => Some(lower_value),
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
	pub min: f64,
	pub p25: f64,
	pub p50: f64,
	pub p75: f64,
	pub max: f64,
}

impl Quartiles {
	/// `sorted` must be sorted in ascending order.
	pub fn from_sorted(sorted: &[f64]) -> Option<Quartiles> {
		Some(Quartiles {
			min: *sorted.first()?,
			p25: quantile(sorted, 0.25)?,
			p50: quantile(sorted, 0.5)?,
			p75: quantile(sorted, 0.75)?,
			max: *sorted.last()?,
		})
	}

	pub fn iqr(&self) -> f64 {
		self.p75 - self.p25
	}
}

#[test]
fn test_quantile() {
	let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
	assert_eq!(quantile(&values, 0.0), Some(1.0));
	assert_eq!(quantile(&values, 0.25), Some(3.25));
	assert_eq!(quantile(&values, 0.5), Some(5.5));
	assert_eq!(quantile(&values, 0.75), Some(7.75));
	assert_eq!(quantile(&values, 1.0), Some(100.0));
	assert_eq!(quantile(&values, 1.5), None);
	assert_eq!(quantile(&[], 0.5), None);
	assert_eq!(quantile(&[4.0], 0.75), Some(4.0));
}

#[test]
fn test_quartiles() {
	let quartiles = Quartiles::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
	insta::assert_debug_snapshot!(quartiles, @r###"
 Quartiles {
     min: 1.0,
     p25: 2.0,
     p50: 3.0,
     p75: 4.0,
     max: 5.0,
 }
 "###);
	assert_eq!(quartiles.iqr(), 2.0);
}
