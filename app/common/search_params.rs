use super::error::Error;
use klang_core::dataset::Parameter;
use klang_deps::tracing::warn;
use std::collections::BTreeMap;

/// Read the parameter named by the search param `key`. A missing param selects the first column. An unknown column name is a bad request.
pub fn parameter_search_param(
	search_params: Option<&BTreeMap<String, String>>,
	key: &str,
) -> Result<Parameter, Error> {
	match search_params.and_then(|search_params| search_params.get(key)) {
		None => Ok(Parameter::ALL[0]),
		Some(value) => value.parse().map_err(|error| {
			warn!(%key, "{}", error);
			Error::BadRequest
		}),
	}
}

#[test]
fn test_parameter_search_param() {
	let mut search_params = BTreeMap::new();
	assert_eq!(
		parameter_search_param(None, "column").unwrap(),
		Parameter::Nh3n
	);
	search_params.insert("column".to_owned(), "TDS".to_owned());
	search_params.insert("y".to_owned(), "Lead".to_owned());
	assert_eq!(
		parameter_search_param(Some(&search_params), "column").unwrap(),
		Parameter::Tds
	);
	assert!(parameter_search_param(Some(&search_params), "y").is_err());
}
