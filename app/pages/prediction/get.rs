use super::page::{render, Field, Outcome, Props};
use crate::{common::error::html_response, Context};
use klang_core::classifier::{classify, PredictionInput, Reading};
use klang_deps::{
	http::{Request, Response, StatusCode},
	hyper::Body,
	tracing::{debug, warn},
};
use klang_util::error::Result;
use std::collections::BTreeMap;

const DEFAULT_VALUE: &str = "0.0";

pub async fn get(
	_context: &Context,
	_request: Request<Body>,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<Response<Body>> {
	let search_params = search_params.unwrap_or_default();
	let fields = Reading::ALL
		.iter()
		.map(|reading| Field {
			label: format!("{}:", reading.label()),
			name: reading.field_name().to_owned(),
			value: search_params
				.get(reading.field_name())
				.filter(|value| !value.trim().is_empty())
				.cloned()
				.unwrap_or_else(|| DEFAULT_VALUE.to_owned()),
		})
		.collect();
	let outcome = if search_params.contains_key("predict") {
		let input = PredictionInput::parse(|reading| {
			search_params.get(reading.field_name()).map(String::as_str)
		});
		match input {
			Ok(input) => {
				let category = classify(&input);
				debug!(nh3n = input.nh3n, bod = input.bod, %category, "classified");
				Some(Outcome::Prediction(category))
			}
			Err(error) => {
				warn!(%error, "invalid reading");
				Some(Outcome::InvalidReading(error.to_string()))
			}
		}
	} else {
		None
	};
	let status = match outcome {
		Some(Outcome::InvalidReading(_)) => StatusCode::BAD_REQUEST,
		_ => StatusCode::OK,
	};
	let props = Props { fields, outcome };
	Ok(html_response(status, render(props)))
}
