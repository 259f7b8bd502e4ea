/*!
This crate serves the Klang river water pollution dashboard: the exploratory data analysis page at `/` and the pollution prediction page at `/prediction`.
*/

use self::common::error::{bad_request, not_found, Error};
use klang_deps::{
	http::{header, HeaderValue, Method, Request, Response, StatusCode},
	hyper::Body,
	serde_urlencoded, tokio,
	tracing::{error, info},
};
use klang_util::{err, error::Result};
use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

pub mod common;
mod layouts;
mod pages;

pub struct Options {
	pub host: std::net::IpAddr,
	pub port: u16,
	/// The number of rows in the sample table generated for every render of the home page.
	pub rows: usize,
}

pub struct Context {
	pub options: Options,
}

const STYLES: &str = include_str!("styles.css");

/// Route a request to its page and turn errors into responses. Every request is logged with its method, path and status.
pub async fn handle(context: Arc<Context>, request: Request<Body>) -> Response<Body> {
	let method = request.method().clone();
	let uri = request.uri().clone();
	let path = uri.path();
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let search_params: Option<BTreeMap<String, String>> = match uri.query() {
		Some(query) => match serde_urlencoded::from_str(query) {
			Ok(search_params) => Some(search_params),
			Err(_) => {
				let response = bad_request();
				info!(%method, %path, status = response.status().as_u16(), "request");
				return response;
			}
		},
		None => None,
	};
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &[""]) => self::pages::home::get(&context, request, search_params).await,
		(&Method::GET, &["prediction"]) => {
			self::pages::prediction::get(&context, request, search_params).await
		}
		(&Method::GET, &["styles.css"]) => Ok(styles()),
		_ => Err(Error::NotFound.into()),
	};
	let response = match result {
		Ok(response) => response,
		Err(error) => {
			if let Some(error) = error.downcast_ref::<Error>() {
				match error {
					Error::BadRequest => bad_request(),
					Error::NotFound => not_found(),
				}
			} else {
				error!(%method, %path, "{}", error);
				let mut response = Response::new(Body::from("internal server error"));
				*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
				response
			}
		}
	};
	info!(%method, %path, status = response.status().as_u16(), "request");
	response
}

fn styles() -> Response<Body> {
	let mut response = Response::new(Body::from(STYLES));
	response.headers_mut().insert(
		header::CONTENT_TYPE,
		HeaderValue::from_static("text/css; charset=utf-8"),
	);
	response
}

pub fn run(options: Options) -> Result<()> {
	if options.rows == 0 {
		return Err(err!("the number of rows must be at least 1"));
	}
	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run_impl(options))
}

async fn run_impl(options: Options) -> Result<()> {
	let addr = SocketAddr::new(options.host, options.port);
	let context = Context { options };
	klang_util::serve::serve(addr, context, handle).await?;
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use klang_deps::hyper;

	fn context() -> Arc<Context> {
		Arc::new(Context {
			options: Options {
				host: "127.0.0.1".parse().unwrap(),
				port: 8080,
				rows: 100,
			},
		})
	}

	fn request(method: Method, uri: &str) -> (StatusCode, String) {
		let runtime = tokio::runtime::Builder::new_current_thread()
			.build()
			.unwrap();
		runtime.block_on(async {
			let request = Request::builder()
				.method(method)
				.uri(uri)
				.body(Body::empty())
				.unwrap();
			let response = handle(context(), request).await;
			let status = response.status();
			let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
			(status, String::from_utf8(body.to_vec()).unwrap())
		})
	}

	#[test]
	fn test_home() {
		let (status, body) = request(Method::GET, "/");
		assert_eq!(status, StatusCode::OK);
		assert!(body.starts_with("<!doctype html>"));
		assert!(body.contains("💧 WATER POLLUTION OF KLANG RIVER DASHBOARD 🌊"));
		assert!(body.contains("Klang River Data"));
		assert!(body.contains("Histogram of NH3N"));
		assert!(body.contains("Skewness Line of NH3N (Skewness: "));
		assert!(body.contains("Scatter Plot of NH3N vs NH3N"));
		assert!(body.contains("Box Plot of NH3N"));
		assert!(body.contains("Pollution Rate of Klang River"));
	}

	#[test]
	fn test_home_with_selected_columns() {
		let (status, body) = request(Method::GET, "/?column=pH&y=BOD");
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Histogram of pH"));
		assert!(body.contains("Scatter Plot of pH vs BOD"));
		assert!(body.contains(r#"<option selected value="pH">pH</option>"#));
	}

	#[test]
	fn test_home_with_unknown_column() {
		let (status, _) = request(Method::GET, "/?column=Lead");
		assert_eq!(status, StatusCode::BAD_REQUEST);
		let (status, _) = request(Method::GET, "/?y=ph");
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_prediction_form() {
		let (status, body) = request(Method::GET, "/prediction");
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Water Pollution Prediction"));
		assert!(body.contains("Enter the values for the following parameters:"));
		assert!(!body.contains("prediction-result"));
		assert_eq!(body.matches(r#"type="number""#).count(), 6);
	}

	#[test]
	fn test_prediction() {
		let (status, body) = request(Method::GET, "/prediction?nh3n=2&bod=2&predict=true");
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains(r#"<div class="prediction-result clean">Prediction: <b>Clean</b></div>"#));
		let (_, body) = request(Method::GET, "/prediction?nh3n=4&bod=5&cod=9&predict=true");
		assert!(body.contains("Prediction: <b>Slightly Polluted</b>"));
		assert!(body.contains(r#"value="9""#));
		let (_, body) = request(Method::GET, "/prediction?nh3n=7&bod=1&predict=true");
		assert!(body.contains(r#"class="prediction-result polluted""#));
	}

	#[test]
	fn test_prediction_with_invalid_reading() {
		let (status, body) = request(Method::GET, "/prediction?nh3n=-1&predict=true");
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body.contains("NH3N (mg/L) must not be negative"));
		assert!(!body.contains("prediction-result"));
		let (status, _) = request(Method::GET, "/prediction?ph=abc&predict=true");
		assert_eq!(status, StatusCode::BAD_REQUEST);
		let (status, body) = request(Method::GET, "/prediction?bod=inf&predict=true");
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body.contains("BOD (mg/L) must be a finite number"));
		assert!(!body.contains("prediction-result"));
	}

	#[test]
	fn test_styles_and_not_found() {
		let (status, body) = request(Method::GET, "/styles.css");
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains(".slightly-polluted"));
		let (status, body) = request(Method::GET, "/health");
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body, "not found");
		let (status, _) = request(Method::POST, "/prediction");
		assert_eq!(status, StatusCode::NOT_FOUND);
	}
}
