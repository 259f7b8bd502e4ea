use derive_more::{Display, Error};
use klang_deps::{
	http::{header, HeaderValue, Response, StatusCode},
	hyper::Body,
};

#[derive(Display, Debug, Error)]
pub enum Error {
	#[display(fmt = "bad request")]
	BadRequest,
	#[display(fmt = "not found")]
	NotFound,
}

pub fn bad_request() -> Response<Body> {
	text_response(StatusCode::BAD_REQUEST, "bad request")
}

pub fn not_found() -> Response<Body> {
	text_response(StatusCode::NOT_FOUND, "not found")
}

fn text_response(status: StatusCode, body: &'static str) -> Response<Body> {
	let mut response = Response::new(Body::from(body));
	*response.status_mut() = status;
	response.headers_mut().insert(
		header::CONTENT_TYPE,
		HeaderValue::from_static("text/plain; charset=utf-8"),
	);
	response
}

/// Respond with a rendered page.
pub fn html_response(status: StatusCode, html: String) -> Response<Body> {
	let mut response = Response::new(Body::from(html));
	*response.status_mut() = status;
	response.headers_mut().insert(
		header::CONTENT_TYPE,
		HeaderValue::from_static("text/html; charset=utf-8"),
	);
	response
}
