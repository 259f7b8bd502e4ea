use klang_deps::{
	backtrace::Backtrace,
	futures::FutureExt,
	http, hyper, tokio,
	tracing::{error, info},
};
use std::{
	cell::RefCell, convert::Infallible, future::Future, net::SocketAddr, panic::AssertUnwindSafe,
	sync::Arc,
};

/// Serve http requests on `addr` until the process receives ctrl-c. A panic in `request_handler` is caught and turned into a 500 response containing the panic message and backtrace.
pub async fn serve<C, H, F>(
	addr: SocketAddr,
	request_handler_context: C,
	request_handler: H,
) -> hyper::Result<()>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
	F: Future<Output = http::Response<hyper::Body>> + Send,
{
	// Create a task local that will store the panic message and backtrace if a panic occurs.
	tokio::task_local! {
		static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
	}
	async fn service<C, H, F>(
		request_handler: Arc<H>,
		request_handler_context: Arc<C>,
		request: http::Request<hyper::Body>,
	) -> Result<http::Response<hyper::Body>, Infallible>
	where
		C: Send + Sync + 'static,
		H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
		F: Future<Output = http::Response<hyper::Body>> + Send,
	{
		let method = request.method().clone();
		let path = request.uri().path().to_owned();
		let result = AssertUnwindSafe(request_handler(request_handler_context, request))
			.catch_unwind()
			.await;
		let response = result.unwrap_or_else(|_| {
			let body = PANIC_MESSAGE_AND_BACKTRACE
				.try_with(|panic_message_and_backtrace| {
					panic_message_and_backtrace
						.borrow()
						.as_ref()
						.map(|(message, backtrace)| format!("{}\n{:?}", message, backtrace))
				})
				.ok()
				.flatten()
				.unwrap_or_else(|| "internal server error".to_owned());
			error!(%method, %path, status = 500, "{}", body);
			let mut response = http::Response::new(hyper::Body::from(body));
			*response.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
			response
		});
		Ok(response)
	}
	// Install a panic hook that will record the panic message and backtrace if a panic occurs.
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		PANIC_MESSAGE_AND_BACKTRACE
			.try_with(|panic_message_and_backtrace| {
				panic_message_and_backtrace.borrow_mut().replace(value);
			})
			.ok();
	}));
	// Wrap the request handler and context with Arc to allow sharing a reference to it with each task.
	let request_handler = Arc::new(request_handler);
	let request_handler_context = Arc::new(request_handler_context);
	let service = hyper::service::make_service_fn(|_| {
		let request_handler = request_handler.clone();
		let request_handler_context = request_handler_context.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let request_handler = request_handler.clone();
				let request_handler_context = request_handler_context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					service(request_handler, request_handler_context, request).await
				})
			}))
		}
	});
	let result = match hyper::Server::try_bind(&addr) {
		Ok(server) => {
			info!(%addr, "serving");
			server
				.serve(service)
				.with_graceful_shutdown(async {
					tokio::signal::ctrl_c().await.ok();
				})
				.await
		}
		Err(error) => Err(error),
	};
	// Restore the previous panic hook whether or not the server failed.
	std::panic::set_hook(hook);
	result?;
	info!("shut down");
	Ok(())
}

#[test]
fn test_serve_restores_panic_hook_when_bind_fails() {
	use std::sync::atomic::{AtomicUsize, Ordering};
	static HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	let previous_hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|_| {
		HOOK_CALLS.fetch_add(1, Ordering::SeqCst);
	}));
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()
		.unwrap();
	let result = runtime.block_on(serve(
		addr,
		(),
		|_context: Arc<()>, _request: http::Request<hyper::Body>| async {
			http::Response::new(hyper::Body::empty())
		},
	));
	assert!(result.is_err());
	std::panic::catch_unwind(|| panic!("after serve")).ok();
	std::panic::set_hook(previous_hook);
	assert_eq!(HOOK_CALLS.load(Ordering::SeqCst), 1);
	drop(listener);
}
