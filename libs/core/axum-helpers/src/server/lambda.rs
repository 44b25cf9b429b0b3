use axum::Router;
use tracing::info;

/// `true` when running inside the AWS Lambda execution environment.
pub fn running_in_lambda() -> bool {
    std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some()
}

/// Serves `router` through the Lambda HTTP runtime (API Gateway, function
/// URLs, ALB). Returns when the runtime loop ends.
pub async fn run_lambda(router: Router) -> Result<(), lambda_http::Error> {
    info!("Starting Lambda HTTP runtime");
    lambda_http::run(router).await
}
