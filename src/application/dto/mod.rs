/// Data Transfer Objects for the application layer
///
/// DTOs carry data between the CLI adapter and the use case, keeping the
/// policy domain free of command-line concerns.
mod evaluation_request;
mod evaluation_response;
mod output_format;

pub use evaluation_request::EvaluationRequest;
pub use evaluation_response::EvaluationResponse;
pub use output_format::OutputFormat;
