pub mod request;
pub mod transport;

pub use request::{HttpRequest, HttpRequestBuilder, ACCEPT_JSON};
pub use transport::{get_json, HttpError, HttpResponse, HttpTransport, ReqwestTransport};
