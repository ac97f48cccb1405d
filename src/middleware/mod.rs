pub mod asset_headers;

pub use asset_headers::asset_headers_middleware;
