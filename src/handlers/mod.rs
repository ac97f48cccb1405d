//! HTTP handlers: the health probe, the estimate form, and the paint-guru
//! assistant. Everything else on the wire is static assets.

pub mod assistant;
pub mod estimate;
pub mod health;

pub use assistant::ask_paint_guru;
pub use estimate::submit_estimate;
pub use health::health_check;
