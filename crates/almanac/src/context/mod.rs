//! Request-scoped context module.
//!
//! Provides the `RequestContext` extractor that bundles request-scoped state
//! to complement application-scoped `AppState`, and the `CurrentViewer`
//! extractor for routes that require an acting identity.

mod extractor;
mod types;

pub use types::{CurrentViewer, RequestContext, RequestId};
