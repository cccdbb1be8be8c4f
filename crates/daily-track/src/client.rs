//! Capability seam over the remote tracking API.

use std::path::Path;

use daily_core::EntityRef;
use serde_json::{Map, Value};

use crate::TrackResult;

/// Interface to the production-tracking system.
///
/// Implemented by an adapter over whatever tracking client the studio
/// uses. The dailies pipeline only ever needs these three operations;
/// authentication, sessions and transport are the adapter's concern.
pub trait TrackingClient {
    /// Resolves the currently authenticated user, if any.
    fn current_user(&self) -> TrackResult<Option<EntityRef>>;

    /// Creates a record of the given type from a field mapping and returns
    /// its id.
    fn create_record(
        &mut self,
        record_type: &str,
        fields: &Map<String, Value>,
    ) -> TrackResult<i64>;

    /// Uploads a local file to a named attachment field on a record.
    fn upload(
        &mut self,
        record_type: &str,
        id: i64,
        field: &str,
        path: &Path,
    ) -> TrackResult<()>;
}
