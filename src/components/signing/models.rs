use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record returned when a signature is applied to a document.
///
/// The signing service does not verify the signature image or the document;
/// it only binds the two together with a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedDocument {
    pub document_id: String,
    pub signature_id: String,
    pub signed_at: DateTime<Utc>,
}
