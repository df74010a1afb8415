use serde::{Deserialize, Serialize};

/// One member of a generation batch. Immutable once constructed; the
/// variation index keeps prompts distinguishable across the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub company_name: String,
    pub philosophy: String,
    pub variation_index: usize,
}

/// A single-shot edit of a previously generated logo: the raw image payload,
/// its media type, and the framed edit instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    pub image_data: String, // Base64 encoded
    pub mime_type: String,
    pub instruction: String,
}
