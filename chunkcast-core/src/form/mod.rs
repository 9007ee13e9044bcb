use serde::Serialize;

pub mod multipart;

/// One file field of a form.
#[derive(Clone, Debug)]
pub struct FormPart {
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart form data carrying chunk bytes to the transcription backend.
#[derive(Clone, Debug)]
pub struct FormData {
    boundary: String,
    parts: Vec<FormPart>,
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

impl FormData {
    pub fn new() -> Self {
        Self {
            boundary: multipart::fresh_boundary(),
            parts: Vec::new(),
        }
    }

    pub fn append(
        &mut self,
        field: impl Into<String>,
        bytes: Vec<u8>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) {
        self.parts.push(FormPart {
            field: field.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn get(&self, field: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.field == field)
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for a `Content-Type` header announcing this body.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode as a `multipart/form-data` body.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(multipart::encoded_len(self));
        multipart::write_body(self, &mut out);
        out
    }

    /// Metadata of every part without the bytes, for logs and JSON lines.
    pub fn summary(&self) -> Vec<PartSummary> {
        self.parts
            .iter()
            .map(|p| PartSummary {
                field: p.field.clone(),
                filename: p.filename.clone(),
                content_type: p.content_type.clone(),
                size: p.bytes.len() as u64,
                blake3: blake3::hash(&p.bytes).to_hex().to_string(),
            })
            .collect()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PartSummary {
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub size: u64,
    pub blake3: String,
}

impl Serialize for FormData {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        // A single-file form flattens to the part itself.
        let summary = self.summary();
        match summary.as_slice() {
            [one] => one.serialize(s),
            many => many.serialize(s),
        }
    }
}
