use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored document could not be converted into its domain model.
    ///
    /// Occurs when a record was written by something other than this service or the
    /// schema drifted. Results in a 500 Internal Server Error with a generic message
    /// returned to client.
    #[error("Failed to decode stored {entity} document: {source}")]
    DecodeDocument {
        /// Domain entity being decoded
        entity: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A domain model could not be converted into a storable document.
    #[error("Failed to encode {entity} as a document: {source}")]
    EncodeDocument {
        /// Domain entity being encoded
        entity: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Public URL for an uploaded file could not be built.
    #[error("Failed to build public URL for upload '{filename}': {source}")]
    UploadUrl {
        /// Generated filename of the upload
        filename: String,
        /// The underlying URL error
        #[source]
        source: url::ParseError,
    },
}
