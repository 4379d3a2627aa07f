use hickory_proto::ProtoError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service host {host:?} is not a valid dns name: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: ProtoError,
    },

    #[error("decoding service at {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
