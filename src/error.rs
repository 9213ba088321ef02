use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to serialize <{tag}> element: {source}")]
    Serialize {
        tag: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialized <{tag}> element is not valid UTF-8")]
    NonUtf8Markup { tag: String },
}
