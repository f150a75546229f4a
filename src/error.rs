use thiserror::Error;

#[derive(Error, Debug)]
pub enum YoinkError {
    #[error("cannot read input file {path}")]
    InputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid media pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl YoinkError {
    pub fn input_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        YoinkError::InputUnavailable {
            path: path.into(),
            source,
        }
    }
}
