use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `consume` ran outside every `provide` frame for the requested type.
    #[error("no `{type_name}` is provided in the current scope; wrap the consumer in `provide`")]
    MissingProvider { type_name: &'static str },

    #[error("schema `{schema}` declares no field named `{name}`")]
    UnknownField { schema: &'static str, name: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
