use thiserror::Error;

/// Failures of the two backend exchanges and of form parsing.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Erro ao calcular perfil")]
    ProfileRequest { status: u16 },

    #[error("Erro ao analisar cardápio")]
    AnalyzeRequest { status: u16 },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("resposta inválida do servidor: {0}")]
    Decode(String),

    #[error("campo inválido '{field}': {reason}")]
    InvalidForm { field: &'static str, reason: String },
}

impl ClientError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidForm {
            field,
            reason: reason.into(),
        }
    }
}
