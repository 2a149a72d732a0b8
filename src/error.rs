use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskFetchError {
    #[error("Resposta inesperada da API (esperado um array).")]
    UnexpectedShape,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("falha ao gravar {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("falha ao serializar tarefas: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("configuração inválida: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TaskFetchError>;
