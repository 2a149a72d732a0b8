use crate::models::Task;

pub const STATUS_FLAG: &str = "--status";
pub const STATUS_VAR: &str = "TASKFETCH_STATUS";

const FLAG_PREFIX: &str = "--";

/// Which records survive a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    All,
    DoneOnly,
    PendingOnly,
}

impl Selector {
    pub fn keeps(&self, task: &Task) -> bool {
        match self {
            Selector::All => true,
            Selector::DoneOnly => task.is_done(),
            Selector::PendingOnly => !task.is_done(),
        }
    }
}

/// The raw inputs a status filter can come from.
#[derive(Debug, Clone, Default)]
pub struct FilterInputs {
    pub args: Vec<String>,
    pub env_status: Option<String>,
}

impl FilterInputs {
    pub fn new(args: Vec<String>, env_status: Option<String>) -> Self {
        FilterInputs { args, env_status }
    }

    /// Arguments without the program name, plus `TASKFETCH_STATUS`.
    pub fn from_process() -> Self {
        FilterInputs {
            args: std::env::args().skip(1).collect(),
            env_status: std::env::var(STATUS_VAR).ok(),
        }
    }
}

type Resolver = fn(&FilterInputs) -> Option<String>;

// Highest precedence first; the first one to answer wins.
const RESOLVERS: &[Resolver] = &[from_joined_flag, from_split_flag, from_environment];

// --status=<value>
fn from_joined_flag(inputs: &FilterInputs) -> Option<String> {
    let prefix = format!("{STATUS_FLAG}=");
    inputs
        .args
        .iter()
        .find(|arg| arg.starts_with(&prefix))
        .map(|arg| arg.split('=').nth(1).unwrap_or_default().to_string())
}

// --status <value>
fn from_split_flag(inputs: &FilterInputs) -> Option<String> {
    let index = inputs.args.iter().position(|arg| arg == STATUS_FLAG)?;
    inputs
        .args
        .get(index + 1)
        .filter(|value| !value.is_empty() && !value.starts_with(FLAG_PREFIX))
        .cloned()
}

fn from_environment(inputs: &FilterInputs) -> Option<String> {
    inputs.env_status.clone().filter(|value| !value.is_empty())
}

/// Resolved status filter for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    /// Lower-cased value the user asked for, if any.
    pub requested: Option<String>,
    pub selector: Selector,
}

impl StatusFilter {
    pub fn none() -> Self {
        StatusFilter {
            requested: None,
            selector: Selector::All,
        }
    }

    pub fn resolve(inputs: &FilterInputs) -> Self {
        let raw = RESOLVERS.iter().find_map(|resolver| resolver(inputs));
        Self::from_raw(raw.as_deref())
    }

    pub fn from_raw(raw: Option<&str>) -> Self {
        let requested = match raw {
            Some(value) if !value.is_empty() => value.to_lowercase(),
            _ => return Self::none(),
        };

        let selector = match requested.as_str() {
            "concluida" => Selector::DoneOnly,
            "pendente" => Selector::PendingOnly,
            other => {
                log::warn!("unrecognized status filter '{}', keeping every task", other);
                Selector::All
            }
        };

        StatusFilter {
            requested: Some(requested),
            selector,
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.is_some()
    }
}
