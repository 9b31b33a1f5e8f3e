use serde::{Deserialize, Serialize};

/// Parameters of a client search as submitted by an operator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientSearchParameters {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub page: usize,
    pub page_size: usize,
}
