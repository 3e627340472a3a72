use serde::{Deserialize, Serialize};

/// One validation finding: which field (or machinery index) is wrong and why.
///
/// Paths use dotted/bracketed notation, e.g. `contactNumber`,
/// `location.latitude` or `machinery[2].noOfMachines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Issue {
        Issue {
            path: path.into(),
            message: message.into(),
        }
    }
}
