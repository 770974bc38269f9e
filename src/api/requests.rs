//! Inbound request payload shapes.

use serde::Deserialize;

use crate::contacts::NewContact;

/// Body shape shared by create and update.
///
/// There is no id field; for updates the id comes from the path. Missing
/// fields deserialize as empty strings and are reported by validation
/// rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInput {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

impl ContactInput {
    /// Convert into the domain payload. Normalization (trimming,
    /// email lower-casing) happens in the service layer, not here.
    pub fn into_new_contact(self) -> NewContact {
        NewContact {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Query-string parameters for contact search.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Free-text query. Absent or blank means "return everything".
    pub query: Option<String>,
}
