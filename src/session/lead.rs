use serde::Serialize;

/// Contact details a visitor leaves when interested in a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl LeadForm {
    /// Name, email and phone are required; message is optional
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
