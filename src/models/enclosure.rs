use uuid::Uuid;

/// An enclosure. The animal count and the responsible-employee set are
/// derived at read time from Animal and Employee records, never stored here.
#[derive(Debug, Clone)]
pub struct Enclosure {
    pub id: Uuid,
    pub name: String,
}
