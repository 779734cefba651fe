use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Animal {
    pub id: Uuid,
    pub species: String,
    pub name: String,
    pub gender: String,
    /// Workers may mutate this field and nothing else.
    pub health: String,
    pub enclosure_id: Option<Uuid>,
}
