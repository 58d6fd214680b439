use super::types::Gender;

/// Anything with a display name: the shared contract of humans and droids.
pub trait Character {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Human {
    pub name: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Droid {
    pub name: String,
    pub function: String,
}

impl Character for Human {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Character for Droid {
    fn name(&self) -> &str {
        &self.name
    }
}
