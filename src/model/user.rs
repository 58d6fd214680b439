use super::timestamp::Timestamp;
use super::types::Gender;
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub age: f64,
    pub gender: Gender,
    pub created_at: Timestamp,
}

impl User {
    pub fn new(id: u64, name: String, age: f64, gender: Gender) -> Self {
        Self {
            id,
            name,
            age,
            gender,
            created_at: Timestamp::now(),
        }
    }

    /// Whether `id` is the textual form of this user's id.
    pub fn has_id_text(&self, id: &str) -> bool {
        self.id.to_string() == id
    }
}

/// Fields required to create a user. The id and creation time are assigned
/// by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub age: f64,
    pub gender: Gender,
}

/// Partial update for a user: `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<Gender>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(gender) = self.gender {
            user.gender = gender;
        }
    }
}
