use crate::model::{self, Timestamp, UserPatch};
use async_graphql::{Enum, ID, InputObject, Interface, Object, SimpleObject};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

impl From<model::Gender> for Gender {
    fn from(g: model::Gender) -> Self {
        match g {
            model::Gender::Male => Gender::Male,
            model::Gender::Female => Gender::Female,
        }
    }
}

impl From<Gender> for model::Gender {
    fn from(g: Gender) -> Self {
        match g {
            Gender::Male => model::Gender::Male,
            Gender::Female => model::Gender::Female,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub age: f64,
    pub gender: Gender,
    pub created_at: Timestamp,
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: ID(u.id.to_string()),
            name: u.name,
            age: u.age,
            gender: u.gender.into(),
            created_at: u.created_at,
        }
    }
}

pub struct Human(model::Human);

#[Object]
impl Human {
    async fn name(&self) -> String {
        self.0.name.clone()
    }

    async fn gender(&self) -> Gender {
        self.0.gender.into()
    }
}

impl From<model::Human> for Human {
    fn from(h: model::Human) -> Self {
        Self(h)
    }
}

pub struct Droid(model::Droid);

#[Object]
impl Droid {
    async fn name(&self) -> String {
        self.0.name.clone()
    }

    /// What the droid was built to do
    async fn function(&self) -> String {
        self.0.function.clone()
    }
}

impl From<model::Droid> for Droid {
    fn from(d: model::Droid) -> Self {
        Self(d)
    }
}

/// Anything with a name: humans and droids
#[derive(Interface)]
#[graphql(field(name = "name", ty = "String"))]
pub enum Character {
    Human(Human),
    Droid(Droid),
}

#[derive(SimpleObject)]
#[graphql(name = "CreateUser")]
pub struct CreateUserPayload {
    pub ok: bool,
    pub user: Option<User>,
}

#[derive(SimpleObject)]
#[graphql(name = "UpdateUser")]
pub struct UpdateUserPayload {
    pub ok: bool,
    pub user: Option<User>,
}

impl UpdateUserPayload {
    pub fn not_found() -> Self {
        Self {
            ok: false,
            user: None,
        }
    }
}

/// Partial update for a user. Omitted (or null) fields are left untouched.
#[derive(InputObject)]
pub struct UserInput {
    pub id: ID,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl UserInput {
    pub fn into_parts(self) -> (ID, UserPatch) {
        let patch = UserPatch {
            name: self.name,
            age: self.age.map(f64::from),
            gender: self.gender.map(Into::into),
        };
        (self.id, patch)
    }
}
