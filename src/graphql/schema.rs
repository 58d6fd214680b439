use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::{Character as _, NewUser};
use crate::storage::SharedStore;

use super::types::*;

pub type UserGraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> UserGraphSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .register_output_type::<Character>()
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single user by id
    async fn user(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<User>> {
        let Some(id) = id.and_then(|id| u64::try_from(id).ok()) else {
            return Ok(None);
        };
        let store = get_store(ctx)?.read().await;
        tracing::debug!(id, "Resolving user");
        Ok(store.user(id).cloned().map(User::from))
    }

    /// All users in creation order
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx)?.read().await;
        Ok(store.users().iter().cloned().map(User::from).collect())
    }

    /// Get a human by exact name
    async fn human(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Human>> {
        let Some(name) = name else {
            return Ok(None);
        };
        let store = get_store(ctx)?.read().await;
        Ok(store.human(&name).cloned().map(Human::from))
    }

    /// Get a droid by exact name
    async fn droid(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Droid>> {
        let Some(name) = name else {
            return Ok(None);
        };
        let store = get_store(ctx)?.read().await;
        Ok(store.droid(&name).cloned().map(Droid::from))
    }

    /// Get a human or droid by exact name (humans are searched first)
    async fn character(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Character>> {
        let Some(name) = name else {
            return Ok(None);
        };
        let store = get_store(ctx)?.read().await;
        if let Some(human) = store.human(&name) {
            tracing::debug!(name = human.name(), "Resolved character as human");
            return Ok(Some(Character::Human(human.clone().into())));
        }
        Ok(store
            .droid(&name)
            .map(|droid| Character::Droid(droid.clone().into())))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new user with the next free id
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
        gender: Gender,
    ) -> async_graphql::Result<CreateUserPayload> {
        let mut store = get_store(ctx)?.write().await;
        let user = store.create_user(NewUser {
            name,
            age: f64::from(age),
            gender: gender.into(),
        });

        Ok(CreateUserPayload {
            ok: true,
            user: Some(user.clone().into()),
        })
    }

    /// Update the provided fields of an existing user
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        user_data: UserInput,
    ) -> async_graphql::Result<UpdateUserPayload> {
        let (id, patch) = user_data.into_parts();
        let mut store = get_store(ctx)?.write().await;

        Ok(match store.update_user(id.as_str(), patch) {
            Some(user) => UpdateUserPayload {
                ok: true,
                user: Some(user.clone().into()),
            },
            None => UpdateUserPayload::not_found(),
        })
    }
}
