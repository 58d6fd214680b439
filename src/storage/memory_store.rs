use super::seed::{seed_droids, seed_humans, seed_users};
use crate::config::SeedSettings;
use crate::model::{Character, Droid, Human, NewUser, User, UserPatch};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Handle shared by every resolver. Mutations take the write lock for the
/// whole read-allocate-append step, so concurrent creates never share an id.
pub type SharedStore = Arc<RwLock<UserStore>>;

/// Process-wide in-memory data: users (mutable), humans and droids
/// (read-only after seeding) and the last allocated user id.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
    humans: Vec<Human>,
    droids: Vec<Droid>,
    last_user_id: u64,
}

impl UserStore {
    pub fn new(users: Vec<User>, humans: Vec<Human>, droids: Vec<Droid>) -> Self {
        let last_user_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        Self {
            users,
            humans,
            droids,
            last_user_id,
        }
    }

    pub fn seed(settings: &SeedSettings) -> Self {
        Self::seed_with_rng(settings, &mut rand::rng())
    }

    pub fn seed_with_rng<R: Rng + ?Sized>(settings: &SeedSettings, rng: &mut R) -> Self {
        let store = Self::new(
            seed_users(settings.users, rng),
            seed_humans(settings.humans, rng),
            seed_droids(settings.droids),
        );
        tracing::debug!(
            users = store.users.len(),
            humans = store.humans.len(),
            droids = store.droids.len(),
            "Seeded store"
        );
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn last_user_id(&self) -> u64 {
        self.last_user_id
    }

    /// The id the next created user will receive.
    pub fn next_id(&self) -> u64 {
        self.last_user_id + 1
    }

    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn human(&self, name: &str) -> Option<&Human> {
        self.humans.iter().find(|h| h.name() == name)
    }

    pub fn droid(&self, name: &str) -> Option<&Droid> {
        self.droids.iter().find(|d| d.name() == name)
    }

    pub fn humans(&self) -> &[Human] {
        &self.humans
    }

    pub fn droids(&self) -> &[Droid] {
        &self.droids
    }

    pub fn create_user(&mut self, new_user: NewUser) -> &User {
        let id = self.next_id();
        let index = self.users.len();
        self.users
            .push(User::new(id, new_user.name, new_user.age, new_user.gender));
        self.last_user_id = id;
        tracing::info!(id, "Created user");
        &self.users[index]
    }

    /// Apply `patch` to the first user whose id text equals `id`.
    /// Returns `None` when no user matches; the store is then unchanged.
    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Option<&User> {
        match self.users.iter_mut().find(|u| u.has_id_text(id)) {
            Some(user) => {
                patch.apply(user);
                tracing::info!(id = user.id, "Updated user");
                Some(&*user)
            }
            None => {
                tracing::warn!(id, "Update for unknown user id");
                None
            }
        }
    }
}
