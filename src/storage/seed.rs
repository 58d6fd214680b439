use crate::model::{Droid, Gender, Human, User};
use rand::Rng;

/// Users `1..=count`, named `user {i}` and aged `i * 10`.
pub fn seed_users<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<User> {
    (1..=count as u64)
        .map(|i| {
            let gender = Gender::random(rng);
            User::new(i, format!("user {}", i), (i * 10) as f64, gender)
        })
        .collect()
}

pub fn seed_humans<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Human> {
    (1..=count)
        .map(|i| Human {
            name: format!("human {}", i),
            gender: Gender::random(rng),
        })
        .collect()
}

pub fn seed_droids(count: usize) -> Vec<Droid> {
    (1..=count)
        .map(|i| Droid {
            name: format!("droid {}", i),
            function: format!("function {}", i),
        })
        .collect()
}
