//! End-to-end scenarios for `ReaderTaskResult` pipelines.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use undertow::effect::from_result;
use undertow::effect::prelude::*;
use undertow::testing::MockEnv;
use undertow::{assert_left, assert_left_eq, assert_right};

#[derive(Debug, Clone, PartialEq)]
struct Limits {
    limit: i32,
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

#[derive(Debug, Clone)]
struct Directory {
    users: Vec<User>,
    lookups: Arc<AtomicUsize>,
}

impl Directory {
    fn with_users(users: Vec<User>) -> Self {
        Directory {
            users,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn find(&self, id: u32) -> Option<User> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.users.iter().find(|user| user.id == id).cloned()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum AppError {
    NotFound(u32),
    Forbidden(String),
}

#[tokio::test]
async fn scenario_a_asks_then_predicate() {
    let effect = asks::<_, String, Limits, _>(|env: &Limits| env.limit)
        .and_then(from_predicate(|n: &i32| *n > 5, |_| "too small".to_string()));

    assert_eq!(effect.run(&Limits { limit: 10 }).await, Ok(10));
    assert_eq!(
        effect.run(&Limits { limit: 2 }).await,
        Err("too small".to_string())
    );
}

#[tokio::test]
async fn scenario_b_or_else_recovers() {
    let effect =
        left::<i32, _, Limits>("boom".to_string()).or_else(|_| right::<_, String, Limits>(42));

    assert_eq!(effect.run(&Limits { limit: 0 }).await, Ok(42));
    assert_eq!(effect.run(&Limits { limit: 99 }).await, Ok(42));
}

#[tokio::test]
async fn scenario_c_from_option() {
    let lift = from_result::from_option::<ReaderTaskResultK<String, Limits>, i32, _>(|| {
        "none".to_string()
    });
    let env = Limits { limit: 0 };

    assert_eq!(lift(Some(7)).run(&env).await, Ok(7));
    assert_eq!(lift(None).run(&env).await, Err("none".to_string()));
}

#[tokio::test]
async fn failed_lookup_skips_later_stages() {
    let directory = Directory::with_users(vec![User {
        id: 1,
        name: "ada".to_string(),
    }]);
    let stages = Arc::new(AtomicUsize::new(0));

    let load = |id: u32| {
        asks::<_, AppError, Directory, _>(move |dir: &Directory| dir.find(id))
            .and_then(move |found| from_option(found, || AppError::NotFound(id)))
    };

    let counter = Arc::clone(&stages);
    let greet = move |id: u32| {
        let counter = Arc::clone(&counter);
        load(id).map(move |user| {
            counter.fetch_add(1, Ordering::SeqCst);
            format!("hello {}", user.name)
        })
    };

    assert_eq!(assert_right!(greet(1).run(&directory).await), "hello ada");
    assert_left_eq!(greet(2).run(&directory).await, AppError::NotFound(2));
    assert_eq!(stages.load(Ordering::SeqCst), 1);
    assert_eq!(directory.lookups.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn authorization_pipeline_with_context() {
    let env = MockEnv::new()
        .with(|| "admin".to_string())
        .with(|| {
            Directory::with_users(vec![User {
                id: 7,
                name: "grace".to_string(),
            }])
        })
        .build();
    type Env = (((), String), Directory);

    let authorize = |id: u32| {
        asks::<_, AppError, Env, _>(|((_, role), _): &Env| role.clone())
            .filter_or_else(|role| role == "admin", AppError::Forbidden)
            .and_then(move |_| asks(move |(_, dir): &Env| dir.find(id)))
            .and_then(move |found| from_option(found, || AppError::NotFound(id)))
            .context(format!("loading user {id}"))
    };

    let user = assert_right!(authorize(7).run(&env).await);
    assert_eq!(user.name, "grace");

    let err = assert_left!(authorize(8).run(&env).await);
    assert_eq!(err.inner(), &AppError::NotFound(8));
    assert_eq!(err.context_trail(), &["loading user 8"]);

    let ((unit, _), directory) = env.clone();
    let guest = ((unit, "guest".to_string()), directory);
    let err = assert_left!(authorize(7).run(&guest).await);
    assert_eq!(err.inner(), &AppError::Forbidden("guest".to_string()));
}

#[tokio::test]
async fn fold_is_total_exit_point() {
    let describe = asks::<_, String, Limits, _>(|env: &Limits| env.limit)
        .filter_or_else(|n| *n >= 0, |n| format!("{n} is negative"))
        .fold(|e| format!("error: {e}"), |n| format!("limit {n}"));

    assert_eq!(describe.run(&Limits { limit: 3 }).run().await, "limit 3");
    assert_eq!(
        describe.run(&Limits { limit: -1 }).run().await,
        "error: -1 is negative"
    );
}
