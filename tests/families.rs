//! Derived constructors instantiated for library and user-defined families.

use undertow::effect::from_result::{filter_or_else, from_option, from_option_k, from_predicate};
use undertow::effect::{ReaderTK, ReaderTaskResultK, TaskResult, TaskResultK};
use undertow::io::{IOResult, IOResultK};
use undertow::typeclass::{Applicative, Apply, Chain, FromResult, Functor, Kind};

#[derive(Debug, Clone, PartialEq)]
enum ConfigError {
    Missing(&'static str),
    Invalid(String),
}

/// A family whose error type is fixed rather than a parameter.
#[derive(Debug)]
struct ConfigK;

impl Kind for ConfigK {
    type Of<A: Send + 'static> = IOResult<A, ConfigError>;
}

impl Functor for ConfigK {
    fn map<A, B, F>(fa: IOResult<A, ConfigError>, f: F) -> IOResult<B, ConfigError>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        IOResultK::<ConfigError>::map(fa, f)
    }
}

impl Apply for ConfigK {
    fn ap<A, B, F>(
        fab: IOResult<F, ConfigError>,
        fa: IOResult<A, ConfigError>,
    ) -> IOResult<B, ConfigError>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        IOResultK::<ConfigError>::ap(fab, fa)
    }
}

impl Applicative for ConfigK {
    fn of<A>(a: A) -> IOResult<A, ConfigError>
    where
        A: Clone + Send + Sync + 'static,
    {
        IOResult::right(a)
    }
}

impl Chain for ConfigK {
    fn chain<A, B, F>(fa: IOResult<A, ConfigError>, f: F) -> IOResult<B, ConfigError>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> IOResult<B, ConfigError> + Send + Sync + 'static,
    {
        fa.and_then(f)
    }
}

impl FromResult for ConfigK {
    type Error = ConfigError;

    fn from_result<A>(result: Result<A, ConfigError>) -> IOResult<A, ConfigError>
    where
        A: Clone + Send + Sync + 'static,
    {
        IOResult::from_result(result)
    }
}

#[test]
fn fixed_error_family_gets_derived_constructors() {
    let port = from_option::<ConfigK, u16, _>(|| ConfigError::Missing("port"));
    assert_eq!(port(Some(80)).run(), Ok(80));
    assert_eq!(port(None).run(), Err(ConfigError::Missing("port")));

    let unprivileged = filter_or_else::<ConfigK, u16, _, _>(
        |p| *p >= 1024,
        |p| ConfigError::Invalid(format!("port {p} is privileged")),
    );
    assert_eq!(unprivileged(port(Some(8080))).run(), Ok(8080));
    assert_eq!(
        unprivileged(port(Some(80))).run(),
        Err(ConfigError::Invalid("port 80 is privileged".to_string()))
    );
    assert_eq!(
        unprivileged(port(None)).run(),
        Err(ConfigError::Missing("port"))
    );
}

#[test]
fn from_option_k_with_multiple_arguments() {
    let lookup = from_option_k::<IOResultK<String>, (&'static str, char), usize, _, _>(
        || "not found".to_string(),
        |(haystack, needle)| haystack.find(needle),
    );

    assert_eq!(lookup(("undertow", 't')).run(), Ok(5));
    assert_eq!(lookup(("undertow", 'z')).run(), Err("not found".to_string()));
}

#[tokio::test]
async fn same_predicate_across_arities() {
    type Arity0 = TaskResultK<String>;
    type Arity1 = ReaderTaskResultK<String, u32>;
    type Arity2 = ReaderTK<Arity1, bool>;

    fn positive(n: &i64) -> bool {
        *n > 0
    }
    fn reject(n: i64) -> String {
        format!("{n} is not positive")
    }

    let p0 = from_predicate::<Arity0, i64, _, _>(positive, reject);
    let p1 = from_predicate::<Arity1, i64, _, _>(positive, reject);
    let p2 = from_predicate::<Arity2, i64, _, _>(positive, reject);

    assert_eq!(p0(3).run().await, Ok(3));
    assert_eq!(p1(3).run(&0).await, Ok(3));
    assert_eq!(p2(3).apply(&true).run(&0).await, Ok(3));

    let expected = Err("-1 is not positive".to_string());
    assert_eq!(p0(-1).run().await, expected);
    assert_eq!(p1(-1).run(&0).await, expected);
    assert_eq!(p2(-1).apply(&false).run(&0).await, expected);
}

#[tokio::test]
async fn filter_or_else_on_layered_family_reads_environment_first() {
    type App = ReaderTaskResultK<String, i64>;

    let non_zero = filter_or_else::<App, i64, _, _>(|n| *n != 0, |_| "zero".to_string());
    let from_env = non_zero(App::asks(|n: &i64| *n));

    assert_eq!(from_env.run(&5).await, Ok(5));
    assert_eq!(from_env.run(&0).await, Err("zero".to_string()));

    let already_failed = non_zero(App::from_m(TaskResult::left("earlier".to_string())));
    assert_eq!(already_failed.run(&5).await, Err("earlier".to_string()));
}
