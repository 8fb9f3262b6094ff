//! Lifecycle hooks
//!
//! Optional async callbacks a schema can declare around create, update and destroy. Every hook
//! is awaited; an error returned from a hook aborts the operation with [`ModelError::Hook`].
//!
//! Argument shapes:
//!
//! | hook             | arguments                                   |
//! |------------------|---------------------------------------------|
//! | `before_create`  | fields as given                             |
//! | `after_create`   | created instance, fields as given           |
//! | `before_update`  | current instance (if any), filtered changes |
//! | `after_update`   | updated instance, filtered changes          |
//! | `before_destroy` | current instance (if any)                   |
//! | `after_destroy`  | nothing                                     |

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::errors::ModelError;
use crate::instance::Instance;
use crate::Fields;

/// Future returned by every hook
pub type HookFuture = BoxFuture<'static, anyhow::Result<()>>;

/// A hook taking `A`
pub type Hook<A> = Arc<dyn Fn(A) -> HookFuture + Send + Sync>;

#[derive(Clone, Default)]
pub struct Hooks {
    before_create: Option<Hook<Fields>>,
    after_create: Option<Hook<(Instance, Fields)>>,
    before_update: Option<Hook<(Option<Instance>, Fields)>>,
    after_update: Option<Hook<(Instance, Fields)>>,
    before_destroy: Option<Hook<Option<Instance>>>,
    after_destroy: Option<Hook<()>>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("before_create", &self.before_create.is_some())
            .field("after_create", &self.after_create.is_some())
            .field("before_update", &self.before_update.is_some())
            .field("after_update", &self.after_update.is_some())
            .field("before_destroy", &self.before_destroy.is_some())
            .field("after_destroy", &self.after_destroy.is_some())
            .finish()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before_create<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Fields) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.before_create = Some(Arc::new(move |fields: Fields| -> HookFuture {
            Box::pin(hook(fields))
        }));
        self
    }

    pub fn after_create<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Instance, Fields) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.after_create = Some(Arc::new(move |(instance, fields): (Instance, Fields)| -> HookFuture {
            Box::pin(hook(instance, fields))
        }));
        self
    }

    pub fn before_update<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Option<Instance>, Fields) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.before_update = Some(Arc::new(
            move |(existing, changes): (Option<Instance>, Fields)| -> HookFuture {
                Box::pin(hook(existing, changes))
            },
        ));
        self
    }

    pub fn after_update<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Instance, Fields) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.after_update = Some(Arc::new(move |(instance, changes): (Instance, Fields)| -> HookFuture {
            Box::pin(hook(instance, changes))
        }));
        self
    }

    pub fn before_destroy<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Option<Instance>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.before_destroy = Some(Arc::new(move |existing: Option<Instance>| -> HookFuture {
            Box::pin(hook(existing))
        }));
        self
    }

    pub fn after_destroy<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.after_destroy = Some(Arc::new(move |(): ()| -> HookFuture { Box::pin(hook()) }));
        self
    }

    pub fn has_before_update(&self) -> bool {
        self.before_update.is_some()
    }

    pub fn has_before_destroy(&self) -> bool {
        self.before_destroy.is_some()
    }

    pub(crate) async fn run_before_create(&self, fields: &Fields) -> Result<(), ModelError> {
        run("before_create", &self.before_create, || fields.clone()).await
    }

    pub(crate) async fn run_after_create(
        &self,
        instance: &Instance,
        fields: &Fields,
    ) -> Result<(), ModelError> {
        run("after_create", &self.after_create, || {
            (instance.clone(), fields.clone())
        })
        .await
    }

    pub(crate) async fn run_before_update(
        &self,
        existing: Option<Instance>,
        changes: &Fields,
    ) -> Result<(), ModelError> {
        run("before_update", &self.before_update, || {
            (existing, changes.clone())
        })
        .await
    }

    pub(crate) async fn run_after_update(
        &self,
        instance: &Instance,
        changes: &Fields,
    ) -> Result<(), ModelError> {
        run("after_update", &self.after_update, || {
            (instance.clone(), changes.clone())
        })
        .await
    }

    pub(crate) async fn run_before_destroy(
        &self,
        existing: Option<Instance>,
    ) -> Result<(), ModelError> {
        run("before_destroy", &self.before_destroy, || existing).await
    }

    pub(crate) async fn run_after_destroy(&self) -> Result<(), ModelError> {
        run("after_destroy", &self.after_destroy, || ()).await
    }
}

/// Invoke a declared hook; arguments are only built when the hook exists.
async fn run<A>(
    name: &'static str,
    hook: &Option<Hook<A>>,
    args: impl FnOnce() -> A,
) -> Result<(), ModelError> {
    match hook {
        Some(hook) => hook(args())
            .await
            .map_err(|source| ModelError::hook(name, source)),
        None => Ok(()),
    }
}
