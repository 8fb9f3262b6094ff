//! Behavioral tests for configured models
//!
//! Runs every model operation against the in-memory backend: CRUD, search descriptors,
//! lifecycle hooks, relation expansion and instance persistence.

use modelhaus::prelude::*;
use std::sync::{Arc, Mutex};

const ACCOUNT_CREATED_AT: &str = "2024-01-01T00:00:00+00:00";
const USER_CREATED_AT: &str = "2024-01-02T00:00:00+00:00";

struct Fixture {
    connection: Arc<MemoryConnection>,
    accounts: Model,
    users: Model,
    account: Instance,
}

impl Fixture {
    fn account_id(&self) -> Value {
        self.account.id().cloned().unwrap()
    }

    /// Create a user owned by the fixture account.
    async fn user(&self, name: &str) -> Instance {
        self.users
            .create(fields(json!({ "accountId": self.account_id(), "name": name })))
            .await
            .unwrap()
    }

    async fn user_rows(&self) -> usize {
        self.connection.rows("users").await.len()
    }
}

fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap()
}

fn memory() -> Arc<MemoryConnection> {
    Arc::new(
        MemoryConnection::new()
            .with_default("accounts", "created_at", json!(ACCOUNT_CREATED_AT))
            .with_default("users", "is_admin", json!(false))
            .with_default("users", "created_at", json!(USER_CREATED_AT)),
    )
}

fn user_schema(connection: Arc<MemoryConnection>, accounts: &Model) -> Schema {
    Schema::new("User")
        .connection(connection)
        .table("users")
        .reference("account", Reference::new(accounts, "accountId"))
        .columns(["id", "accountId", "name", "isAdmin", "createdAt"])
}

async fn setup_with_hooks(hooks: Hooks) -> Fixture {
    let connection = memory();

    let accounts = Model::configure(
        Schema::new("Account")
            .connection(connection.clone())
            .table("accounts")
            .columns(["id", "createdAt"]),
    )
    .unwrap();

    let users = Model::configure(user_schema(connection.clone(), &accounts).hooks(hooks)).unwrap();
    let account = accounts.create(Fields::new()).await.unwrap();

    Fixture {
        connection,
        accounts,
        users,
        account,
    }
}

async fn setup() -> Fixture {
    setup_with_hooks(Hooks::new()).await
}

/// Shared call log for hooks.
fn recorder<T>() -> Arc<Mutex<Vec<T>>> {
    Arc::new(Mutex::new(Vec::new()))
}

// ========================================
// CONFIGURATION
// ========================================

#[test]
fn test_model_displays_its_name() {
    let connection = memory();
    let users = Model::configure(
        Schema::new("User")
            .connection(connection)
            .table("users")
            .columns(["id"]),
    )
    .unwrap();

    assert_eq!(users.to_string(), "User");
    assert_eq!(format!("{}", users), "User");
}

#[test]
fn test_configure_requires_connection_columns_and_table() {
    let missing_connection = Model::configure(Schema::new("User").table("users").columns(["id"]));
    assert!(matches!(
        missing_connection,
        Err(ModelError::Configuration("connection"))
    ));

    let missing_columns = Model::configure(Schema::new("User").connection(memory()).table("users"));
    assert_eq!(missing_columns.unwrap_err().to_string(), "columns is required!");

    let missing_table = Model::configure(Schema::new("User").connection(memory()).columns(["id"]));
    assert_eq!(missing_table.unwrap_err().to_string(), "table is required!");
}

// ========================================
// CREATE / FIND
// ========================================

#[tokio::test]
async fn test_to_json_includes_fields_and_relations() {
    let f = setup().await;
    let user = f.user("Some User").await;

    assert_eq!(
        user.to_json(),
        json!({
            "id": user.id(),
            "isAdmin": false,
            "accountId": f.account_id(),
            "name": "Some User",
            "account": {
                "id": f.account_id(),
                "createdAt": ACCOUNT_CREATED_AT,
            },
            "createdAt": USER_CREATED_AT,
        })
    );
}

#[tokio::test]
async fn test_create_returns_materialized_instance() {
    let f = setup().await;
    let user = f.user("Some User").await;

    assert_eq!(user.class_name(), "User");
    assert!(user.id().is_some_and(Value::is_number));
    assert_eq!(user.get("name"), Some(&json!("Some User")));
    assert_eq!(f.user_rows().await, 1);
}

#[tokio::test]
async fn test_create_with_undeclared_field_fails_in_backend() {
    let f = setup().await;
    let err = f
        .users
        .create(fields(json!({ "name": "Ghost", "nickname": "boo" })))
        .await
        .unwrap_err();

    assert!(matches!(err, ModelError::Backend(_)));
    assert_eq!(f.user_rows().await, 0);
}

#[tokio::test]
async fn test_find_one_by_id() {
    let f = setup().await;
    let user = f.user("Test1").await;

    let found = f.users.find_one(Lookup::Id(user.id().cloned().unwrap())).await.unwrap();
    assert_eq!(found, Some(user.clone()));

    // numeric strings are accepted as ids
    let id = user.id().and_then(Value::as_i64).unwrap();
    let found = f.users.find_one(id.to_string()).await.unwrap();
    assert_eq!(found, Some(user));
}

#[tokio::test]
async fn test_find_one_by_descriptor() {
    let f = setup().await;
    let user = f.user("Some Dude").await;

    let found = f
        .users
        .find_one(Search::new().equals("name", "Some Dude"))
        .await
        .unwrap();
    assert_eq!(found.as_ref(), Some(&user));

    let lookup = Lookup::from_json(json!({ "where": { "name": { "equals": "Some Dude" } } })).unwrap();
    assert_eq!(f.users.find_one(lookup).await.unwrap(), Some(user));
}

#[tokio::test]
async fn test_find_one_returns_none_when_nothing_matches() {
    let f = setup().await;
    let found = f
        .users
        .find_one(Search::new().equals("name", "Test1"))
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_many_returns_every_match() {
    let f = setup().await;
    let u1 = f.user("User 1").await;
    let u2 = f.user("User 2").await;

    let result = f.users.find_many(Lookup::all()).await.unwrap();
    assert!(result.contains(&u1));
    assert!(result.contains(&u2));
}

#[tokio::test]
async fn test_find_many_orders_results() {
    let f = setup().await;
    let u1 = f.user("A").await;
    let u2 = f.user("Z").await;

    let result = f
        .users
        .find_many(Search::new().order("name", SortOrder::Desc))
        .await
        .unwrap();
    assert_eq!(result, vec![u2, u1]);
}

#[tokio::test]
async fn test_find_many_filters_results() {
    let f = setup().await;
    f.user("A").await;
    let u2 = f.user("Z").await;

    let result = f
        .users
        .find_many(Search::new().equals("name", "Z"))
        .await
        .unwrap();
    assert_eq!(result, vec![u2]);
}

#[tokio::test]
async fn test_find_many_combines_filters() {
    let f = setup().await;
    let mut created = Vec::new();
    for (name, is_admin) in [("James", true), ("Jim", true), ("Bob", false)] {
        let user = f
            .users
            .create(fields(json!({
                "accountId": f.account_id(),
                "name": name,
                "isAdmin": is_admin,
            })))
            .await
            .unwrap();
        created.push(user);
    }

    let result = f
        .users
        .find_many(Search::new().ilike("name", "j%").equals("isAdmin", true))
        .await
        .unwrap();
    assert_eq!(result.len(), 2);
    assert!(result.contains(&created[0]));
    assert!(result.contains(&created[1]));
}

#[tokio::test]
async fn test_find_many_chains_filter_and_order() {
    let f = setup().await;
    let zebra = f.user("John Zebra").await;
    let alligator = f.user("John Alligator").await;
    f.user("Mary Loo Hoo").await;

    let lookup = Lookup::from_json(json!({
        "where": { "name": { "like": "John%" } },
        "order": { "name": "asc" },
    }))
    .unwrap();

    let result = f.users.find_many(lookup).await.unwrap();
    assert_eq!(result, vec![alligator, zebra]);
}

#[tokio::test]
async fn test_find_many_limits_results() {
    let f = setup().await;
    let tim = f.user("Tim").await;
    f.user("Jane").await;
    f.user("Elizabeth").await;

    let result = f.users.find_many(Search::new().limit(1)).await.unwrap();
    assert_eq!(result, vec![tim]);
}

#[tokio::test]
async fn test_find_many_returns_empty_when_nothing_matches() {
    let f = setup().await;
    assert!(f.users.find_many(Lookup::all()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_field_is_reported_by_column_name() {
    let f = setup().await;
    let err = f
        .users
        .find_many(Search::new().equals("doesntExist", "value"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "No column \"doesnt_exist\" found in schema. Make sure \"doesnt_exist\" is defined in your list of columns in your configuration."
    );
}

#[tokio::test]
async fn test_construct_query_renders_storage_names() {
    let f = setup().await;
    let lookup = Search::new()
        .equals("createdAt", "value")
        .order("createdAt", SortOrder::Desc);

    let query = f.users.construct_query(lookup.into(), None).unwrap().to_query();
    assert_eq!(
        query.text,
        "SELECT \"users\".* FROM \"users\" WHERE (\"users\".\"created_at\" = $1) ORDER BY \"users\".\"created_at\" DESC"
    );
    assert_eq!(query.values, vec![json!("value")]);
}

// ========================================
// UPDATE / COUNT / DESTROY
// ========================================

#[tokio::test]
async fn test_update_targets_one_row() {
    let f = setup().await;
    let phil = f.user("Phil").await;
    let rebecca = f.user("Rebecca").await;

    let updated = f
        .users
        .update(Lookup::Id(phil.id().cloned().unwrap()), fields(json!({ "name": "Philip" })))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.get("name"), Some(&json!("Philip")));
    assert_eq!(updated.related("account"), Some(&f.account));

    let untouched = f
        .users
        .find_one(Lookup::Id(rebecca.id().cloned().unwrap()))
        .await
        .unwrap();
    assert_eq!(untouched, Some(rebecca));
}

#[tokio::test]
async fn test_update_ignores_undeclared_fields() {
    let f = setup().await;
    let user = f.user("Phil").await;

    let updated = f
        .users
        .update(
            Lookup::Id(user.id().cloned().unwrap()),
            fields(json!({ "name": "Philip", "nickname": "Pip" })),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.get("nickname"), None);

    let err = f
        .users
        .update(Lookup::all(), fields(json!({ "nickname": "Pip" })))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidDescriptor(_)));
}

#[tokio::test]
async fn test_update_without_match_returns_none() {
    let f = setup().await;
    let updated = f
        .users
        .update(999, fields(json!({ "name": "Nobody" })))
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_count_all_rows() {
    let f = setup().await;
    f.user("Person 1").await;
    f.user("Person 2").await;

    assert_eq!(f.users.count(Lookup::all()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_count_matching_rows() {
    let f = setup().await;
    f.user("Person 1").await;
    f.user("Person 2").await;

    let count = f
        .users
        .count(Search::new().equals("name", "Person 1"))
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_count_returns_zero_when_empty() {
    let f = setup().await;
    assert_eq!(f.users.count(Lookup::all()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_destroy_by_id() {
    let f = setup().await;
    let user = f.user("Some User").await;
    assert_eq!(f.users.count(Lookup::all()).await.unwrap(), 1);

    let removed = f.users.destroy(Lookup::Id(user.id().cloned().unwrap())).await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(f.users.count(Lookup::all()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_destroy_by_descriptor() {
    let f = setup().await;
    f.user("User 1").await;

    f.users
        .destroy(Search::new().equals("name", "User 1"))
        .await
        .unwrap();
    assert_eq!(f.users.count(Lookup::all()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_destroy_without_match_is_a_no_op() {
    let f = setup().await;
    f.user("User 1").await;

    let removed = f
        .users
        .destroy(Search::new().equals("name", "Doesnt match"))
        .await
        .unwrap();
    assert_eq!(removed, 0);
    assert_eq!(f.users.count(Lookup::all()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_destroy_all_requires_confirmation() {
    let f = setup().await;
    f.user("User 1").await;
    f.user("User 2").await;

    let skipped = f.users.destroy_all(DestroyAll::default()).await.unwrap();
    assert_eq!(skipped, None);
    assert_eq!(f.user_rows().await, 2);

    let removed = f
        .users
        .destroy_all(DestroyAll {
            yes_im_really_sure: true,
        })
        .await
        .unwrap();
    assert_eq!(removed, Some(2));
    assert_eq!(f.user_rows().await, 0);
}

// ========================================
// LIFECYCLE HOOKS
// ========================================

#[tokio::test]
async fn test_create_hooks_fire_once_with_fields() {
    let before = recorder::<Fields>();
    let after = recorder::<(Instance, Fields)>();

    let hooks = Hooks::new()
        .before_create({
            let before = before.clone();
            move |fields| {
                let before = before.clone();
                async move {
                    before.lock().unwrap().push(fields);
                    Ok(())
                }
            }
        })
        .after_create({
            let after = after.clone();
            move |instance, fields| {
                let after = after.clone();
                async move {
                    after.lock().unwrap().push((instance, fields));
                    Ok(())
                }
            }
        });

    let f = setup_with_hooks(hooks).await;
    let given = fields(json!({ "accountId": f.account_id(), "name": "Create Hooks" }));
    let user = f.users.create(given.clone()).await.unwrap();

    assert_eq!(*before.lock().unwrap(), vec![given.clone()]);
    assert_eq!(*after.lock().unwrap(), vec![(user, given)]);
}

#[tokio::test]
async fn test_update_hooks_see_existing_and_updated_rows() {
    let before = recorder::<(Option<Instance>, Fields)>();
    let after = recorder::<(Instance, Fields)>();

    let hooks = Hooks::new()
        .before_update({
            let before = before.clone();
            move |existing, changes| {
                let before = before.clone();
                async move {
                    before.lock().unwrap().push((existing, changes));
                    Ok(())
                }
            }
        })
        .after_update({
            let after = after.clone();
            move |updated, changes| {
                let after = after.clone();
                async move {
                    after.lock().unwrap().push((updated, changes));
                    Ok(())
                }
            }
        });

    let f = setup_with_hooks(hooks).await;
    let user = f.user("Before Hooks").await;
    let changes = fields(json!({ "name": "Update Hooks" }));

    let updated = f
        .users
        .update(Lookup::Id(user.id().cloned().unwrap()), changes.clone())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(*before.lock().unwrap(), vec![(Some(user), changes.clone())]);
    assert_eq!(*after.lock().unwrap(), vec![(updated, changes)]);
}

#[tokio::test]
async fn test_after_update_skipped_when_nothing_matched() {
    let after = recorder::<(Instance, Fields)>();
    let hooks = Hooks::new().after_update({
        let after = after.clone();
        move |updated, changes| {
            let after = after.clone();
            async move {
                after.lock().unwrap().push((updated, changes));
                Ok(())
            }
        }
    });

    let f = setup_with_hooks(hooks).await;
    f.users
        .update(404, fields(json!({ "name": "Nobody" })))
        .await
        .unwrap();

    assert!(after.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_destroy_hooks_fire_around_removal() {
    let before = recorder::<Option<Instance>>();
    let after = recorder::<()>();

    let hooks = Hooks::new()
        .before_destroy({
            let before = before.clone();
            move |existing| {
                let before = before.clone();
                async move {
                    before.lock().unwrap().push(existing);
                    Ok(())
                }
            }
        })
        .after_destroy({
            let after = after.clone();
            move || {
                let after = after.clone();
                async move {
                    after.lock().unwrap().push(());
                    Ok(())
                }
            }
        });

    let f = setup_with_hooks(hooks).await;
    let user = f.user("Destroy Hooks").await;

    f.users.destroy(Lookup::Id(user.id().cloned().unwrap())).await.unwrap();
    assert_eq!(*before.lock().unwrap(), vec![Some(user.clone())]);
    assert_eq!(after.lock().unwrap().len(), 1);

    // nothing left to remove: both hooks still run
    let removed = f.users.destroy(Search::new().equals("name", "Destroy Hooks")).await.unwrap();
    assert_eq!(removed, 0);
    assert_eq!(*before.lock().unwrap(), vec![Some(user), None]);
    assert_eq!(after.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_failing_hook_aborts_the_operation() {
    let hooks = Hooks::new().before_create(|fields: Fields| async move {
        if fields.contains_key("name") {
            anyhow::bail!("names are frozen");
        }
        Ok(())
    });

    let f = setup_with_hooks(hooks).await;
    let err = f
        .users
        .create(fields(json!({ "accountId": f.account_id(), "name": "Blocked" })))
        .await
        .unwrap_err();

    match err {
        ModelError::Hook { hook, source } => {
            assert_eq!(hook, "before_create");
            assert_eq!(source.to_string(), "names are frozen");
        }
        other => panic!("expected hook error, got {:?}", other),
    }
    assert_eq!(f.user_rows().await, 0);
}

// ========================================
// RELATIONS
// ========================================

#[tokio::test]
async fn test_relations_are_expanded_on_create() {
    let f = setup().await;
    let user = f.user("Some User").await;
    assert_eq!(user.related("account"), Some(&f.account));
}

#[tokio::test]
async fn test_relations_are_expanded_for_every_row() {
    let f = setup().await;
    f.user("Some User").await;
    f.user("Another user").await;

    let users = f.users.find_many(Lookup::all()).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].related("account"), Some(&f.account));
    assert_eq!(users[1].related("account"), Some(&f.account));
    assert_eq!(users[0].get("name"), Some(&json!("Some User")));
}

#[tokio::test]
async fn test_null_or_dangling_keys_resolve_to_none() {
    let f = setup().await;

    let orphan = f
        .users
        .create(fields(json!({ "name": "Orphan" })))
        .await
        .unwrap();
    assert_eq!(orphan.relations().get("account"), Some(&None));
    assert_eq!(orphan.to_json()["account"], Value::Null);

    let dangling = f
        .users
        .create(fields(json!({ "accountId": 999, "name": "Dangling" })))
        .await
        .unwrap();
    assert!(dangling.related("account").is_none());
}

#[tokio::test]
async fn test_reference_key_must_be_a_field() {
    let f = setup().await;
    let broken = Model::configure(
        Schema::new("Post")
            .connection(f.connection.clone())
            .table("posts")
            .columns(["id", "title"])
            .reference("author", Reference::new(&f.users, "authorId")),
    )
    .unwrap();

    let err = broken
        .create(fields(json!({ "title": "Hello" })))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::MissingForeignKey { ref reference, ref key } if reference == "author" && key == "authorId"
    ));
}

#[tokio::test]
async fn test_relations_resolve_through_accounts_model() {
    let f = setup().await;
    let second = f.accounts.create(Fields::new()).await.unwrap();
    let user = f
        .users
        .create(fields(json!({ "accountId": second.id(), "name": "Moved" })))
        .await
        .unwrap();

    assert_eq!(user.related("account"), Some(&second));
    assert_ne!(user.related("account"), Some(&f.account));
}

// ========================================
// INSTANCES
// ========================================

#[tokio::test]
async fn test_instance_displays_class_name() {
    let f = setup().await;
    let user = f.users.instance(fields(json!({ "name": "John" })));

    assert_eq!(user.to_string(), "User");
    assert_eq!(user.class_name(), "User");
}

#[tokio::test]
async fn test_save_creates_unpersisted_instance() {
    let f = setup().await;
    assert!(f.users.find_many(Lookup::all()).await.unwrap().is_empty());

    let mut user = f
        .users
        .instance(fields(json!({ "accountId": f.account_id(), "name": "Fred" })));
    user.save(Fields::new()).await.unwrap();

    assert!(user.is_persisted());
    let users = f.users.find_many(Lookup::all()).await.unwrap();
    assert_eq!(users, vec![user]);
}

#[tokio::test]
async fn test_save_updates_persisted_instance() {
    let f = setup().await;
    let mut user = f.user("A Person").await;

    user.set("name", "Another Person");
    user.save(Fields::new()).await.unwrap();

    let from_db = f.users.find_many(Lookup::all()).await.unwrap();
    assert_eq!(user.get("name"), Some(&json!("Another Person")));
    assert_eq!(from_db[0].get("name"), Some(&json!("Another Person")));
    assert_eq!(from_db.len(), 1);
}

#[tokio::test]
async fn test_save_merges_extra_fields() {
    let f = setup().await;
    let mut user = f.user("Admin To Be").await;

    user.save(fields(json!({ "isAdmin": true }))).await.unwrap();

    assert_eq!(user.get("isAdmin"), Some(&json!(true)));
    let admins = f
        .users
        .count(Search::new().equals("isAdmin", true))
        .await
        .unwrap();
    assert_eq!(admins, 1);
}

#[tokio::test]
async fn test_save_on_vanished_row_is_not_found() {
    let f = setup().await;
    let mut user = f.user("Gone").await;
    f.users.destroy(Lookup::Id(user.id().cloned().unwrap())).await.unwrap();

    let err = user.save(Fields::new()).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
}

#[tokio::test]
async fn test_instance_destroy_removes_row() {
    let f = setup().await;
    let user = f.user("Destroyed").await;

    assert_eq!(user.destroy().await.unwrap(), 1);
    assert!(f.users.find_many(Lookup::all()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_instance_deserializes_with_relations() {
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Account {
        id: i64,
        created_at: chrono::DateTime<chrono::Utc>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct User {
        name: String,
        is_admin: bool,
        account: Option<Account>,
    }

    let f = setup().await;
    let user: User = f.user("Typed").await.deserialize().unwrap();

    assert_eq!(user.name, "Typed");
    assert!(!user.is_admin);
    let account = user.account.unwrap();
    assert_eq!(Some(account.id), f.account_id().as_i64());
    assert_eq!(account.created_at.to_rfc3339(), ACCOUNT_CREATED_AT);
}

// ========================================
// REGISTRY
// ========================================

#[tokio::test]
async fn test_registry_supplies_connection_and_defaults() {
    let connection = memory();
    let mut modelhaus =
        ModelHaus::with_connection(connection.clone()).with_defaults(ModelsConfig { debug: true });

    let accounts = modelhaus
        .register(Schema::new("Account").table("accounts").columns(["id", "createdAt"]))
        .unwrap();
    let users = modelhaus
        .register(user_schema(connection, &accounts).debug(false))
        .unwrap();

    assert!(accounts.is_debug());
    assert!(!users.is_debug());

    let mut names = modelhaus.list_models();
    names.sort();
    assert_eq!(names, vec!["Account", "User"]);

    let account = modelhaus.model("Account").unwrap().create(Fields::new()).await.unwrap();
    assert_eq!(account.get("createdAt"), Some(&json!(ACCOUNT_CREATED_AT)));
    modelhaus.health_check().await.unwrap();
}

#[tokio::test]
async fn test_registry_rejects_duplicates_and_unknown_names() {
    let mut modelhaus = ModelHaus::with_connection(memory());
    let schema = Schema::new("Account").table("accounts").columns(["id"]);

    modelhaus.register(schema.clone()).unwrap();
    assert!(matches!(
        modelhaus.register(schema),
        Err(ModelHausError::ModelAlreadyRegistered(ref name)) if name == "Account"
    ));

    modelhaus.unregister("Account").unwrap();
    assert!(matches!(
        modelhaus.model("Account"),
        Err(ModelHausError::ModelNotFound(_))
    ));

    let err = modelhaus
        .register(Schema::new("Broken").columns(["id"]))
        .unwrap_err();
    assert_eq!(err.to_string(), "table is required!");
}
