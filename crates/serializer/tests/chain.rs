use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vista_config::SerializerConfig;
use vista_model::{Value, object};
use vista_serializer::{
    Context, JsonEncoder, Normalize, Normalizer, ObjectNormalizer, Primitive, Serializer,
    SerializerError, SupportedTypes, TypeMatcher,
};

#[derive(Debug)]
pub struct Account {
    login: String,
    email: String,
    manager: Option<Arc<Account>>,
}

#[object(name = "test.account")]
impl Account {
    #[field(groups("public", "admin"))]
    pub fn login(&self) -> &str {
        &self.login
    }

    #[field(groups("admin"))]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[field(groups("admin"))]
    pub fn manager(&self) -> Option<Arc<Account>> {
        self.manager.clone()
    }
}

#[derive(Debug)]
pub struct Reading {
    value: f64,
}

#[object(name = "test.reading")]
impl Reading {
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Renders accounts as their login, counting how often `supports` is asked.
#[derive(Debug, Default)]
struct LoginOnly {
    asked: AtomicUsize,
    cacheable: bool,
}

impl Normalizer for LoginOnly {
    fn supports(&self, _: &Value, _: Option<&str>, _: &Context) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn normalize(
        &self,
        value: &Value,
        _: Option<&str>,
        _: &Context,
        _: &dyn Normalize,
    ) -> Result<Primitive, SerializerError> {
        let account = value.as_object().unwrap().as_any().downcast_ref::<Account>().unwrap();
        Ok(json!(account.login))
    }

    fn supported_types(&self, _: Option<&str>) -> SupportedTypes {
        SupportedTypes::new().with(TypeMatcher::Type("test.account"), self.cacheable)
    }
}

fn account(login: &str, manager: Option<Arc<Account>>) -> Value {
    Value::object(Arc::new(Account {
        login: login.to_owned(),
        email: format!("{login}@example.com"),
        manager,
    }))
}

fn serializer() -> Serializer {
    Serializer::builder().normalizer(ObjectNormalizer::new()).encoder(JsonEncoder).build()
}

#[test]
fn nested_objects_are_normalized_recursively() {
    let boss = Arc::new(Account { login: "boss".into(), email: "b@x.io".into(), manager: None });
    let out =
        serializer().normalize(&account("ann", Some(boss)), None, &Context::new()).unwrap();

    assert_eq!(
        out,
        json!({
            "login": "ann",
            "email": "ann@example.com",
            "manager": { "login": "boss", "email": "b@x.io", "manager": null }
        })
    );
}

#[test]
fn group_filter_drops_other_fields() {
    let context = Context::new().with_groups(["public"]);
    let out = serializer().normalize(&account("ann", None), None, &context).unwrap();
    assert_eq!(out, json!({ "login": "ann" }));
}

#[test]
fn max_depth_skips_deeper_objects() {
    let boss = Arc::new(Account { login: "boss".into(), email: "b@x.io".into(), manager: None });
    let context = Context::new().with_max_depth(0);
    let out = serializer().normalize(&account("ann", Some(boss)), None, &context).unwrap();

    assert_eq!(out, json!({ "login": "ann", "email": "ann@example.com" }));
}

#[test]
fn collections_are_converted_in_place() {
    let mut map = BTreeMap::new();
    map.insert("who".to_owned(), account("ann", None));
    let value = Value::List(vec![Value::Int(-1), Value::UInt(2), Value::Map(map)]);

    let out = serializer()
        .normalize(&value, None, &Context::new().with_groups(["public"]))
        .unwrap();
    assert_eq!(out, json!([-1, 2, { "who": { "login": "ann" } }]));
}

#[test]
fn non_finite_floats_are_rejected() {
    let value = Value::object(Arc::new(Reading { value: f64::NAN }));
    let err = serializer().normalize(&value, None, &Context::new()).unwrap_err();
    assert!(matches!(err, SerializerError::InvalidNumber { .. }));
}

#[test]
fn objects_without_normalizer_fail() {
    let bare = Serializer::builder().build();
    let err = bare.normalize(&account("ann", None), None, &Context::new()).unwrap_err();

    assert!(matches!(err, SerializerError::NotNormalizable { type_name: "test.account", .. }));
    let scalar = bare.normalize(&Value::Bool(true), None, &Context::new()).unwrap();
    assert_eq!(scalar, Primitive::Bool(true));
}

#[test]
fn unknown_formats_are_reported() {
    let err = serializer().serialize(&Value::Null, Some("xml"), &Context::new()).unwrap_err();
    assert!(matches!(err, SerializerError::UnsupportedFormat { format, .. } if format == "xml"));
    assert!(serializer().supports_format("json"));
}

#[test]
fn earlier_normalizers_take_precedence() {
    let serializer = Serializer::builder()
        .normalizer(LoginOnly::default())
        .normalizer(ObjectNormalizer::new())
        .build();

    let out = serializer.normalize(&account("ann", None), None, &Context::new()).unwrap();
    assert_eq!(out, json!("ann"));

    let reading = Value::object(Arc::new(Reading { value: 1.5 }));
    let out = serializer.normalize(&reading, None, &Context::new()).unwrap();
    assert_eq!(out, json!({ "value": 1.5 }));
}

#[test]
fn cacheable_supports_is_asked_once_per_type() {
    let login = Arc::new(LoginOnly { asked: AtomicUsize::new(0), cacheable: true });
    let serializer = Serializer::builder().shared_normalizer(login.clone()).build();

    for name in ["a", "b", "c"] {
        serializer.normalize(&account(name, None), Some("json"), &Context::new()).unwrap();
    }
    assert_eq!(login.asked.load(Ordering::SeqCst), 1);

    let uncached = Arc::new(LoginOnly::default());
    let serializer = Serializer::builder().shared_normalizer(uncached.clone()).build();
    for name in ["a", "b"] {
        serializer.normalize(&account(name, None), None, &Context::new()).unwrap();
    }
    assert_eq!(uncached.asked.load(Ordering::SeqCst), 2);
}

#[test]
fn config_supplies_defaults() {
    let config =
        SerializerConfig { json_pretty: true, max_depth: Some(0), ..SerializerConfig::default() };
    let serializer = Serializer::builder()
        .config(&config)
        .normalizer(ObjectNormalizer::new())
        .encoder(JsonEncoder)
        .build();

    let boss = Arc::new(Account { login: "boss".into(), email: "b@x.io".into(), manager: None });
    let json = serializer.serialize(&account("ann", Some(boss)), None, &Context::new()).unwrap();

    assert!(json.contains('\n'));
    assert!(!json.contains("boss"));
    assert_eq!(serializer.default_format(), "json");
}
