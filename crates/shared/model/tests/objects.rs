use proptest::prelude::*;
use std::sync::Arc;
use vista_model::{
    Capabilities, Field, LazyProxy, ModelError, Object, Proxy, Reflect, TypeRegistry, Value,
    ViewModel, object,
};

#[derive(Debug)]
pub struct Article {
    title: String,
    words: u32,
}

#[object(normalizable, name = "blog.article")]
impl Article {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn get_word_count(&self) -> u32 {
        self.words
    }

    #[field(groups("admin"))]
    pub fn has_draft(&self) -> bool {
        self.words < 100
    }
}

#[derive(Debug)]
pub struct ArticleCard {
    article: Arc<Article>,
}

impl ViewModel for ArticleCard {
    type Entity = Article;

    fn from_entity(article: Arc<Article>) -> Self {
        Self { article }
    }
}

#[object(view_model, name = "blog.article_card", rename_all = "snake_case")]
impl ArticleCard {
    pub fn headline(&self) -> String {
        self.article.title.to_uppercase()
    }

    pub fn reading_minutes(&self) -> u32 {
        self.article.words.div_ceil(200)
    }
}

#[derive(Debug)]
pub struct Comment;

#[object(normalizable, name = "blog.comment")]
impl Comment {}

fn article(title: &str, words: u32) -> Arc<Article> {
    Arc::new(Article { title: title.to_owned(), words })
}

fn keys(fields: &[Field]) -> Vec<&'static str> {
    fields.iter().map(Field::name).collect()
}

#[test]
fn accessors_follow_declaration_order_and_naming_rules() {
    let fields = article("Rust", 1200).fields().unwrap();
    assert_eq!(keys(&fields), ["title", "wordCount", "draft"]);
    assert_eq!(fields[2].groups(), ["admin"]);

    let card = ArticleCard::from_entity(article("Rust", 1200));
    assert_eq!(keys(&card.fields().unwrap()), ["headline", "reading_minutes"]);
}

#[test]
fn explicit_names_and_capabilities_are_static() {
    assert_eq!(Article::TYPE_INFO.name, "blog.article");
    assert_eq!(Article::TYPE_INFO.capabilities, Capabilities::NORMALIZABLE);
    assert_eq!(ArticleCard::TYPE_INFO.capabilities, Capabilities::VIEW_MODEL);
    assert!(Article::view_model().is_none());
}

#[test]
fn descriptor_builds_fresh_view_models() {
    let descriptor = ArticleCard::view_model().unwrap();
    let entity: Arc<dyn Object> = article("Rust", 1200);

    let first = descriptor.construct(Arc::clone(&entity)).unwrap();
    let second = descriptor.construct(entity).unwrap();

    assert_eq!(first.type_info().name, "blog.article_card");
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(matches!(
        first.fields().unwrap()[0].value(),
        Value::String(headline) if headline == "RUST"
    ));
}

#[test]
fn descriptor_rejects_foreign_entities() {
    let descriptor = ArticleCard::view_model().unwrap();
    let err = descriptor.construct(Arc::new(Comment)).unwrap_err();

    match &err {
        ModelError::EntityMismatch { expected, actual, .. } => {
            assert_eq!(*expected, "blog.article");
            assert_eq!(*actual, "blog.comment");
        },
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("blog.article_card"));
}

#[test]
fn proxies_resolve_to_registered_targets() {
    let types = TypeRegistry::builder().register::<Article>().build();
    let proxy = LazyProxy::new(|| Ok(article("Lazy", 50)));

    assert!(types.lookup(proxy.type_info().name).is_none());
    assert!(types.lookup(proxy.target_type().name).is_some());

    let target = proxy.as_proxy().unwrap().load().unwrap();
    assert_eq!(target.type_info(), Article::TYPE_INFO);
}

proptest! {
    #[test]
    fn group_filter_matches_only_shared_groups(wanted in "[a-z]{1,8}") {
        let field = Field::new("x", Value::Null).with_groups(&["admin", "public"]);
        let expected = wanted == "admin" || wanted == "public";
        prop_assert_eq!(field.in_any_group(&[wanted.as_str()]), expected);
    }

    #[test]
    fn accessor_values_track_entity_state(words in 0_u32..100_000) {
        let card = ArticleCard::from_entity(article("t", words));
        let fields = card.fields().unwrap();
        let minutes = u64::from(words.div_ceil(200));
        prop_assert!(matches!(fields[1].value(), Value::UInt(m) if *m == minutes));
    }
}
