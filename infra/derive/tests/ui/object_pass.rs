use std::sync::Arc;
use vista_model::{Object, Reflect, Value, ViewModel, object};

#[derive(Debug)]
pub struct Book {
    title: String,
    pages: u32,
}

#[object(normalizable)]
impl Book {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

#[derive(Debug)]
pub struct BookViewModel {
    book: Arc<Book>,
}

impl ViewModel for BookViewModel {
    type Entity = Book;

    fn from_entity(entity: Arc<Book>) -> Self {
        Self { book: entity }
    }
}

#[object(view_model, name = "demo.book_view")]
impl BookViewModel {
    #[field(rename = "t")]
    pub fn title(&self) -> String {
        self.book.title.to_uppercase()
    }

    pub fn is_long_read(&self) -> bool {
        self.book.pages > 500
    }

    #[field(skip)]
    pub fn book(&self) -> &Book {
        &self.book
    }
}

fn main() {
    assert_eq!(BookViewModel::TYPE_INFO.name, "demo.book_view");
    assert!(Book::TYPE_INFO.capabilities.contains(vista_model::Capabilities::NORMALIZABLE));

    let view = BookViewModel::from_entity(Arc::new(Book { title: "dune".into(), pages: 612 }));
    let fields = view.fields().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name(), "t");
    assert!(matches!(fields[0].value(), Value::String(s) if s == "DUNE"));
    assert_eq!(fields[1].name(), "longRead");
}
