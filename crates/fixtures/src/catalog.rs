use std::sync::Arc;
use vista_model::{ViewModel, object};

#[derive(Debug, Clone)]
pub struct Product {
    name: String,
    price: f64,
    in_stock: bool,
}

#[object(normalizable, name = "Product")]
impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    pub const fn is_in_stock(&self) -> bool {
        self.in_stock
    }
}

impl Product {
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, in_stock: bool) -> Self {
        Self { name: name.into(), price, in_stock }
    }
}

#[derive(Debug)]
pub struct ProductViewModel {
    product: Arc<Product>,
}

impl ViewModel for ProductViewModel {
    type Entity = Product;

    fn from_entity(product: Arc<Product>) -> Self {
        Self { product }
    }
}

#[object(view_model, name = "ProductViewModel")]
impl ProductViewModel {
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Dollar amount with two decimals and thousands separators, e.g. `$1,299.00`.
    pub fn formatted_price(&self) -> String {
        format_dollars(self.product.price)
    }

    pub fn is_available(&self) -> bool {
        self.product.in_stock
    }

    pub const fn category(&self) -> &'static str {
        "Electronics"
    }
}

fn format_dollars(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let rounds_to_zero = !fixed.bytes().any(|digit| matches!(digit, b'1'..=b'9'));
    let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[derive(Debug, Clone)]
pub struct User {
    name: String,
    email: String,
    age: u32,
}

#[object(normalizable, name = "User")]
impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn age(&self) -> u32 {
        self.age
    }
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self { name: name.into(), email: email.into(), age }
    }
}

#[derive(Debug)]
pub struct UserViewModel {
    user: Arc<User>,
}

impl ViewModel for UserViewModel {
    type Entity = User;

    fn from_entity(user: Arc<User>) -> Self {
        Self { user }
    }
}

#[object(view_model, name = "UserViewModel")]
impl UserViewModel {
    pub fn display_name(&self) -> &str {
        &self.user.name
    }

    pub fn contact_email(&self) -> &str {
        &self.user.email
    }

    pub fn is_adult(&self) -> bool {
        self.user.age >= 18
    }
}

/// Normalizable, but never bound to a view-model.
#[derive(Debug, Clone)]
pub struct Unbound {
    label: String,
}

#[object(normalizable, name = "Unbound")]
impl Unbound {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Unbound {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}
