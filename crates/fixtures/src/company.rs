use crate::person::Person;
use chrono::{Datelike, Utc};
use std::sync::Arc;
use vista_model::{ViewModel, object};

#[derive(Debug, Clone)]
pub struct Company {
    name: String,
    industry: String,
    owner: Arc<Person>,
    founded_year: i32,
}

#[object(normalizable, name = "Company")]
impl Company {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn owner(&self) -> Arc<Person> {
        Arc::clone(&self.owner)
    }

    pub const fn founded_year(&self) -> i32 {
        self.founded_year
    }
}

impl Company {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        owner: Person,
        founded_year: i32,
    ) -> Self {
        Self { name: name.into(), industry: industry.into(), owner: Arc::new(owner), founded_year }
    }
}

/// Business summary. The owner is handed on as an entity and gets its own view-model.
#[derive(Debug)]
pub struct CompanyViewModel {
    company: Arc<Company>,
}

impl ViewModel for CompanyViewModel {
    type Entity = Company;

    fn from_entity(company: Arc<Company>) -> Self {
        Self { company }
    }
}

#[object(view_model, name = "CompanyViewModel")]
impl CompanyViewModel {
    #[field(rename = "companyName")]
    pub fn name(&self) -> &str {
        &self.company.name
    }

    #[field(rename = "sector")]
    pub fn industry(&self) -> &str {
        &self.company.industry
    }

    #[field(rename = "ownerInfo")]
    pub fn owner(&self) -> Arc<Person> {
        self.company.owner()
    }

    /// Whole years since founding, relative to the current UTC year.
    pub fn get_years_in_business(&self) -> i32 {
        Utc::now().year() - self.company.founded_year
    }
}
