use crate::person::Person;
use std::sync::Arc;
use vista_model::{CacheableViewModel, ViewModel, object};

#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    department: String,
    members: Vec<Arc<Person>>,
    lead: Option<Arc<Person>>,
}

#[object(normalizable, name = "Team")]
impl Team {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn members(&self) -> &[Arc<Person>] {
        &self.members
    }

    pub fn team_lead(&self) -> Option<Arc<Person>> {
        self.lead.clone()
    }

    pub const fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl Team {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        members: impl IntoIterator<Item = Person>,
        lead: Option<Person>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            members: members.into_iter().map(Arc::new).collect(),
            lead: lead.map(Arc::new),
        }
    }
}

#[derive(Debug)]
pub struct TeamViewModel {
    team: Arc<Team>,
}

impl ViewModel for TeamViewModel {
    type Entity = Team;

    fn from_entity(team: Arc<Team>) -> Self {
        Self { team }
    }
}

#[object(view_model, name = "TeamViewModel")]
impl TeamViewModel {
    #[field(rename = "teamName")]
    pub fn name(&self) -> &str {
        &self.team.name
    }

    #[field(rename = "dept")]
    pub fn department(&self) -> &str {
        &self.team.department
    }

    #[field(rename = "teamMembers")]
    pub fn members(&self) -> &[Arc<Person>] {
        &self.team.members
    }

    #[field(rename = "lead")]
    pub fn team_lead(&self) -> Option<Arc<Person>> {
        self.team.team_lead()
    }

    #[field(rename = "size")]
    pub fn team_size(&self) -> usize {
        self.team.member_count()
    }

    /// Mean member age rounded to one decimal, `0.0` for an empty team.
    pub fn get_average_age(&self) -> f64 {
        let members = &self.team.members;
        let Ok(count) = u32::try_from(members.len()) else {
            return 0.0;
        };
        if count == 0 {
            return 0.0;
        }

        let total: u32 = members.iter().map(|member| member.age()).sum();
        (f64::from(total) / f64::from(count) * 10.0).round() / 10.0
    }
}

impl CacheableViewModel for TeamViewModel {
    fn cache_key(&self) -> String {
        format!("team:{}:{}", self.team.name, self.team.members.len())
    }
}
