//! Skill records and the read-only store the visualizer is fed with.
//!
//! Record order is significant: it determines angular placement in the spiral
//! layout and is the only ordering used anywhere. The store never reorders.

use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillRecord {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub description: Option<String>,
    pub years: Option<u32>,
    /// Proficiency in [0, 100].
    pub percent: Option<f32>,
}

impl SkillRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            description: None,
            years: None,
            percent: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SkillStoreError {
    #[error("duplicate skill id: {0}")]
    DuplicateId(String),
}

/// Ordered, immutable collection of skills with O(1) lookup by id.
pub struct SkillStore {
    records: Vec<SkillRecord>,
    index_by_id: FnvHashMap<String, usize>,
}

impl SkillStore {
    pub fn new(records: Vec<SkillRecord>) -> Result<Self, SkillStoreError> {
        let mut index_by_id = FnvHashMap::default();
        for (i, r) in records.iter().enumerate() {
            if index_by_id.insert(r.id.clone(), i).is_some() {
                return Err(SkillStoreError::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self {
            records,
            index_by_id,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&SkillRecord> {
        self.index_by_id.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    /// Display name for an id, falling back to the raw id for unknown skills.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|r| r.name.as_str()).unwrap_or(id)
    }
}

/// Canned portfolio content used as default input by the web frontend.
pub fn sample_skills() -> Vec<SkillRecord> {
    fn skill(
        id: &str,
        name: &str,
        color: &str,
        description: &str,
        years: u32,
        percent: f32,
    ) -> SkillRecord {
        SkillRecord {
            id: id.to_string(),
            name: name.to_string(),
            color: Some(color.to_string()),
            description: Some(description.to_string()),
            years: Some(years),
            percent: Some(percent),
        }
    }
    vec![
        skill("react", "React", "#61dafb", "Component UI with hooks", 5, 92.0),
        skill("ts", "TypeScript", "#3178c6", "Typed JavaScript", 4, 86.0),
        skill("next", "Next.js", "#000000", "Fullstack React framework", 3, 84.0),
        skill("node", "Node.js", "#8cc84b", "Server runtime", 5, 80.0),
        skill("tailwind", "Tailwind", "#06b6d4", "Utility CSS", 3, 78.0),
        skill(
            "python",
            "Python Programming",
            "#3776ab",
            "Scripting, automation, data analysis",
            6,
            90.0,
        ),
        skill("aws", "AWS", "#ff9900", "Cloud architecture & services", 4, 82.0),
        skill("data", "Data Analysis", "#2aa198", "Pandas, SQL, ETL", 5, 88.0),
        skill("web", "Web Development", "#e34c26", "HTML, CSS, JavaScript", 7, 92.0),
        skill(
            "systems",
            "Problem Solving",
            "#9b59b6",
            "Scalable systems & algorithms",
            8,
            94.0,
        ),
    ]
}
