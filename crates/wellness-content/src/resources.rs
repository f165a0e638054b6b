use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContactType {
    Hotline,
    Hospital,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToolType {
    Tracking,
    Checklist,
    Technique,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub description: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub category: String,
    pub read_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelfHelpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfessionalService {
    pub name: String,
    pub website: String,
    pub description: String,
}

/// The mental-health resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResourceDirectory {
    pub emergency_contacts: Vec<EmergencyContact>,
    pub articles: Vec<Article>,
    pub self_help_tools: Vec<SelfHelpTool>,
    pub professional_help: Vec<ProfessionalService>,
}

static RESOURCES: LazyLock<ResourceDirectory> = LazyLock::new(|| ResourceDirectory {
    emergency_contacts: vec![
        contact(
            "Ministry of Health - Sehat Jiwa",
            "119 ext 8",
            "24-hour mental health counselling line",
            ContactType::Hotline,
        ),
        contact(
            "RSCM Jakarta - Psychiatry Unit",
            "(021) 31900001",
            "Psychiatric emergency services",
            ContactType::Hospital,
        ),
        contact(
            "Into The Light Indonesia",
            "081287877841",
            "Peer support for mental health",
            ContactType::Support,
        ),
    ],
    articles: vec![
        article(
            "Managing Stress at Work",
            "Practical tips for handling work pressure and keeping your life in balance.",
            "Stress Management",
            "5 minutes",
        ),
        article(
            "Why Mental Rest Matters",
            "Why mental breaks are essential for productivity and long-term health.",
            "Mental Health",
            "4 minutes",
        ),
        article(
            "Communicating Well with Colleagues",
            "Healthy communication strategies that reduce conflict at work.",
            "Working Relationships",
            "6 minutes",
        ),
    ],
    self_help_tools: vec![
        tool(
            "Daily Mood Journal",
            "Record your mood and what triggered it each day",
            ToolType::Tracking,
        ),
        tool(
            "Self-Care Checklist",
            "A list of activities that keep your mental health on track day to day",
            ToolType::Checklist,
        ),
        tool(
            "5-4-3-2-1 Grounding",
            "A quick technique for handling acute anxiety",
            ToolType::Technique,
        ),
    ],
    professional_help: vec![
        service(
            "Indonesian Psychological Association (HIMPSI)",
            "https://himpsi.or.id",
            "Directory of licensed psychologists in Indonesia",
        ),
        service(
            "Indonesian Psychiatric Association",
            "https://ipsi.or.id",
            "Directory of psychiatrists in Indonesia",
        ),
        service(
            "SehatMental.id",
            "https://sehatmental.id",
            "Online psychologist consultations",
        ),
    ],
});

pub fn mental_health_resources() -> &'static ResourceDirectory {
    &RESOURCES
}

fn contact(name: &str, phone: &str, description: &str, contact_type: ContactType) -> EmergencyContact {
    EmergencyContact {
        name: name.to_string(),
        phone: phone.to_string(),
        description: description.to_string(),
        contact_type,
    }
}

fn article(title: &str, summary: &str, category: &str, read_time: &str) -> Article {
    Article {
        title: title.to_string(),
        summary: summary.to_string(),
        category: category.to_string(),
        read_time: read_time.to_string(),
    }
}

fn tool(name: &str, description: &str, tool_type: ToolType) -> SelfHelpTool {
    SelfHelpTool {
        name: name.to_string(),
        description: description.to_string(),
        tool_type,
    }
}

fn service(name: &str, website: &str, description: &str) -> ProfessionalService {
    ProfessionalService {
        name: name.to_string(),
        website: website.to_string(),
        description: description.to_string(),
    }
}
