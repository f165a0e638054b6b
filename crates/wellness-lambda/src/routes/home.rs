use axum::{Extension, Json};
use serde::Serialize;

use wellness_content::Section;
use wellness_core::models::Identity;

use crate::view::View;

#[derive(Serialize)]
pub struct ModuleLink {
    slug: &'static str,
    title: &'static str,
    path: String,
}

#[derive(Serialize)]
pub struct WelcomeProps {
    user: Option<String>,
    modules: Vec<ModuleLink>,
}

/// Landing page: who is signed in, and where the portal's pages live.
pub async fn welcome(Extension(identity): Extension<Identity>) -> Json<View<WelcomeProps>> {
    let mut modules = vec![
        ModuleLink {
            slug: "psychological-module",
            title: "Psychological Module",
            path: "/psychological-module".to_string(),
        },
        ModuleLink {
            slug: "stress-assessment",
            title: "Stress Assessment",
            path: "/stress-assessment".to_string(),
        },
    ];
    modules.extend(Section::ALL.iter().map(|section| ModuleLink {
        slug: section.slug(),
        title: section.title(),
        path: format!("/{}", section.slug()),
    }));

    Json(View::new(
        "welcome",
        WelcomeProps {
            user: identity.user_id().map(str::to_string),
            modules,
        },
    ))
}
