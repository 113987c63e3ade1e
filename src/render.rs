use crate::notes::{NOTES_SEGMENT, PROFILE_DESCRIPTION, PROFILE_TITLE};
use crate::profile::ProfileView;
use axum::response::Html;
use serde::Serialize;
use thiserror::Error;

const PROFILE_TEMPLATE_NAME: &str = "profile.html";
const PROFILE_TEMPLATE: &str = include_str!("../templates/profile.html");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaTag {
    Title { title: &'static str },
    Named { name: &'static str, content: &'static str },
}

#[derive(Debug, Error)]
#[error("error rendering template: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Page metadata for the profile route. Does not depend on which user is shown.
pub fn meta() -> Vec<MetaTag> {
    vec![
        MetaTag::Title {
            title: PROFILE_TITLE,
        },
        MetaTag::Named {
            name: "description",
            content: PROFILE_DESCRIPTION,
        },
    ]
}

/// `current_path` with the notes segment appended, without doubling a trailing slash.
pub fn notes_href(current_path: &str) -> String {
    format!("{}/{NOTES_SEGMENT}", current_path.trim_end_matches('/'))
}

#[derive(Debug)]
pub struct Renderer {
    env: minijinja::Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Renderer, RenderError> {
        let mut env = minijinja::Environment::new();
        // `.html` templates are auto-escaped
        env.add_template(PROFILE_TEMPLATE_NAME, PROFILE_TEMPLATE)?;

        Ok(Renderer { env })
    }

    pub fn render_profile(
        &self,
        view: &ProfileView,
        current_path: &str,
    ) -> Result<Html<String>, RenderError> {
        let html = self
            .env
            .get_template(PROFILE_TEMPLATE_NAME)?
            .render(minijinja::context! {
                meta => meta(),
                heading => view.display_name(),
                notes_href => notes_href(current_path),
            })?;

        Ok(Html(html))
    }
}
