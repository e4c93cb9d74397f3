//! Server-rendered pages.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Handlers build a [`View`] (template name plus JSON view-model) and render
//! it through [`Templates::render`].

use axum::response::Html;
use awe_db::models::user::User;
use handlebars::{handlebars_helper, Handlebars};
use serde_json::{json, Value};

use crate::error::AppResult;

pub const BLOGS: &str = "blogs";
pub const BLOG: &str = "blog";
pub const REGISTER: &str = "register";
pub const SIGNIN: &str = "signin";
pub const MANAGE_COMMENTS: &str = "manage_comments";
pub const MANAGE_BLOGS: &str = "manage_blogs";
pub const MANAGE_BLOG_EDIT: &str = "manage_blog_edit";
pub const MANAGE_USERS: &str = "manage_users";

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../templates/header.hbs")),
    ("footer", include_str!("../templates/footer.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    (BLOGS, include_str!("../templates/blogs.hbs")),
    (BLOG, include_str!("../templates/blog.hbs")),
    (REGISTER, include_str!("../templates/register.hbs")),
    (SIGNIN, include_str!("../templates/signin.hbs")),
    (MANAGE_COMMENTS, include_str!("../templates/manage_comments.hbs")),
    (MANAGE_BLOGS, include_str!("../templates/manage_blogs.hbs")),
    (MANAGE_BLOG_EDIT, include_str!("../templates/manage_blog_edit.hbs")),
    (MANAGE_USERS, include_str!("../templates/manage_users.hbs")),
];

handlebars_helper!(inc: |n: i64| n + 1);
handlebars_helper!(dec: |n: i64| n - 1);

/// A template name and the model it renders.
#[derive(Debug)]
pub struct View {
    pub template: &'static str,
    pub model: Value,
}

impl View {
    pub fn new(template: &'static str, model: Value) -> Self {
        Self { template, model }
    }

    /// A view with an empty model.
    pub fn empty(template: &'static str) -> Self {
        Self::new(template, json!({}))
    }

    /// Expose the signed-in user to the shared header as `current_user`.
    pub fn with_user(mut self, user: Option<&User>) -> Self {
        if let (Some(user), Value::Object(map)) = (user, &mut self.model) {
            map.insert(
                "current_user".to_string(),
                json!({ "id": user.id, "name": user.name, "admin": user.admin }),
            );
        }
        self
    }
}

/// Registry of every page template.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_helper("inc", Box::new(inc));
        registry.register_helper("dec", Box::new(dec));
        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, *source)?;
        }
        Ok(Self { registry })
    }

    pub fn render(&self, view: &View) -> AppResult<Html<String>> {
        let html = self.registry.render(view.template, &view.model)?;
        Ok(Html(html))
    }
}
