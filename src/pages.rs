//! Askama page templates. Each page extends `base.html`, which renders the
//! navbar, footer and chat widget from [`Layout`].

use askama::Template;
use chrono::{Datelike, Utc};

use crate::catalog::Gallery;
use crate::chat::{seed_transcript, ChatMessage};
use crate::forms::careers::{Application, EXPERIENCE_BRACKETS, POSITIONS};
use crate::forms::contact::ContactForm;
use crate::forms::FieldErrors;
use crate::models::{
    BlogPost, ContactMethod, CoreValue, ProductSuite, SiteContent, SocialLink, TeamMember,
};
use crate::nav::Navbar;
use crate::submit::Receipt;

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/equilibrate-ai";

#[derive(Debug, Clone)]
pub struct Layout {
    pub nav: Navbar,
    pub socials: Vec<SocialLink>,
    pub chat: Vec<ChatMessage>,
    pub year: i32,
}

impl Layout {
    pub fn new(content: &SiteContent, path: &str) -> Self {
        Self {
            nav: Navbar::for_path(path),
            socials: content.socials.clone(),
            chat: seed_transcript(),
            year: Utc::now().year(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub features: Vec<CoreValue>,
    pub pillars: Vec<CoreValue>,
    pub products: Vec<ProductSuite>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub team: Vec<TeamMember>,
    pub values: Vec<CoreValue>,
}

#[derive(Template)]
#[template(path = "careers.html")]
pub struct CareersTemplate {
    pub layout: Layout,
    pub form: Application,
    pub banner: Option<&'static str>,
    pub errors: FieldErrors,
    pub submitted: Option<Receipt>,
    pub positions: &'static [&'static str],
    pub experience: &'static [(&'static str, &'static str)],
}

impl CareersTemplate {
    pub fn new(layout: Layout, form: Application) -> Self {
        Self {
            layout,
            form,
            banner: None,
            errors: FieldErrors::new(),
            submitted: None,
            positions: POSITIONS,
            experience: EXPERIENCE_BRACKETS,
        }
    }
}

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub layout: Layout,
    pub posts: Vec<BlogPost>,
    pub linkedin_url: &'static str,
}

#[derive(Template)]
#[template(path = "use_cases.html")]
pub struct UseCasesTemplate {
    pub layout: Layout,
    pub gallery: Gallery,
}

#[derive(Template)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub layout: Layout,
    pub suites: Vec<ProductSuite>,
    pub selected: ProductSuite,
}

impl ProductTemplate {
    pub fn is_selected(&self, suite: &ProductSuite) -> bool {
        self.selected.id == suite.id
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub methods: Vec<ContactMethod>,
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub banner: Option<&'static str>,
    pub submitted: Option<Receipt>,
}

impl ContactTemplate {
    pub fn new(layout: Layout, methods: Vec<ContactMethod>, form: ContactForm) -> Self {
        Self {
            layout,
            methods,
            form,
            errors: FieldErrors::new(),
            banner: None,
            submitted: None,
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}
