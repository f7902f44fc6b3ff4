//! Backoffice sections: one owning page per entity plus the dashboard.

mod dashboard;
pub mod entities;
mod seed;

pub use dashboard::render_dashboard;
pub use entities::{BlogPost, Contact, FaqEntry, Lead, Product, Service};
pub use seed::SeedData;

use crossterm::event::{KeyEvent, MouseEvent};
use log::info;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::components::{ManagementPage, PageConfig, PageEvent};
use crate::i18n::LocaleStore;
use crate::records::{Collection, CollectionStore, Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminSection {
    Dashboard,
    Products,
    Services,
    Blog,
    Faq,
    Contacts,
    Leads,
}

impl AdminSection {
    pub const ALL: [AdminSection; 7] = [
        AdminSection::Dashboard,
        AdminSection::Products,
        AdminSection::Services,
        AdminSection::Blog,
        AdminSection::Faq,
        AdminSection::Contacts,
        AdminSection::Leads,
    ];

    /// Dictionary key of the section's menu label.
    pub fn title_key(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "admin.sections.dashboard",
            AdminSection::Products => "admin.sections.products",
            AdminSection::Services => "admin.sections.services",
            AdminSection::Blog => "admin.sections.blog",
            AdminSection::Faq => "admin.sections.faq",
            AdminSection::Contacts => "admin.sections.contacts",
            AdminSection::Leads => "admin.sections.leads",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Object-safe view of an entity screen so the shell can route to any of them.
pub trait AdminScreen {
    fn len(&self) -> usize;

    /// True while the screen owns the keyboard (open modal or search box).
    fn is_capturing(&self) -> bool;

    fn handle_key(&mut self, key: KeyEvent) -> PageEvent;

    fn handle_mouse(&mut self, event: MouseEvent, frame: Rect) -> PageEvent;

    fn render(&mut self, f: &mut Frame<'_>, frame: Rect, area: Rect, title: &str, locale: &LocaleStore);
}

/// Exclusive owner of one collection and the management page editing it.
pub struct EntityPage<R> {
    collection: Collection<R>,
    page: ManagementPage<R>,
}

impl<R: Record> EntityPage<R> {
    pub fn new(rows: Vec<R>, config: PageConfig<R>) -> Self {
        Self {
            collection: Collection::new(rows),
            page: ManagementPage::new(config),
        }
    }

    pub fn collection(&self) -> &Collection<R> {
        &self.collection
    }

    pub fn page(&self) -> &ManagementPage<R> {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut ManagementPage<R> {
        &mut self.page
    }

    pub fn insert(&mut self, entity: R) -> RecordId {
        self.page.insert(&mut self.collection, entity)
    }
}

impl<R: Record> AdminScreen for EntityPage<R> {
    fn len(&self) -> usize {
        self.collection.len()
    }

    fn is_capturing(&self) -> bool {
        self.page.is_open() || self.page.is_searching()
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageEvent {
        self.page.handle_key(key, &mut self.collection)
    }

    fn handle_mouse(&mut self, event: MouseEvent, frame: Rect) -> PageEvent {
        self.page.handle_mouse(event, frame, &mut self.collection)
    }

    fn render(&mut self, f: &mut Frame<'_>, frame: Rect, area: Rect, title: &str, locale: &LocaleStore) {
        self.page
            .render(f, frame, area, title, self.collection.rows(), locale);
    }
}

pub struct AdminPages {
    pub products: EntityPage<Product>,
    pub services: EntityPage<Service>,
    pub blog: EntityPage<BlogPost>,
    pub faq: EntityPage<FaqEntry>,
    pub contacts: EntityPage<Contact>,
    pub leads: EntityPage<Lead>,
}

impl AdminPages {
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            products: EntityPage::new(seed.products, entities::PRODUCTS),
            services: EntityPage::new(seed.services, entities::SERVICES),
            blog: EntityPage::new(seed.blog, entities::BLOG),
            faq: EntityPage::new(seed.faq, entities::FAQ),
            contacts: EntityPage::new(seed.contacts, entities::CONTACTS),
            leads: EntityPage::new(seed.leads, entities::LEADS),
        }
    }

    /// Entity screen behind a section; the dashboard has none.
    pub fn screen_mut(&mut self, section: AdminSection) -> Option<&mut dyn AdminScreen> {
        match section {
            AdminSection::Dashboard => None,
            AdminSection::Products => Some(&mut self.products),
            AdminSection::Services => Some(&mut self.services),
            AdminSection::Blog => Some(&mut self.blog),
            AdminSection::Faq => Some(&mut self.faq),
            AdminSection::Contacts => Some(&mut self.contacts),
            AdminSection::Leads => Some(&mut self.leads),
        }
    }

    pub fn count(&self, section: AdminSection) -> Option<usize> {
        match section {
            AdminSection::Dashboard => None,
            AdminSection::Products => Some(self.products.len()),
            AdminSection::Services => Some(self.services.len()),
            AdminSection::Blog => Some(self.blog.len()),
            AdminSection::Faq => Some(self.faq.len()),
            AdminSection::Contacts => Some(self.contacts.len()),
            AdminSection::Leads => Some(self.leads.len()),
        }
    }

    /// Records a newsletter sign-up from the public site.
    pub fn add_lead(&mut self, email: &str, origem: &str) -> RecordId {
        let lead = Lead {
            email: email.trim().to_string(),
            origem: origem.to_string(),
            data: chrono::Local::now().format("%Y-%m-%d").to_string(),
            ..Lead::default()
        };
        let id = self.leads.insert(lead);
        info!("Newsletter sign-up stored as lead {id}");
        id
    }
}
