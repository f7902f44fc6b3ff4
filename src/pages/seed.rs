use std::collections::HashSet;

use serde::Deserialize;

use super::entities::{BlogPost, Contact, FaqEntry, Lead, Product, Service};
use crate::records::{Record, RecordId};

const BUNDLED_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed collection `{collection}` repeats id {id}")]
    DuplicateId {
        collection: &'static str,
        id: RecordId,
    },
}

/// Sample collections every run starts from. Changes live only in memory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub services: Vec<Service>,
    pub blog: Vec<BlogPost>,
    pub faq: Vec<FaqEntry>,
    pub contacts: Vec<Contact>,
    pub leads: Vec<Lead>,
}

impl SeedData {
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_json(src: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(src)?;
        check_unique("products", &seed.products)?;
        check_unique("services", &seed.services)?;
        check_unique("blog", &seed.blog)?;
        check_unique("faq", &seed.faq)?;
        check_unique("contacts", &seed.contacts)?;
        check_unique("leads", &seed.leads)?;
        Ok(seed)
    }
}

fn check_unique<R: Record>(collection: &'static str, rows: &[R]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(rows.len());
    match rows.iter().map(Record::id).find(|id| !seen.insert(*id)) {
        Some(id) => Err(SeedError::DuplicateId { collection, id }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_seed_loads() {
        let seed = SeedData::bundled().unwrap();
        assert!(!seed.products.is_empty());
        assert!(!seed.leads.is_empty());
        assert_eq!(seed.products[0].nome, "Semente de Chia");
    }

    #[test]
    fn missing_collections_and_fields_default() {
        let seed = SeedData::from_json(r#"{ "faq": [{ "id": 7, "pergunta": "?" }] }"#).unwrap();
        assert!(seed.products.is_empty());
        assert_eq!(seed.faq[0].id, 7);
        assert_eq!(seed.faq[0].resposta, "");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = SeedData::from_json(r#"{ "leads": [{ "id": 1 }, { "id": 1 }] }"#).unwrap_err();
        assert!(matches!(
            err,
            SeedError::DuplicateId {
                collection: "leads",
                id: 1
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SeedData::from_json("{"), Err(SeedError::Parse(_))));
    }
}
