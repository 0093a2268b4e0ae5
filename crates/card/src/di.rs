use shared::{
    abstract_trait::{DynCardService, DynDigitSource},
    config::Config,
    service::CardService,
    utils::RngDigitSource,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_service: DynCardService,
}

impl DependenciesInject {
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        let digits: DynDigitSource = match seed {
            Some(seed) => {
                info!("🌱 Using seeded digit source seed={seed}");
                Box::new(RngDigitSource::seeded(seed))
            }
            None => Box::new(RngDigitSource::from_os()),
        };

        let card_service = Arc::new(CardService::new(config, digits)) as DynCardService;

        Self { card_service }
    }
}
