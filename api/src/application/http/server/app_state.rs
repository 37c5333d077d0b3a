use std::sync::Arc;

use foodprint_core::application::FoodprintService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodprintService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodprintService) -> Self {
        Self { args, service }
    }
}
