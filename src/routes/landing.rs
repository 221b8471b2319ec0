use crate::api::SalonId;
use serde::{Deserialize, Serialize};

/// Salon listing entry for the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonInfo {
    pub salon_id: SalonId,
    pub salon_name: String,
}

pub const LIST_SALONS: &str = "list_salons";
