//! Saved SIP plans

use serde::Serialize;
use tracing::debug;

use crate::error::PlanningError;
use crate::sip::SipProjection;

/// Projections the user chose to keep, in save order
#[derive(Debug, Clone, Default, Serialize)]
pub struct SavedPlans {
    plans: Vec<SipProjection>,
}

impl SavedPlans {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a projection and returns its index
    pub fn save(&mut self, projection: SipProjection) -> usize {
        self.plans.push(projection);
        let index = self.plans.len() - 1;
        debug!(index, "Saved SIP plan");
        index
    }

    /// Removes the plan at `index`, shifting later plans down
    ///
    /// # Errors
    ///
    /// `PlanNotFound` if `index` is out of range
    pub fn remove(&mut self, index: usize) -> Result<SipProjection, PlanningError> {
        if index >= self.plans.len() {
            return Err(PlanningError::PlanNotFound(index));
        }
        debug!(index, "Removed SIP plan");
        Ok(self.plans.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&SipProjection> {
        self.plans.get(index)
    }

    pub fn list(&self) -> &[SipProjection] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
