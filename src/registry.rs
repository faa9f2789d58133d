//! Activity registry implementation
//!
//! The set of activity names is fixed when the registry is built. Each
//! record sits behind its own lock, so membership checks and roster
//! mutations for one activity happen under a single write guard while
//! requests against different activities never contend.

use crate::activity::{Activity, ActivityCatalog};
use crate::error::{RegistryError, RegistryResult};
use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, info};

/// In-memory registry of activities and their rosters
pub struct ActivityRegistry {
    /// Activity records keyed by name, in catalog order
    activities: IndexMap<String, RwLock<Activity>>,
    /// Reject signups once the roster reaches `max_participants`
    enforce_capacity: bool,
}

impl ActivityRegistry {
    /// Build a registry from a seed catalog
    pub fn new(catalog: ActivityCatalog) -> RegistryResult<Self> {
        validate_catalog(&catalog)?;

        let activities = catalog
            .into_iter()
            .map(|(name, activity)| (name, RwLock::new(activity)))
            .collect::<IndexMap<_, _>>();

        info!(count = activities.len(), "Activity registry initialized");

        Ok(Self {
            activities,
            enforce_capacity: false,
        })
    }

    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity in catalog order
    pub fn list(&self) -> ActivityCatalog {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.read().clone()))
            .collect()
    }

    /// Snapshot of a single activity
    pub fn get(&self, name: &str) -> RegistryResult<Activity> {
        self.activities
            .get(name)
            .map(|activity| activity.read().clone())
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Add a participant to an activity's roster
    pub fn signup(&self, name: &str, email: &str) -> RegistryResult<String> {
        let slot = self
            .activities
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        let mut activity = slot.write();

        if activity.has_participant(email) {
            debug!(activity = %name, email = %email, "Duplicate signup rejected");
            return Err(RegistryError::AlreadyRegistered {
                email: email.to_string(),
                activity: name.to_string(),
            });
        }

        if self.enforce_capacity && activity.is_full() {
            debug!(
                activity = %name,
                max_participants = activity.max_participants,
                "Signup rejected, activity full"
            );
            return Err(RegistryError::ActivityFull(name.to_string()));
        }

        activity.participants.push(email.to_string());

        info!(
            activity = %name,
            email = %email,
            participants = activity.participants.len(),
            "Participant signed up"
        );

        Ok(format!("{} signed up for {}", email, name))
    }

    /// Remove a participant from an activity's roster
    pub fn unregister(&self, name: &str, email: &str) -> RegistryResult<String> {
        let slot = self
            .activities
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        let mut activity = slot.write();

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotRegistered {
                email: email.to_string(),
                activity: name.to_string(),
            })?;

        activity.participants.remove(position);

        info!(
            activity = %name,
            email = %email,
            participants = activity.participants.len(),
            "Participant unregistered"
        );

        Ok(format!("{} unregistered from {}", email, name))
    }
}

fn validate_catalog(catalog: &ActivityCatalog) -> RegistryResult<()> {
    for (name, activity) in catalog {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidCatalog(
                "activity name must not be empty".to_string(),
            ));
        }

        if activity.max_participants == 0 {
            return Err(RegistryError::InvalidCatalog(format!(
                "{}: max_participants must be positive",
                name
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(RegistryError::InvalidCatalog(format!(
                    "{}: duplicate participant {}",
                    name, email
                )));
            }
        }
    }

    Ok(())
}
