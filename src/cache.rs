//! Query Cache
//!
//! Cached entity state is never patched in place. Every mutation maps to
//! the set of query keys it makes stale; bumping a key's version forces
//! the subscribed read hook to refetch. The mutation → keys relationship
//! is declared once, in [`invalidated_keys`], so it stays testable.

use std::collections::HashMap;

use leptos::prelude::*;

/// Identifier for one cached read, scoped by entity type and parent id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Clients,
    Client(u32),
    ClientProjects(u32),
    AllProjects,
    Project(u32),
    Deliverables(u32),
}

/// A completed mutation, carrying the ids needed to scope invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    ClientCreated,
    ClientUpdated { id: u32 },
    ClientDeleted { id: u32 },
    ProjectCreated { client_id: u32 },
    ProjectUpdated { id: u32, client_id: u32 },
    ProjectDeleted { id: u32, client_id: u32 },
    ProjectStatusChanged { id: u32, client_id: u32 },
    DeliverableCreated { project_id: u32 },
    DeliverableStatusChanged { project_id: u32 },
    DeliverableDeleted { project_id: u32 },
}

/// Static invalidation table.
///
/// A deliverable change also invalidates the owning project detail,
/// since `progress_percentage` is derived server-side from deliverable
/// counts. Project mutations hit both the per-client list and the
/// global list.
pub fn invalidated_keys(mutation: &Mutation) -> Vec<QueryKey> {
    match *mutation {
        Mutation::ClientCreated => vec![QueryKey::Clients],
        Mutation::ClientUpdated { id } => vec![QueryKey::Clients, QueryKey::Client(id)],
        Mutation::ClientDeleted { id } => vec![QueryKey::Clients, QueryKey::Client(id)],
        Mutation::ProjectCreated { client_id } => vec![
            QueryKey::ClientProjects(client_id),
            QueryKey::AllProjects,
        ],
        Mutation::ProjectUpdated { id, client_id } => vec![
            QueryKey::ClientProjects(client_id),
            QueryKey::AllProjects,
            QueryKey::Project(id),
        ],
        Mutation::ProjectDeleted { id, client_id } => vec![
            QueryKey::ClientProjects(client_id),
            QueryKey::AllProjects,
            QueryKey::Project(id),
        ],
        Mutation::ProjectStatusChanged { id, client_id } => vec![
            QueryKey::ClientProjects(client_id),
            QueryKey::AllProjects,
            QueryKey::Project(id),
        ],
        Mutation::DeliverableCreated { project_id } => vec![
            QueryKey::Deliverables(project_id),
            QueryKey::Project(project_id),
        ],
        Mutation::DeliverableStatusChanged { project_id } => vec![
            QueryKey::Deliverables(project_id),
            QueryKey::Project(project_id),
        ],
        Mutation::DeliverableDeleted { project_id } => vec![
            QueryKey::Deliverables(project_id),
            QueryKey::Project(project_id),
        ],
    }
}

/// Reactive version counters, one per query key.
///
/// Read hooks call [`QueryCache::version`] inside their fetch effect so
/// the effect reruns whenever the key is invalidated.
#[derive(Clone, Copy)]
pub struct QueryCache {
    versions: RwSignal<HashMap<QueryKey, u32>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            versions: RwSignal::new(HashMap::new()),
        }
    }

    /// Current version of a key (reactive read).
    pub fn version(&self, key: QueryKey) -> u32 {
        self.versions
            .with(|versions| versions.get(&key).copied().unwrap_or(0))
    }

    /// Mark every key affected by a mutation as stale.
    pub fn invalidate(&self, mutation: &Mutation) {
        let keys = invalidated_keys(mutation);
        self.versions.update(|versions| {
            for key in keys {
                *versions.entry(key).or_insert(0) += 1;
            }
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the query cache from context
pub fn use_query_cache() -> QueryCache {
    expect_context::<QueryCache>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deliverable_status_change_invalidates_list_and_owning_project() {
        let keys = invalidated_keys(&Mutation::DeliverableStatusChanged { project_id: 9 });
        assert!(keys.contains(&QueryKey::Deliverables(9)));
        assert!(keys.contains(&QueryKey::Project(9)));
    }

    #[test]
    fn project_delete_invalidates_client_scoped_and_global_lists() {
        let keys = invalidated_keys(&Mutation::ProjectDeleted { id: 4, client_id: 2 });
        assert!(keys.contains(&QueryKey::ClientProjects(2)));
        assert!(keys.contains(&QueryKey::AllProjects));
        assert!(keys.contains(&QueryKey::Project(4)));
    }

    #[test]
    fn client_create_invalidates_only_the_client_list() {
        let keys = invalidated_keys(&Mutation::ClientCreated);
        assert_eq!(keys, vec![QueryKey::Clients]);
    }

    #[test]
    fn deliverable_mutations_never_touch_other_projects() {
        for mutation in [
            Mutation::DeliverableCreated { project_id: 1 },
            Mutation::DeliverableStatusChanged { project_id: 1 },
            Mutation::DeliverableDeleted { project_id: 1 },
        ] {
            for key in invalidated_keys(&mutation) {
                match key {
                    QueryKey::Deliverables(project_id) | QueryKey::Project(project_id) => {
                        assert_eq!(project_id, 1)
                    }
                    other => panic!("unexpected key invalidated: {other:?}"),
                }
            }
        }
    }
}
