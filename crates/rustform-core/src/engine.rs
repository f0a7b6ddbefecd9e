//! Single-pass deployment engine.
//!
//! `deploy` walks the declared resources in dependency waves: every resource
//! whose prerequisites (data references, explicit `depends_on`, parent) have
//! completed is provisioned in the next wave, and resources within a wave
//! are created concurrently. Registration guarantees that edges only point
//! backwards, so wave depth is a single forward scan rather than a general
//! graph search. There is no diffing, retry, or rollback: each resource is
//! created exactly once, and the first provider failure aborts the pass.

use std::sync::atomic::Ordering;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::error::{RustformError, RustformResult};
use crate::stack::{Provision, Stack};
use crate::types::Urn;

/// Result of a successful deployment.
#[derive(Debug, Clone)]
pub struct DeploySummary {
    /// URNs of provisioned resources, in creation order. Component resources
    /// carry no provisioning operation and are not listed.
    pub created: Vec<Urn>,
}

struct Node {
    urn: Urn,
    depth: usize,
    provision: Option<Box<dyn Provision>>,
}

impl Stack {
    /// Provision every declared resource, in dependency order.
    ///
    /// # Errors
    /// Fails on a repeated call ([`RustformError::AlreadyDeployed`]) or on
    /// the first provider rejection, which is surfaced unchanged with the
    /// failing resource's URN attached.
    pub async fn deploy(&self) -> RustformResult<DeploySummary> {
        if self.deployed.swap(true, Ordering::SeqCst) {
            return Err(RustformError::AlreadyDeployed);
        }

        let mut nodes = {
            let mut records = self.records.write();
            let mut nodes: Vec<Node> = Vec::with_capacity(records.len());
            for record in records.iter_mut() {
                // Edges always point at earlier ids, so each dependency's
                // depth is already final when its dependents are visited.
                let depth = record
                    .all_dependencies()
                    .into_iter()
                    .map(|dep| nodes[dep.index()].depth + 1)
                    .max()
                    .unwrap_or(0);
                nodes.push(Node {
                    urn: record.urn.clone(),
                    depth,
                    provision: record.provision.take(),
                });
            }
            nodes
        };

        let max_depth = nodes.iter().map(|node| node.depth).max().unwrap_or(0);
        let mut created = Vec::new();

        for wave in 0..=max_depth {
            let mut batch = Vec::new();
            for node in nodes.iter_mut().filter(|node| node.depth == wave) {
                if let Some(provision) = node.provision.take() {
                    let urn = node.urn.clone();
                    batch.push(async move {
                        provision
                            .create()
                            .await
                            .map_err(|source| RustformError::Provision {
                                urn: urn.clone(),
                                source,
                            })?;
                        debug!(urn = %urn, wave, "resource created");
                        Ok::<Urn, RustformError>(urn)
                    });
                }
            }
            created.extend(try_join_all(batch).await?);
        }

        info!(
            stack = %self.name(),
            resources = created.len(),
            "deployment complete"
        );
        Ok(DeploySummary { created })
    }
}
