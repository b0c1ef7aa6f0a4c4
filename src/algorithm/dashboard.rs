//! Dashboard session
//!
//! A `Dashboard` serves views over one immutable cleaned table. Results are
//! memoized by request and table fingerprint. A failing view becomes a notice
//! on its own page and never affects the others.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::views::{ViewOutput, ViewRequest, compute_view};
use crate::config::DashboardConfig;
use crate::error::{Result, ViewError};
use crate::models::CleanedTable;
use crate::utils::io::fingerprint;

/// What a page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageResult {
    /// The computed view
    Rendered(ViewOutput),
    /// Inline notice in place of the view
    Notice(String),
}

/// Memoized view rendering over a shared cleaned table
#[derive(Debug)]
pub struct Dashboard {
    table: Arc<CleanedTable>,
    fingerprint: u64,
    config: DashboardConfig,
    cache: FxHashMap<(ViewRequest, u64), ViewOutput>,
}

impl Dashboard {
    /// Open a session over `table`
    pub fn new(table: Arc<CleanedTable>, config: DashboardConfig) -> Result<Self> {
        let fingerprint = fingerprint(&table)?;
        log::debug!(
            "Dashboard over {} applications, fingerprint {fingerprint:016x}",
            table.len()
        );
        Ok(Self {
            table,
            fingerprint,
            config,
            cache: FxHashMap::default(),
        })
    }

    /// The shared table
    #[must_use]
    pub fn table(&self) -> &CleanedTable {
        &self.table
    }

    /// Content fingerprint of the table
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Number of memoized views
    #[must_use]
    pub fn cached_views(&self) -> usize {
        self.cache.len()
    }

    /// Render a view, reusing a memoized result when available
    pub fn render(&mut self, request: ViewRequest) -> std::result::Result<ViewOutput, ViewError> {
        let key = (request, self.fingerprint);
        if let Some(output) = self.cache.get(&key) {
            log::trace!("Cache hit for {}", request.title());
            return Ok(output.clone());
        }

        let output = compute_view(&self.table, request, &self.config)?;
        self.cache.insert(key, output.clone());
        Ok(output)
    }

    /// Render a view, turning a failure into a notice
    pub fn render_page(&mut self, request: ViewRequest) -> PageResult {
        match self.render(request) {
            Ok(output) => PageResult::Rendered(output),
            Err(e) => {
                log::warn!("{e}");
                PageResult::Notice(e.to_string())
            }
        }
    }

    /// Render every requested page independently
    pub fn render_all(&mut self, requests: &[ViewRequest]) -> Vec<(ViewRequest, PageResult)> {
        requests
            .iter()
            .map(|&request| (request, self.render_page(request)))
            .collect()
    }
}
