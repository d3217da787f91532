//! Shared fixtures and a scripted gateway for workspace tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::AnalysisResult;
use crate::error::Result;
use crate::io::Gateway;

pub mod fixtures {
    use crate::domain::{AnalysisResult, ResultId};

    /// A persisted row whose url and title are derived from `id`.
    pub fn result_with_id(id: ResultId) -> AnalysisResult {
        AnalysisResult {
            id: Some(id),
            url: format!("https://site-{}.example", id),
            title: format!("Site {}", id),
            html_version: "HTML5 or unknown".into(),
            h1: 1,
            internal_links: id,
            external_links: 1,
            ..Default::default()
        }
    }

    /// The documented example: a fresh analysis of example.com.
    pub fn example_result() -> AnalysisResult {
        AnalysisResult {
            id: Some(1),
            url: "https://example.com".into(),
            title: "Example".into(),
            html_version: "HTML5 or unknown".into(),
            h1: 1,
            internal_links: 5,
            external_links: 2,
            has_login_form: false,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Analyze(String),
    ListResults,
}

/// Gateway double that records calls and replays scripted responses.
///
/// When the script runs dry, `analyze` echoes a result for the submitted
/// url and `list_results` returns an empty listing.
#[derive(Default)]
pub struct RecordingGateway {
    calls: RefCell<Vec<GatewayCall>>,
    analyze: RefCell<VecDeque<Result<AnalysisResult>>>,
    list: RefCell<VecDeque<Result<Vec<AnalysisResult>>>>,
    gate: RefCell<Option<Rc<Notify>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first `analyze` call is recorded, then waits for `gate`.
    pub fn gated(gate: Rc<Notify>) -> Self {
        let gateway = Self::default();
        *gateway.gate.borrow_mut() = Some(gate);
        gateway
    }

    pub fn push_analyze(&self, response: Result<AnalysisResult>) {
        self.analyze.borrow_mut().push_back(response);
    }

    pub fn push_list(&self, response: Result<Vec<AnalysisResult>>) {
        self.list.borrow_mut().push_back(response);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.borrow().clone()
    }

    pub fn analyzed_urls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                GatewayCall::Analyze(url) => Some(url.clone()),
                GatewayCall::ListResults => None,
            })
            .collect()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == GatewayCall::ListResults)
            .count()
    }
}

#[async_trait(?Send)]
impl Gateway for RecordingGateway {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        self.calls
            .borrow_mut()
            .push(GatewayCall::Analyze(url.to_string()));
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let scripted = self.analyze.borrow_mut().pop_front();
        scripted.unwrap_or_else(|| {
            Ok(AnalysisResult {
                url: url.to_string(),
                ..Default::default()
            })
        })
    }

    async fn list_results(&self) -> Result<Vec<AnalysisResult>> {
        self.calls.borrow_mut().push(GatewayCall::ListResults);
        let scripted = self.list.borrow_mut().pop_front();
        scripted.unwrap_or_else(|| Ok(Vec::new()))
    }
}
