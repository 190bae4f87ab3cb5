//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use screener::core::error::GatewayError;
use screener::core::models::{Article, Reviewer, Summary};
use screener::core::ports::{DecisionSubmission, ReviewGateway, SavedLogin, SessionStore};

/// Mock implementation of ReviewGateway
///
/// Records every call by operation name. Responses are scripted up front.
pub struct MockGateway {
    reviewers: Vec<String>,
    articles: RefCell<Result<Vec<Article>, GatewayError>>,
    submit_failures: RefCell<VecDeque<GatewayError>>,
    summary: RefCell<Result<Summary, GatewayError>>,
    calls: RefCell<Vec<String>>,
    submissions: RefCell<Vec<DecisionSubmission>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            reviewers: vec!["Ada".to_string(), "Bo".to_string()],
            articles: RefCell::new(Ok(Vec::new())),
            submit_failures: RefCell::new(VecDeque::new()),
            summary: RefCell::new(Ok(Summary::default())),
            calls: RefCell::new(Vec::new()),
            submissions: RefCell::new(Vec::new()),
        }
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let gateway = Self::new();
        *gateway.articles.borrow_mut() = Ok(articles);
        gateway
    }

    pub fn failing_articles(err: GatewayError) -> Self {
        let gateway = Self::new();
        *gateway.articles.borrow_mut() = Err(err);
        gateway
    }

    /// Make the next `submit_decision` fail with `err`
    pub fn fail_next_submit(&self, err: GatewayError) {
        self.submit_failures.borrow_mut().push_back(err);
    }

    pub fn set_summary(&self, summary: Result<Summary, GatewayError>) {
        *self.summary.borrow_mut() = summary;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == operation).count()
    }

    pub fn submissions(&self) -> Vec<DecisionSubmission> {
        self.submissions.borrow().clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewGateway for MockGateway {
    fn get_reviewers(&self) -> Result<Vec<String>, GatewayError> {
        self.calls.borrow_mut().push("getReviewers".to_string());
        Ok(self.reviewers.clone())
    }

    fn get_articles(&self, _reviewer: &Reviewer) -> Result<Vec<Article>, GatewayError> {
        self.calls.borrow_mut().push("getArticles".to_string());
        self.articles.borrow().clone()
    }

    fn submit_decision(&self, submission: &DecisionSubmission) -> Result<(), GatewayError> {
        self.calls.borrow_mut().push("submitDecision".to_string());
        if let Some(err) = self.submit_failures.borrow_mut().pop_front() {
            return Err(err);
        }
        self.submissions.borrow_mut().push(submission.clone());
        Ok(())
    }

    fn get_summary(&self, _reviewer: &Reviewer) -> Result<Summary, GatewayError> {
        self.calls.borrow_mut().push("getSummary".to_string());
        self.summary.borrow().clone()
    }
}

/// Mock implementation of SessionStore
pub struct MockSessionStore {
    saved: RefCell<Option<SavedLogin>>,
    clears: Cell<usize>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            saved: RefCell::new(None),
            clears: Cell::new(0),
        }
    }

    pub fn with_saved(login: SavedLogin) -> Self {
        Self {
            saved: RefCell::new(Some(login)),
            clears: Cell::new(0),
        }
    }

    pub fn saved(&self) -> Option<SavedLogin> {
        self.saved.borrow().clone()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }
}

impl Default for MockSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MockSessionStore {
    fn load(&self) -> anyhow::Result<Option<SavedLogin>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, login: &SavedLogin) -> anyhow::Result<()> {
        *self.saved.borrow_mut() = Some(login.clone());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        self.saved.borrow_mut().take();
        self.clears.set(self.clears.get() + 1);
        Ok(())
    }
}
