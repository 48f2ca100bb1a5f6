//! Test doubles for the u508 controller and presentation tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::usecases::u508_csv_chart_upload::{ChartData, Dataset};

use super::model::FeedbackState;
use super::presentation::Surface;
use crate::shared::chart::{ChartConfig, ChartEngine, ChartError, ChartHandle};

pub fn chart_data(labels: &[&str], values: &[f64]) -> ChartData {
    ChartData {
        labels: labels.iter().map(|l| l.to_string()).collect(),
        datasets: vec![Dataset::new("s", values.iter().copied().map(Some).collect())],
    }
}

#[derive(Default)]
struct EngineState {
    created: Cell<usize>,
    destroyed: Cell<usize>,
    max_live: Cell<usize>,
    fail_next: Cell<bool>,
    configs: RefCell<Vec<ChartConfig>>,
}

/// Engine that counts live widgets instead of drawing them
#[derive(Clone, Default)]
pub struct FakeEngine {
    state: Rc<EngineState>,
}

impl FakeEngine {
    pub fn created(&self) -> usize {
        self.state.created.get()
    }

    pub fn destroyed(&self) -> usize {
        self.state.destroyed.get()
    }

    pub fn live(&self) -> usize {
        self.created() - self.destroyed()
    }

    pub fn max_live(&self) -> usize {
        self.state.max_live.get()
    }

    pub fn fail_next(&self) {
        self.state.fail_next.set(true);
    }

    pub fn last_config(&self) -> Option<ChartConfig> {
        self.state.configs.borrow().last().cloned()
    }
}

pub struct FakeHandle {
    state: Rc<EngineState>,
}

impl ChartHandle for FakeHandle {
    fn destroy(self) {
        self.state.destroyed.set(self.state.destroyed.get() + 1);
    }
}

impl ChartEngine for FakeEngine {
    type Handle = FakeHandle;

    fn create(&mut self, config: ChartConfig) -> Result<FakeHandle, ChartError> {
        if self.state.fail_next.replace(false) {
            return Err(ChartError::Engine("boom".into()));
        }
        self.state.created.set(self.state.created.get() + 1);
        self.state.max_live.set(self.state.max_live.get().max(self.live()));
        self.state.configs.borrow_mut().push(config);
        Ok(FakeHandle {
            state: self.state.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Feedback(FeedbackState),
    Columns(Vec<String>),
}

/// Surface that keeps every update it received
#[derive(Clone, Default)]
pub struct RecordingSurface {
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn feedback(&self) -> FeedbackState {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                SurfaceEvent::Feedback(f) => Some(f.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn columns(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                SurfaceEvent::Columns(c) => Some(c.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl Surface for RecordingSurface {
    fn show_feedback(&self, feedback: &FeedbackState) {
        self.events
            .borrow_mut()
            .push(SurfaceEvent::Feedback(feedback.clone()));
    }

    fn show_columns(&self, columns: &[String]) {
        self.events
            .borrow_mut()
            .push(SurfaceEvent::Columns(columns.to_vec()));
    }
}
