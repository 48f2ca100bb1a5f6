//! Presentation side of u508: feedback line, column list and the chart widget.

use contracts::usecases::u508_csv_chart_upload::ChartData;

use super::model::{FeedbackState, UploadResult, CONNECTION_ERROR_MESSAGE};
use super::CHART_TITLE;
use crate::shared::chart::{ChartConfig, ChartEngine, ChartError, ChartHandle};

/// Where feedback and the column list end up (DOM nodes or signals behind them)
pub trait Surface {
    fn show_feedback(&self, feedback: &FeedbackState);
    fn show_columns(&self, columns: &[String]);
}

/// Sole owner of the chart widget.
///
/// At most one handle is alive; a new widget is only built after the previous
/// one has been destroyed.
pub struct PresentationManager<E: ChartEngine, S: Surface> {
    engine: E,
    surface: S,
    chart: Option<E::Handle>,
    feedback: FeedbackState,
    columns: Vec<String>,
}

impl<E: ChartEngine, S: Surface> PresentationManager<E, S> {
    pub fn new(engine: E, surface: S) -> Self {
        Self {
            engine,
            surface,
            chart: None,
            feedback: FeedbackState::default(),
            columns: Vec::new(),
        }
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    /// Clears feedback and column list. The chart is left alone until the next
    /// result decides its fate.
    pub fn reset(&mut self) {
        self.set_feedback(FeedbackState::default());
        self.set_columns(Vec::new());
    }

    /// Single entry point for a classified upload result
    pub fn apply(&mut self, result: UploadResult) -> Result<(), ChartError> {
        match result {
            UploadResult::Success {
                message,
                columns,
                chart_data,
            } => self.show_success(message, columns, chart_data),
            UploadResult::Failure { error } => {
                self.show_error(&error);
                Ok(())
            }
            UploadResult::TransportError(err) => {
                log::error!("Upload request failed: {}", err);
                self.set_feedback(FeedbackState::error(CONNECTION_ERROR_MESSAGE));
                self.destroy_chart_if_present();
                Ok(())
            }
        }
    }

    pub fn show_success(
        &mut self,
        message: String,
        columns: Vec<String>,
        chart_data: Option<ChartData>,
    ) -> Result<(), ChartError> {
        self.set_feedback(FeedbackState::success(message));
        self.set_columns(columns);

        match chart_data {
            Some(data) => self.render_or_update_chart(data),
            None => {
                self.destroy_chart_if_present();
                log::warn!("No chart data received from the backend");
                Ok(())
            }
        }
    }

    pub fn show_error(&mut self, error: &str) {
        self.set_feedback(FeedbackState::error(format!("Error: {}", error)));
        self.destroy_chart_if_present();
    }

    pub fn destroy_chart_if_present(&mut self) {
        if let Some(handle) = self.chart.take() {
            handle.destroy();
        }
    }

    /// Always a full replace: the previous widget is destroyed, then a new bar
    /// chart is built. On engine failure no widget is left behind.
    pub fn render_or_update_chart(&mut self, data: ChartData) -> Result<(), ChartError> {
        self.destroy_chart_if_present();
        let handle = self.engine.create(ChartConfig::bar(data, CHART_TITLE))?;
        self.chart = Some(handle);
        Ok(())
    }

    fn set_feedback(&mut self, feedback: FeedbackState) {
        self.surface.show_feedback(&feedback);
        self.feedback = feedback;
    }

    fn set_columns(&mut self, columns: Vec<String>) {
        self.surface.show_columns(&columns);
        self.columns = columns;
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{FeedbackCategory, TransportError};
    use super::super::test_support::{chart_data, FakeEngine, RecordingSurface, SurfaceEvent};
    use super::*;

    fn manager() -> (
        PresentationManager<FakeEngine, RecordingSurface>,
        FakeEngine,
        RecordingSurface,
    ) {
        let engine = FakeEngine::default();
        let surface = RecordingSurface::default();
        let manager = PresentationManager::new(engine.clone(), surface.clone());
        (manager, engine, surface)
    }

    #[test]
    fn test_success_with_chart() {
        let (mut pm, engine, surface) = manager();

        pm.show_success("ok".into(), vec!["x".into()], Some(chart_data(&["Jan"], &[5.0])))
            .unwrap();

        assert_eq!(pm.feedback(), &FeedbackState::success("ok"));
        assert_eq!(pm.columns(), ["x"]);
        assert_eq!(surface.columns(), vec!["x"]);
        assert!(pm.has_chart());
        assert_eq!(engine.created(), 1);
        assert_eq!(engine.live(), 1);

        let config = engine.last_config().unwrap();
        assert_eq!(config.data.labels, vec!["Jan"]);
        assert_eq!(config.data.datasets[0].data, vec![Some(5.0)]);
        assert_eq!(config.options.plugins.title.text, CHART_TITLE);
    }

    #[test]
    fn test_columns_are_replaced_not_appended() {
        let (mut pm, _engine, surface) = manager();

        pm.show_success("one".into(), vec!["A".into(), "B".into(), "C".into()], None)
            .unwrap();
        assert_eq!(surface.columns(), vec!["A", "B", "C"]);

        pm.show_success("two".into(), vec!["D".into()], None).unwrap();
        assert_eq!(pm.columns(), ["D"]);
        assert_eq!(surface.columns(), vec!["D"]);
    }

    #[test]
    fn test_success_without_chart_destroys_previous() {
        let (mut pm, engine, _surface) = manager();

        pm.show_success("ok".into(), vec![], Some(chart_data(&["Jan"], &[1.0])))
            .unwrap();
        assert_eq!(engine.live(), 1);

        pm.show_success("ok".into(), vec!["a".into()], None).unwrap();
        assert!(!pm.has_chart());
        assert_eq!(engine.live(), 0);
        assert_eq!(engine.created(), 1);
    }

    #[test]
    fn test_consecutive_charts_never_overlap() {
        let (mut pm, engine, _surface) = manager();

        for month in ["Jan", "Feb", "Mar"] {
            pm.show_success("ok".into(), vec![], Some(chart_data(&[month], &[2.0])))
                .unwrap();
        }

        assert_eq!(engine.created(), 3);
        assert_eq!(engine.live(), 1);
        assert_eq!(engine.max_live(), 1);
        assert_eq!(engine.last_config().unwrap().data.labels, vec!["Mar"]);
    }

    #[test]
    fn test_show_error_destroys_chart() {
        let (mut pm, engine, _surface) = manager();
        pm.show_success("ok".into(), vec![], Some(chart_data(&["Jan"], &[1.0])))
            .unwrap();

        pm.show_error("bad file");

        assert_eq!(pm.feedback().text, "Error: bad file");
        assert_eq!(pm.feedback().category, FeedbackCategory::Error);
        assert!(!pm.has_chart());
        assert_eq!(engine.live(), 0);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let (mut pm, engine, _surface) = manager();
        pm.destroy_chart_if_present();
        pm.show_success("ok".into(), vec![], Some(chart_data(&["Jan"], &[1.0])))
            .unwrap();
        pm.destroy_chart_if_present();
        pm.destroy_chart_if_present();
        assert_eq!(engine.destroyed(), 1);
        assert_eq!(engine.live(), 0);
    }

    #[test]
    fn test_transport_error_shows_connection_message() {
        let (mut pm, engine, _surface) = manager();
        pm.show_success("ok".into(), vec![], Some(chart_data(&["Jan"], &[1.0])))
            .unwrap();

        pm.apply(UploadResult::TransportError(TransportError::Network(
            "offline".into(),
        )))
        .unwrap();

        assert_eq!(pm.feedback(), &FeedbackState::error(CONNECTION_ERROR_MESSAGE));
        assert!(pm.columns().is_empty());
        assert_eq!(engine.live(), 0);
    }

    #[test]
    fn test_engine_failure_propagates_and_leaves_no_chart() {
        let (mut pm, engine, _surface) = manager();
        pm.show_success("ok".into(), vec![], Some(chart_data(&["Jan"], &[1.0])))
            .unwrap();

        engine.fail_next();
        let res = pm.show_success("ok".into(), vec!["y".into()], Some(chart_data(&["Feb"], &[1.0])));

        assert!(matches!(res, Err(ChartError::Engine(_))));
        assert!(!pm.has_chart());
        assert_eq!(engine.live(), 0);
        assert_eq!(pm.columns(), ["y"]);
    }

    #[test]
    fn test_reset_clears_feedback_and_columns() {
        let (mut pm, _engine, surface) = manager();
        pm.show_success("ok".into(), vec!["a".into()], None).unwrap();

        pm.reset();

        assert_eq!(pm.feedback(), &FeedbackState::default());
        assert!(pm.columns().is_empty());
        let events = surface.events();
        assert_eq!(
            &events[events.len() - 2..],
            &[
                SurfaceEvent::Feedback(FeedbackState::default()),
                SurfaceEvent::Columns(vec![]),
            ]
        );
    }
}
