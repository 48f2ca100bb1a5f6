use std::rc::Rc;

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_csv_chart_upload::CsvChartUpload;
use leptos::ev::SubmitEvent;
use leptos::html::{Canvas, Input};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::FetchTransport;
use super::controller::SubmissionController;
use super::model::FeedbackState;
use super::presentation::{PresentationManager, Surface};
use crate::shared::chart::ChartJsEngine;
use crate::shared::components::page_header::PageHeader;

/// Surface backed by the page signals
#[derive(Clone, Copy)]
struct SignalSurface {
    feedback: WriteSignal<FeedbackState>,
    columns: WriteSignal<Vec<String>>,
}

impl Surface for SignalSurface {
    fn show_feedback(&self, feedback: &FeedbackState) {
        self.feedback.set(feedback.clone());
    }

    fn show_columns(&self, columns: &[String]) {
        self.columns.set(columns.to_vec());
    }
}

type PageController = SubmissionController<FetchTransport, ChartJsEngine, SignalSurface>;

#[component]
pub fn CsvChartUploadPage() -> impl IntoView {
    let (feedback, set_feedback) = signal(FeedbackState::default());
    let (columns, set_columns) = signal(Vec::<String>::new());
    let file_input = NodeRef::<Input>::new();
    let canvas = NodeRef::<Canvas>::new();

    let presenter = PresentationManager::new(
        ChartJsEngine::new(canvas),
        SignalSurface {
            feedback: set_feedback,
            columns: set_columns,
        },
    );
    // Controller holds JS handles, keep it local to the UI thread
    let controller: Rc<PageController> =
        Rc::new(SubmissionController::new(FetchTransport::new(), presenter));
    let controller = StoredValue::new_local(controller);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let controller = controller.get_value();
        let Some(pending) = controller.start(file) else {
            return;
        };

        spawn_local(async move {
            if let Err(e) = controller.complete(pending).await {
                log::error!("Chart could not be rendered: {}", e);
            }
        });
    };

    on_cleanup(move || {
        controller.try_with_value(|c| c.release_chart());
    });

    view! {
        <div id="u508_csv_chart_upload--usecase" class="page u508-upload">
            <PageHeader
                title=CsvChartUpload::display_name()
                subtitle=CsvChartUpload::description()
            />

            <form id="uploadForm" class="u508-upload__form" on:submit=on_submit>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <input
                        node_ref=file_input
                        id="fileInput"
                        type="file"
                        name="file"
                        accept=".csv"
                    />
                    <button type="submit" class="button button--primary">
                        "Upload and analyze"
                    </button>
                </Flex>
            </form>

            <div id="feedback" class=move || feedback.get().css_class()>
                {move || feedback.get().text}
            </div>

            <div class="u508-upload__columns">
                <h3>"Columns"</h3>
                <ul id="columnList">
                    {move || {
                        columns
                            .get()
                            .into_iter()
                            .map(|column| view! { <li>{column}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>

            <div class="u508-upload__chart" style="position: relative; height: 400px;">
                <canvas node_ref=canvas id="myChart"></canvas>
            </div>
        </div>
    }
}
