use crate::usecases::u508_csv_chart_upload::CsvChartUploadPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <CsvChartUploadPage />
        </main>
    }
}
