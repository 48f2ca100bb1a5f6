//! Chart.js bindings.
//!
//! The library is loaded globally by `index.html`; only the constructor, `destroy()`
//! and the live `data` tree are bound here.

use contracts::usecases::u508_csv_chart_upload::ChartData;
use js_sys::{Array, Reflect};
use leptos::html::Canvas;
use leptos::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::{ChartConfig, ChartEngine, ChartError, ChartHandle, ClickedPoint};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &JsChart);
}

type ClickCallback = Closure<dyn FnMut(JsValue, Array, JsValue)>;

/// Builds Chart.js widgets on the canvas referenced by `canvas`
pub struct ChartJsEngine {
    canvas: NodeRef<Canvas>,
}

impl ChartJsEngine {
    pub fn new(canvas: NodeRef<Canvas>) -> Self {
        Self { canvas }
    }
}

/// Live Chart.js instance plus the click closure it calls into
pub struct ChartJsHandle {
    chart: JsChart,
    _on_click: ClickCallback,
}

impl ChartHandle for ChartJsHandle {
    fn destroy(self) {
        // the closure is dropped only after Chart.js has unbound its listeners
        self.chart.destroy();
    }
}

impl ChartEngine for ChartJsEngine {
    type Handle = ChartJsHandle;

    fn create(&mut self, config: ChartConfig) -> Result<ChartJsHandle, ChartError> {
        let canvas = self.canvas.get_untracked().ok_or(ChartError::CanvasMissing)?;

        let js_config = config
            .serialize(&Serializer::json_compatible())
            .map_err(|e| ChartError::Config(e.to_string()))?;

        let on_click: ClickCallback =
            Closure::wrap(Box::new(move |_event: JsValue, elements: Array, chart: JsValue| {
                if elements.length() == 0 {
                    return;
                }
                match resolve_clicked_point(&chart, &elements.get(0)) {
                    Some(point) => log::info!("{}", point),
                    None => log::debug!("Click did not resolve to a data point"),
                }
            }) as Box<dyn FnMut(JsValue, Array, JsValue)>);

        let options = Reflect::get(&js_config, &JsValue::from_str("options"))
            .map_err(|e| ChartError::Config(format!("{e:?}")))?;
        Reflect::set(&options, &JsValue::from_str("onClick"), on_click.as_ref())
            .map_err(|e| ChartError::Config(format!("{e:?}")))?;

        let chart = JsChart::new(&canvas, &js_config)
            .map_err(|e| ChartError::Engine(format!("{e:?}")))?;

        Ok(ChartJsHandle {
            chart,
            _on_click: on_click,
        })
    }
}

/// Reads label and value of the clicked element from the chart's live `data`
fn resolve_clicked_point(chart: &JsValue, element: &JsValue) -> Option<ClickedPoint> {
    let index = get(element, "index")?.as_f64()? as usize;
    let dataset_index = get(element, "datasetIndex")?.as_f64()? as usize;

    let data: ChartData = match serde_wasm_bindgen::from_value(get(chart, "data")?) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Live chart data could not be read: {}", e);
            return None;
        }
    };

    ClickedPoint::from_chart_data(&data, dataset_index, index)
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}
