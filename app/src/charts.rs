//! ECharts interop for the two chart regions.
//!
//! The chart regions are plain divs; this module owns every echarts
//! call (init, getInstanceByDom, setOption, resize) and the translation
//! from a [`ChartSpec`] into an echarts option object. The specs stay
//! pure data; nothing here reaches back into the query layer.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local as spawn;

use launchboard_types::{ChartSlot, ChartSpec, PieChart, ScatterChart};

use crate::utils::js_set;

const SUCCESS_COLOR: &str = "hsl(145, 55%, 45%)";
const FAILURE_COLOR: &str = "hsl(5, 70%, 55%)";

/// Slice palette for the per-site pie.
const SITE_COLORS: [&str; 6] = [
    "hsl(210, 70%, 55%)",
    "hsl(30, 70%, 55%)",
    "hsl(145, 55%, 45%)",
    "hsl(275, 50%, 60%)",
    "hsl(5, 70%, 55%)",
    "hsl(180, 45%, 45%)",
];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> JsValue;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn echarts_get_instance(dom: &web_sys::Element) -> JsValue;
}

/// Get (or lazily create) the echarts instance bound to an element.
fn chart_instance(element_id: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let element = document.get_element_by_id(element_id)?;

    let existing = echarts_get_instance(&element);
    if !existing.is_null() && !existing.is_undefined() {
        return Some(existing);
    }

    Some(echarts_init(&element))
}

fn call_method(chart: &JsValue, name: &str, arg: Option<&JsValue>) {
    let func = js_sys::Reflect::get(chart, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(func) = func {
        let _ = match arg {
            Some(arg) => func.call1(chart, arg),
            None => func.call0(chart),
        };
    }
}

fn set_chart_option(chart: &JsValue, option: &JsValue) {
    call_method(chart, "setOption", Some(option));
}

fn resize_chart(chart: &JsValue) {
    call_method(chart, "resize", None);
}

/// Push a freshly derived spec into its slot's chart region.
///
/// Deferred briefly so the target div exists before echarts binds to it.
pub fn render_chart(slot: ChartSlot, spec: ChartSpec) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;

        let Some(chart) = chart_instance(slot.element_id()) else {
            return;
        };
        let option = match &spec {
            ChartSpec::Pie(pie) => build_pie_option(pie),
            ChartSpec::Scatter(scatter) => build_scatter_option(scatter),
        };
        set_chart_option(&chart, &option);
        resize_chart(&chart);
    });
}

/// Resize every bound chart; called from the window resize listener.
pub fn resize_all_charts() {
    for slot in [ChartSlot::SuccessPie, ChartSlot::PayloadScatter] {
        if let Some(window) = web_sys::window()
            && let Some(document) = window.document()
            && let Some(element) = document.get_element_by_id(slot.element_id())
        {
            let instance = echarts_get_instance(&element);
            if !instance.is_null() && !instance.is_undefined() {
                resize_chart(&instance);
            }
        }
    }
}

fn build_title(text: &str) -> JsValue {
    let title = js_sys::Object::new();
    js_set(&title, "text", &JsValue::from_str(text));
    js_set(&title, "left", &JsValue::from_str("center"));
    title.into()
}

fn build_pie_option(pie: &PieChart) -> JsValue {
    let obj = js_sys::Object::new();
    js_set(&obj, "title", &build_title(&pie.title));

    let tooltip = js_sys::Object::new();
    js_set(&tooltip, "trigger", &JsValue::from_str("item"));
    js_set(&tooltip, "formatter", &JsValue::from_str("{b}: {c} ({d}%)"));
    js_set(&obj, "tooltip", &tooltip);

    // Two-slice (Success/Failure) pies keep fixed semantic colors; the
    // per-site pie cycles the palette.
    let semantic = pie.slices.len() == 2
        && pie.slices[0].label == "Success"
        && pie.slices[1].label == "Failure";
    let colors = js_sys::Array::new();
    if semantic {
        colors.push(&JsValue::from_str(SUCCESS_COLOR));
        colors.push(&JsValue::from_str(FAILURE_COLOR));
    } else {
        for i in 0..pie.slices.len() {
            colors.push(&JsValue::from_str(SITE_COLORS[i % SITE_COLORS.len()]));
        }
    }
    js_set(&obj, "color", &colors);

    let data = js_sys::Array::new();
    for slice in &pie.slices {
        let item = js_sys::Object::new();
        js_set(&item, "name", &JsValue::from_str(&slice.label));
        js_set(&item, "value", &JsValue::from_f64(slice.value as f64));
        data.push(&item);
    }

    let series = js_sys::Object::new();
    js_set(&series, "type", &JsValue::from_str("pie"));
    js_set(&series, "radius", &JsValue::from_str("60%"));
    js_set(&series, "data", &data);

    let series_arr = js_sys::Array::new();
    series_arr.push(&series);
    js_set(&obj, "series", &series_arr);
    js_set(&obj, "animation", &JsValue::FALSE);

    obj.into()
}

fn build_scatter_option(scatter: &ScatterChart) -> JsValue {
    let obj = js_sys::Object::new();
    js_set(&obj, "title", &build_title(&scatter.title));

    let tooltip = js_sys::Object::new();
    js_set(&tooltip, "trigger", &JsValue::from_str("item"));
    js_set(&obj, "tooltip", &tooltip);

    let legend = js_sys::Object::new();
    js_set(&legend, "bottom", &JsValue::from_f64(0.0));
    js_set(&obj, "legend", &legend);

    let x_axis = js_sys::Object::new();
    js_set(&x_axis, "type", &JsValue::from_str("value"));
    js_set(&x_axis, "name", &JsValue::from_str(&scatter.x_label));
    js_set(&x_axis, "nameLocation", &JsValue::from_str("middle"));
    js_set(&x_axis, "nameGap", &JsValue::from_f64(28.0));
    js_set(&obj, "xAxis", &x_axis);

    let y_axis = js_sys::Object::new();
    js_set(&y_axis, "type", &JsValue::from_str("value"));
    js_set(&y_axis, "name", &JsValue::from_str(&scatter.y_label));
    js_set(&y_axis, "min", &JsValue::from_f64(-0.25));
    js_set(&y_axis, "max", &JsValue::from_f64(1.25));
    js_set(&y_axis, "interval", &JsValue::from_f64(1.0));
    js_set(&obj, "yAxis", &y_axis);

    // One series per outcome so the legend and colors carry the
    // success/failure meaning.
    let split = |outcome: u8| -> Vec<[f64; 2]> {
        scatter
            .points
            .iter()
            .filter(|p| p.outcome == outcome)
            .map(|p| [p.payload_mass_kg, p.outcome as f64])
            .collect()
    };

    let series_arr = js_sys::Array::new();
    for (name, color, points) in [
        ("Success", SUCCESS_COLOR, split(1)),
        ("Failure", FAILURE_COLOR, split(0)),
    ] {
        let series = js_sys::Object::new();
        js_set(&series, "type", &JsValue::from_str("scatter"));
        js_set(&series, "name", &JsValue::from_str(name));
        let data = serde_wasm_bindgen::to_value(&points).unwrap_or(JsValue::NULL);
        js_set(&series, "data", &data);
        let item_style = js_sys::Object::new();
        js_set(&item_style, "color", &JsValue::from_str(color));
        js_set(&series, "itemStyle", &item_style);
        series_arr.push(&series);
    }
    js_set(&obj, "series", &series_arr);
    js_set(&obj, "animation", &JsValue::FALSE);

    obj.into()
}
