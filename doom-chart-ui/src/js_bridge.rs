//! Typed wrappers around JS interop via `js_sys::eval()`, plus data fetching.
//!
//! The trend chart (D3.js) and boundary map (Leaflet) live in `assets/js/*.js`.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module injects the library scripts, waits for them, and provides
//! safe Rust wrappers that serialize data and call those globals.

use crate::config::ScriptSources;
use anyhow::{anyhow, Context};
use flate2::read::GzDecoder;
use std::io::Read;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Embed the chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");
static BOUNDARY_MAP_JS: &str = include_str!("../assets/js/boundary-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DoomIndex JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Append the D3 and Leaflet tags to `<head>` unless already present.
fn inject_libraries(sources: &ScriptSources) {
    call_js(&format!(
        r#"
        (function() {{
            function addScript(src) {{
                if (document.querySelector('script[src="' + src + '"]')) return;
                var s = document.createElement('script');
                s.src = src;
                document.head.appendChild(s);
            }}
            function addStyle(href) {{
                if (document.querySelector('link[href="' + href + '"]')) return;
                var l = document.createElement('link');
                l.rel = 'stylesheet';
                l.href = href;
                document.head.appendChild(l);
            }}
            addStyle({css});
            addScript({d3});
            addScript({leaflet});
        }})();
        "#,
        css = js_string(&sources.leaflet_css),
        d3 = js_string(&sources.d3_js),
        leaflet = js_string(&sources.leaflet_js),
    ));
}

/// Load the chart and map scripts once D3 and Leaflet are available.
///
/// The JS files define functions like `renderTrendChart(...)` via
/// `function` declarations. They are evaluated at global scope via indirect
/// `eval()` once both libraries are ready, then promoted to `window.*`.
/// Safe to call repeatedly; only the first call does any work.
pub fn init_charts(sources: &ScriptSources) {
    inject_libraries(sources);

    let all_js = [TOOLTIP_JS, TREND_CHART_JS, BOUNDARY_MAP_JS].join("\n");
    let store_js = format!(
        "if (!window.__doomChartsReady && !window.__doomChartScripts) {{ window.__doomChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__doomChartsReady || window.__doomChartsWaiting) return;
            window.__doomChartsWaiting = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__doomChartScripts);
                    delete window.__doomChartScripts;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof renderBoundaryMap !== 'undefined') window.renderBoundaryMap = renderBoundaryMap;
                    if (typeof destroyBoundaryMap !== 'undefined') window.destroyBoundaryMap = destroyBoundaryMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__doomChartsReady = true;
                    console.log('DoomIndex charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until the charts are ready and the container exists, then call `function`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var id = {id};
            var poll = setInterval(function() {{
                if (window.__doomChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    try {{
                        window.{function}(id, {data}, {config});
                    }} catch(e) {{ console.error('[DoomIndex] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = js_string(container_id),
        data = js_string(data_json),
        config = js_string(config_json),
    ));
}

/// Render the historical trends line chart (deaths and affected per year).
pub fn render_trend_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderTrendChart", container_id, data_json, config_json);
}

/// Render the country boundary overlay on a Leaflet map.
pub fn render_boundary_map(container_id: &str, geojson: &str, config_json: &str) {
    render_when_ready("renderBoundaryMap", container_id, geojson, config_json);
}

/// Destroy/clean up a chart or map in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var id = {id}; if (window.destroyBoundaryMap) window.destroyBoundaryMap(id); \
         var el = document.getElementById(id); if (el) el.innerHTML = '';",
        id = js_string(container_id)
    ));
}

fn js_error(value: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!(value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value)))
}

/// Fetch a text resource. A URL ending in `.gz` is gunzipped after download.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(anyhow!(
            "{} {} ({})",
            response.status(),
            response.status_text(),
            url
        ));
    }

    if url.ends_with(".gz") {
        let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        let mut text = String::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_string(&mut text)
            .with_context(|| format!("failed to decompress {}", url))?;
        log::info!("fetched {} ({} compressed bytes)", url, bytes.len());
        Ok(text)
    } else {
        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let text = body
            .as_string()
            .ok_or_else(|| anyhow!("response body of {} is not text", url))?;
        log::info!("fetched {} ({} bytes)", url, text.len());
        Ok(text)
    }
}
