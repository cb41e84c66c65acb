use serde_json::{Value as Json, json};

use csv_chart_shaper::chart::{
    ChartKind, ChartPayload, ChartSelection, Palette, RenderOptions, RenderSurface, select_chart_payload,
};
use csv_chart_shaper::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_str};
use csv_chart_shaper::processing::CoercionPolicy;
use csv_chart_shaper::types::DataSet;

fn sales() -> DataSet {
    ingest_csv_from_path("tests/fixtures/sales.csv").unwrap()
}

fn render(kind: ChartKind, x: &str, y: Option<&str>) -> Json {
    let mut sel = ChartSelection::new(kind).with_x(x);
    if let Some(y) = y {
        sel = sel.with_y(y);
    }
    let payload = select_chart_payload(&sales(), &sel, &RenderOptions::default()).unwrap();
    serde_json::to_value(&payload).unwrap()
}

#[test]
fn scatter_payload() {
    let json = render(ChartKind::Scatter, "month", Some("units"));
    assert_eq!(json["surface"], "declarative");
    assert_eq!(json["render"], "scatterplot");
    assert_eq!(json["data"]["values"][0], json!({"x": "jan", "y": 12.0}));
    assert_eq!(json["data"]["values"][3], json!({"x": "feb", "y": "n/a"}));
    assert_eq!(
        json["options"],
        json!({"xLabel": "month", "yLabel": "units", "width": 600, "height": 370, "fontSize": 14})
    );
}

#[test]
fn bar_payload_sums_by_group_in_first_seen_order() {
    let json = render(ChartKind::Bar, "region", Some("units"));
    assert_eq!(json["render"], "barchart");
    assert_eq!(
        json["data"],
        json!([{"index": "north", "value": 36.0}, {"index": "south", "value": 18.0}])
    );
    assert_eq!(json["options"], json!({"xLabel": "region", "yLabel": "units", "width": 600}));
}

#[test]
fn line_payload_wraps_one_series() {
    let json = render(ChartKind::Line, "month", Some("revenue"));
    assert_eq!(json["render"], "linechart");
    assert_eq!(json["data"]["series"], json!(["revenue"]));
    assert_eq!(json["data"]["values"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["values"][0][2], json!({"x": "feb", "y": 260.25}));
}

#[test]
fn histogram_payload_is_the_coerced_y_column() {
    let json = render(ChartKind::Histogram, "month", Some("units"));
    assert_eq!(json["render"], "histogram");
    assert_eq!(json["data"], json!([12.0, 7.0, 9.0, "n/a", 15.0, 11.0]));
    assert_eq!(json["options"], json!({"width": 600, "height": 370}));
}

#[test]
fn heatmap_payload_is_a_category_grid() {
    let json = render(ChartKind::Heatmap, "region", Some("units"));
    assert_eq!(json["render"], "heatmap");
    assert_eq!(json["data"]["xTickLabels"], json!(["north", "south"]));
    assert_eq!(json["data"]["yTickLabels"], json!(["12", "7", "9", "n/a", "15", "11"]));
    assert_eq!(
        json["data"]["values"],
        json!([[12.0, 0.0, 9.0, 0.0, 15.0, 0.0], [0.0, 7.0, 0.0, 0.0, 0.0, 11.0]])
    );
}

#[test]
fn bubble_payload_reads_sizes_from_the_radius_column() {
    let sel = ChartSelection::new(ChartKind::Bubble)
        .with_x("units")
        .with_y("revenue")
        .with_r("units");
    let payload = select_chart_payload(&sales(), &sel, &RenderOptions::default()).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["render"], "scatterplot");
    assert_eq!(json["data"]["values"][0], json!({"x": 12.0, "y": 340.5, "size": 12.0}));
    assert_eq!(json["options"]["sizeScale"], 4.0);

    let chart = payload.as_declarative().unwrap();
    let csv_chart_shaper::chart::DeclarativeData::Scatter(data) = &chart.data else {
        panic!("expected scatter data");
    };
    assert_eq!(chart.options.marker_size(&data.values[1]), Some(28.0));
    assert_eq!(chart.options.marker_size(&data.values[3]), None);
}

#[test]
fn pie_payload_colours_each_slice() {
    let json = render(ChartKind::Pie, "month", Some("revenue"));
    assert_eq!(
        json,
        json!({
            "surface": "canvas",
            "type": "pie",
            "data": {
                "labels": ["jan", "feb", "mar"],
                "datasets": [{
                    "data": [520.5, 260.25, 710.0],
                    "backgroundColor": ["#6970dd", "#fd7e14", "#dc3545"]
                }]
            }
        })
    );
}

#[test]
fn pie_palette_cycles_past_ten_slices() {
    let mut text = String::from("k,v\n");
    for i in 0..12 {
        text.push_str(&format!("k{i},1\n"));
    }
    let ds = ingest_csv_from_str(&text).unwrap();
    let sel = ChartSelection::new(ChartKind::Pie).with_x("k").with_y("v");
    let payload = select_chart_payload(&ds, &sel, &RenderOptions::default()).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    let colors = json["data"]["datasets"][0]["backgroundColor"].as_array().unwrap();
    assert_eq!(colors.len(), 12);
    assert_eq!(colors[10], colors[0]);
    assert_eq!(colors[11], "#fd7e14");
}

#[test]
fn radar_payload() {
    let json = render(ChartKind::Radar, "month", Some("units"));
    assert_eq!(json["type"], "radar");
    assert_eq!(json["data"]["labels"], json!(["jan", "jan", "feb", "feb", "mar", "mar"]));
    assert_eq!(
        json["data"]["datasets"][0],
        json!({
            "label": "units",
            "data": [12.0, 7.0, 9.0, "n/a", 15.0, 11.0],
            "backgroundColor": "rgba(54, 162, 235, 0.2)",
            "borderColor": "rgba(54, 162, 235, 1)"
        })
    );
    assert!(json.get("options").is_none());
}

#[test]
fn area_payload_is_a_filled_line() {
    let json = render(ChartKind::Area, "month", Some("revenue"));
    assert_eq!(json["type"], "line");
    assert_eq!(json["data"]["datasets"][0]["fill"], true);
    assert_eq!(json["data"]["datasets"][0]["borderColor"], "rgba(255,99,132,1)");
    assert_eq!(json["options"], json!({"elements": {"line": {"fill": true}}}));
}

#[test]
fn treemap_without_y_plots_one_per_row() {
    let json = render(ChartKind::Treemap, "region", None);
    assert_eq!(json["type"], "bar");
    assert_eq!(json["data"]["datasets"][0]["label"], "count");
    assert_eq!(json["data"]["datasets"][0]["data"], json!([1.0, 1.0, 1.0, 1.0, 1.0, 1.0]));
    assert_eq!(json["data"]["datasets"][0]["backgroundColor"].as_array().unwrap().len(), 6);
}

#[test]
fn waterfall_payload_runs_a_total_and_treats_text_as_zero() {
    let json = render(ChartKind::Waterfall, "month", Some("units"));
    assert_eq!(json["type"], "bar");
    assert_eq!(json["data"]["labels"], json!(["jan", "jan", "feb", "feb", "mar", "mar"]));
    assert_eq!(
        json["data"]["datasets"][0]["data"],
        json!([12.0, 19.0, 28.0, 28.0, 43.0, 54.0])
    );
}

#[test]
fn waterfall_without_y_is_a_running_row_count() {
    let json = render(ChartKind::Waterfall, "month", None);
    assert_eq!(json["data"]["datasets"][0]["label"], "count");
    assert_eq!(
        json["data"]["datasets"][0]["data"],
        json!([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    );
}

#[test]
fn nothing_renders_for_an_empty_dataset() {
    let empty = ingest_csv_from_path("tests/fixtures/header_only.csv").unwrap();
    for kind in ChartKind::ALL {
        let sel = ChartSelection::with_default_columns(kind, &empty.columns);
        assert!(
            select_chart_payload(&empty, &sel, &RenderOptions::default()).is_none(),
            "{kind} rendered from an empty dataset"
        );
    }
}

#[test]
fn nothing_renders_without_x_for_any_kind() {
    let ds = sales();
    for kind in ChartKind::ALL {
        let sel = ChartSelection::new(kind).with_y("units");
        assert!(select_chart_payload(&ds, &sel, &RenderOptions::default()).is_none(), "{kind}");
    }
}

#[test]
fn only_exempt_kinds_render_without_y() {
    let ds = sales();
    for kind in ChartKind::ALL {
        let sel = ChartSelection::new(kind).with_x("month");
        let rendered = select_chart_payload(&ds, &sel, &RenderOptions::default()).is_some();
        assert_eq!(rendered, !kind.requires_y(), "{kind}");
    }
    let exempt: Vec<ChartKind> = ChartKind::ALL.into_iter().filter(|k| !k.requires_y()).collect();
    assert_eq!(
        exempt,
        vec![ChartKind::Pie, ChartKind::Radar, ChartKind::Treemap, ChartKind::Waterfall]
    );
}

#[test]
fn every_kind_renders_on_its_own_surface() {
    let ds = sales();
    for kind in ChartKind::ALL {
        let sel = ChartSelection::with_default_columns(kind, &ds.columns);
        let payload = select_chart_payload(&ds, &sel, &RenderOptions::default()).unwrap();
        let surface = match payload {
            ChartPayload::Declarative(_) => RenderSurface::Declarative,
            ChartPayload::Canvas(_) => RenderSurface::Canvas,
        };
        assert_eq!(surface, kind.surface(), "{kind}");
    }
}

#[test]
fn render_options_change_sizes_palette_and_coercion() {
    let ds = ingest_csv_from_str("g,v\na,12abc\nb,3\n").unwrap();
    let opts = RenderOptions {
        width: 800,
        height: 200,
        coercion: CoercionPolicy::LeadingPrefix,
        palette: Palette::new(vec!["red".to_string()]),
        ..Default::default()
    };

    let sel = ChartSelection::new(ChartKind::Line).with_x("g").with_y("v");
    let json = serde_json::to_value(select_chart_payload(&ds, &sel, &opts).unwrap()).unwrap();
    assert_eq!(json["options"]["width"], 800);
    assert_eq!(json["options"]["height"], 200);
    assert_eq!(json["data"]["values"][0][0]["y"], 12.0);

    let sel = ChartSelection::new(ChartKind::Pie).with_x("g").with_y("v");
    let json = serde_json::to_value(select_chart_payload(&ds, &sel, &opts).unwrap()).unwrap();
    assert_eq!(json["data"]["datasets"][0]["data"], json!([12.0, 3.0]));
    assert_eq!(json["data"]["datasets"][0]["backgroundColor"], json!(["red", "red"]));

    let strict = RenderOptions::default();
    let json = serde_json::to_value(select_chart_payload(&ds, &sel, &strict).unwrap()).unwrap();
    assert_eq!(json["data"]["datasets"][0]["data"], json!([0.0, 3.0]));
}

#[test]
fn infinite_prefix_numbers_stay_visible_in_json() {
    let ds = ingest_csv_from_str("g,v\na,Infinity\nb,2\n").unwrap();
    let opts = RenderOptions {
        coercion: CoercionPolicy::LeadingPrefix,
        ..Default::default()
    };

    let sel = ChartSelection::new(ChartKind::Bar).with_x("g").with_y("v");
    let json = serde_json::to_value(select_chart_payload(&ds, &sel, &opts).unwrap()).unwrap();
    assert_eq!(
        json["data"],
        json!([{"index": "a", "value": "Infinity"}, {"index": "b", "value": 2.0}])
    );

    let sel = ChartSelection::new(ChartKind::Waterfall).with_x("g").with_y("v");
    let json = serde_json::to_value(select_chart_payload(&ds, &sel, &opts).unwrap()).unwrap();
    assert_eq!(json["data"]["datasets"][0]["data"], json!(["Infinity", "Infinity"]));

    let sel = ChartSelection::new(ChartKind::Heatmap).with_x("g").with_y("v");
    let json = serde_json::to_value(select_chart_payload(&ds, &sel, &opts).unwrap()).unwrap();
    assert_eq!(json["data"]["values"], json!([["Infinity", 0.0], [0.0, 2.0]]));
}
