use dashboard::{DashboardApp, Dataset, Figure, ViewSpec};
use std::sync::Arc;

const GAPMINDER: &str = "\
country,year,pop,continent,lifeExp,gdpPercap
Afghanistan,1952,8425333,Asia,28.801,779.4453145
Afghanistan,1957,9240934,Asia,30.332,820.8530296
Albania,1952,1282697,Europe,55.23,1601.056136
Albania,1957,1476505,Europe,59.28,1942.284244
Algeria,1952,9279525,Africa,43.077,2449.008185
Algeria,1957,10270856,Africa,45.685,3013.976023
Angola,1952,4232095,Africa,30.015,3520.610273
Argentina,1957,19610538,Americas,64.399,6856.856212
Australia,1952,8691212,Oceania,69.12,10039.59564
";

fn gapminder() -> DashboardApp {
    let dataset = Arc::new(Dataset::from_csv_str(GAPMINDER).unwrap());
    DashboardApp::gapminder(ViewSpec::gapminder().bind(dataset).unwrap()).unwrap()
}

fn rows_with_year(year: &str) -> usize {
    GAPMINDER
        .lines()
        .skip(1)
        .filter(|line| line.split(',').nth(1) == Some(year))
        .count()
}

#[test]
fn point_count_matches_rows_for_every_stop() {
    let app = gapminder();
    for mark in &app.slider().marks {
        let figure = app.context().update_figure(mark.value);
        assert_eq!(figure.point_count(), rows_with_year(&mark.label));
    }
}

#[test]
fn series_per_distinct_group() {
    let app = gapminder();

    let figure = app.context().update_figure(1952.0);
    assert_eq!(
        figure.series_names(),
        vec!["Asia", "Europe", "Africa", "Oceania"]
    );
    let africa = &figure.data[2];
    assert_eq!(africa.len(), 2);
    assert_eq!(africa.y, vec![Some(43.077), Some(30.015)]);

    let figure = app.context().update_figure(1957.0);
    assert_eq!(
        figure.series_names(),
        vec!["Asia", "Europe", "Africa", "Americas"]
    );
}

#[test]
fn value_without_rows_yields_empty_chart() {
    let app = gapminder();
    let figure: Figure = app.context().update_figure(1999.0);
    assert!(figure.data.is_empty());

    let json = serde_json::to_value(&figure).unwrap();
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["layout"]["xaxis"]["type"], "log");
    assert_eq!(json["layout"]["yaxis"]["range"], serde_json::json!([20.0, 90.0]));
}

#[test]
fn repeated_calls_are_identical() {
    let app = gapminder();
    let first = serde_json::to_string(&app.context().update_figure(1957.0)).unwrap();
    let second = serde_json::to_string(&app.context().update_figure(1957.0)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn slider_spans_observed_years() {
    let app = gapminder();
    let slider = app.slider();
    assert_eq!(slider.min, 1952.0);
    assert_eq!(slider.max, 1957.0);
    assert_eq!(slider.value, 1952.0);
    assert_eq!(slider.stops(), vec![1952.0, 1957.0]);
}

#[test]
fn brain_dashboard_groups_by_gender() {
    let dataset = Arc::new(
        Dataset::from_csv_str(
            "gender,age,headsize,brainwgt\n\
             1,1,4512,1530\n\
             1,2,3738,1297\n\
             2,1,4261,1335\n\
             1,1,3777,1282\n",
        )
        .unwrap(),
    );
    let app = DashboardApp::brain(ViewSpec::brain().bind(dataset).unwrap()).unwrap();

    let figure = app.context().update_figure(1.0);
    assert_eq!(figure.series_names(), vec!["1", "2"]);
    assert_eq!(figure.data[0].x, vec![Some(4512.0), Some(3777.0)]);
    assert_eq!(figure.point_count(), 3);
    assert_eq!(figure.layout.xaxis.title, "Head Size");
    assert_eq!(figure.layout.yaxis.autorange, Some(true));
}
