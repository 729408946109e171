use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meteoserver::{extract_hourly_forecast, extract_sun_data};
use serde_json::{json, Value};

fn sun_document(hours: u32) -> Value {
    let forecast: Vec<Value> = (0..hours)
        .map(|h| {
            json!({
                "time": (1609459200 + h as i64 * 3600).to_string(),
                "cet": format!("{:02}-01-2021 {:02}:00", 1 + h / 24, h % 24),
                "elev": "12.3", "az": "180.5", "temp": "4", "gr": "120", "sd": "30",
                "tc": "50", "lc": "10", "mc": "20", "hc": "30", "vis": "25000", "prec": "0.2"
            })
        })
        .collect();
    json!({
        "plaatsnaam": [{"plaats": "De Bilt"}],
        "current": [{
            "cet": "01-01-2021 10:00", "sr": "08:48", "ss": "16:37", "time": "1609491600",
            "elev": "10", "az": "151", "temp": "3", "gr": "52", "sd": "12", "tc": "60",
            "vis": "12000", "prec": "0"
        }],
        "forecast": forecast
    })
}

fn hourly_document(hours: u32) -> Value {
    let data: Vec<Value> = (0..hours)
        .map(|h| json!({"tijd": (1609459200 + h as i64 * 3600).to_string(), "temp": "4", "winds": 3}))
        .collect();
    json!({"plaatsnaam": [{"plaats": "De Bilt"}], "data": data})
}

fn bench_extract(c: &mut Criterion) {
    // Meteoserver returns 112 forecast rows for the sun data and 152 for the hourly forecast.
    let sun = sun_document(112);
    let hourly = hourly_document(152);
    c.bench_function("extract_sun_data", |b| {
        b.iter(|| extract_sun_data(black_box(sun.clone())))
    });
    c.bench_function("extract_hourly_forecast", |b| {
        b.iter(|| extract_hourly_forecast(black_box(hourly.clone())))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
