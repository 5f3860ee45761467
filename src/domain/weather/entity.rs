use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Human-readable condition for a WMO weather code.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn condition_for_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Drizzle: Light",
        53 => "Drizzle: Moderate",
        55 => "Drizzle: Dense intensity",
        61 => "Rain: Slight",
        63 => "Rain: Moderate",
        65 => "Rain: Heavy intensity",
        71 => "Snow fall: Slight",
        73 => "Snow fall: Moderate",
        75 => "Snow fall: Heavy intensity",
        95 => "Thunderstorm: Slight or moderate",
        _ => "Unknown",
    }
}

/// Current conditions at a coordinate. Field names follow the upstream
/// `current_weather` object so the front end can consume either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeatherSnapshot {
    /// °C
    pub temperature: f64,
    /// km/h
    pub windspeed: f64,
    pub weathercode: i32,
    #[serde(default)]
    pub condition: String,
}

#[derive(Deserialize)]
struct CurrentWeatherFields {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

impl WeatherSnapshot {
    pub fn new(temperature: f64, windspeed: f64, weathercode: i32) -> Self {
        Self {
            temperature,
            windspeed,
            weathercode,
            condition: condition_for_code(weathercode).to_string(),
        }
    }

    /// Reads the `current_weather` object of a forecast payload.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let current = payload.get("current_weather")?;
        let fields: CurrentWeatherFields = serde_json::from_value(current.clone()).ok()?;
        Some(Self::new(fields.temperature, fields.windspeed, fields.weathercode))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub weathercode: i32,
    pub condition: String,
}

/// Daily forecast, in upstream order (usually 7 days).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForecastSeries {
    pub days: Vec<ForecastDay>,
}

#[derive(Deserialize)]
struct DailyColumns {
    time: Vec<NaiveDate>,
    temperature_2m_min: Vec<Option<f64>>,
    temperature_2m_max: Vec<Option<f64>>,
    weathercode: Vec<Option<i32>>,
}

impl ForecastSeries {
    /// Zips the column arrays of the `daily` object. Rows with a missing value in any
    /// column are dropped; the series ends at the shortest column.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let daily = payload.get("daily")?;
        let columns: DailyColumns = serde_json::from_value(daily.clone()).ok()?;

        let days = columns
            .time
            .into_iter()
            .zip(columns.temperature_2m_min)
            .zip(columns.temperature_2m_max)
            .zip(columns.weathercode)
            .filter_map(|(((date, min), max), code)| {
                let code = code?;
                Some(ForecastDay {
                    date,
                    temperature_min: min?,
                    temperature_max: max?,
                    weathercode: code,
                    condition: condition_for_code(code).to_string(),
                })
            })
            .collect();

        Some(Self { days })
    }

    pub fn first_days(mut self, n: usize) -> Self {
        self.days.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
