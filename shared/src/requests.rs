//! JSON bodies posted to the analysis backend. Field names follow the
//! backend's pydantic models, hence the mixed casing.

use crate::vocab::{
    ClusterMetric, CodingRate, HopInterval, PacketCategory, PreprocessAttribute,
    ResampleFreq, RollingDuration, RollingIntervalType, StatColumn,
};
use serde::{Deserialize, Serialize};

/// Either a point count or a duration token; the backend accepts `str | int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RollingWindow {
    Points(u32),
    Duration(RollingDuration),
}

impl RollingWindow {
    pub fn kind(&self) -> RollingIntervalType {
        match self {
            RollingWindow::Points(_) => RollingIntervalType::Count,
            RollingWindow::Duration(_) => RollingIntervalType::Duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessRequest {
    pub year: i32,
    pub month: u32,
    #[serde(rename = "attrList")]
    pub attr_list: Vec<PreprocessAttribute>,
    #[serde(rename = "rollingIntervalType")]
    pub rolling_interval_type: RollingIntervalType,
    #[serde(rename = "rollingInterval")]
    pub rolling_interval: RollingWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    #[serde(rename = "columnList")]
    pub column_list: Vec<StatColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub data_types: Vec<PacketCategory>,
    pub n_metrics: usize,
    pub metrics: Vec<ClusterMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionRequest {
    pub year: i32,
    pub month: u32,
    pub data_type: PacketCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub categories: Vec<PacketCategory>,
    #[serde(rename = "hopInterval")]
    pub hop_interval: HopInterval,
    #[serde(rename = "hopValue")]
    pub hop_value: u32,
    pub freq: ResampleFreq,
}

/// Radio-layer characteristics of one packet submitted for device prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "SF")]
    pub spreading_factor: f64,
    #[serde(rename = "Bandwidth")]
    pub bandwidth: f64,
    #[serde(rename = "BitRate")]
    pub bit_rate: f64,
    #[serde(rename = "Coding_rate")]
    pub coding_rate: CodingRate,
    #[serde(rename = "Airtime")]
    pub airtime: f64,
    pub freq: f64,
    pub rssi: f64,
    pub lsnr: f64,
    pub size: f64,
    #[serde(rename = "Type")]
    pub packet_type: PacketCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preprocess_window_keeps_its_wire_type() {
        let by_count = PreprocessRequest {
            year: 2024,
            month: 3,
            attr_list: vec![PreprocessAttribute::Rssi, PreprocessAttribute::Lsnr],
            rolling_interval_type: RollingIntervalType::Count,
            rolling_interval: RollingWindow::Points(30),
        };
        assert_eq!(
            serde_json::to_value(&by_count).unwrap(),
            json!({
                "year": 2024,
                "month": 3,
                "attrList": ["rssi", "lsnr"],
                "rollingIntervalType": "nb",
                "rollingInterval": 30
            })
        );

        let by_duration = PreprocessRequest {
            year: 2023,
            month: 12,
            attr_list: vec![PreprocessAttribute::Airtime],
            rolling_interval_type: RollingIntervalType::Duration,
            rolling_interval: RollingWindow::Duration(RollingDuration::Week),
        };
        assert_eq!(
            serde_json::to_value(&by_duration).unwrap(),
            json!({
                "year": 2023,
                "month": 12,
                "attrList": ["Airtime"],
                "rollingIntervalType": "Duree",
                "rollingInterval": "7d"
            })
        );
    }

    #[test]
    fn trends_without_categories_sends_an_empty_list() {
        let req = TrendsRequest {
            year: Some(2024),
            month: None,
            categories: Vec::new(),
            hop_interval: HopInterval::Days,
            hop_value: 1,
            freq: ResampleFreq::Day,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["categories"], json!([]));
        assert_eq!(value["month"], json!(null));
    }

    #[test]
    fn absent_period_serializes_as_null() {
        let req = StatsRequest {
            year: None,
            month: None,
            column_list: vec![StatColumn::Adr],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"year": null, "month": null, "columnList": ["adr"]})
        );
    }

    #[test]
    fn predict_request_uses_backend_field_names() {
        let req = PredictRequest {
            spreading_factor: 7.0,
            bandwidth: 125.0,
            bit_rate: 5468.75,
            coding_rate: CodingRate::FourFifths,
            airtime: 66.816,
            freq: 868.3,
            rssi: -113.0,
            lsnr: -3.8,
            size: 29.0,
            packet_type: PacketCategory::ConfirmedDataUp,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["SF"], json!(7.0));
        assert_eq!(value["Coding_rate"], json!("4/5"));
        assert_eq!(value["Type"], json!("Confirmed Data Up"));
        assert_eq!(value.as_object().unwrap().len(), 10);
    }
}
