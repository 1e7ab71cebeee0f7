//! Draft state of every form in the app and the checks that turn a draft
//! into a request body. Views only ever send what `build` returns, so an
//! incomplete form never reaches the network.

use crate::error::ValidationError;
use crate::requests::{
    ClusteringRequest, PredictRequest, PreprocessRequest, RegressionRequest, RollingWindow,
    StatsRequest, TrendsRequest,
};
use crate::selection::Selection;
use crate::vocab::{
    ClusterMetric, CodingRate, Dimensionality, HopInterval, PacketCategory,
    PreprocessAttribute, ResampleFreq, RollingDuration, RollingIntervalType, StatColumn,
};
use std::str::FromStr;

/// Adds `item` if absent, removes it otherwise. Order of the rest is kept.
pub fn toggle<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if let Some(pos) = list.iter().position(|x| *x == item) {
        list.remove(pos);
    } else {
        list.push(item);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreprocessForm {
    /// Month the smoothing pass runs over; only its year and month are used.
    pub period: Selection,
    pub attributes: Vec<PreprocessAttribute>,
    pub window_kind: Option<RollingIntervalType>,
    pub window_value: String,
}

impl PreprocessForm {
    pub fn toggle_attribute(&mut self, attribute: PreprocessAttribute) {
        toggle(&mut self.attributes, attribute);
    }

    /// A count and a duration token are not interchangeable, so switching
    /// kind drops the value typed for the previous one.
    pub fn set_window_kind(&mut self, kind: Option<RollingIntervalType>) {
        if self.window_kind != kind {
            self.window_value.clear();
        }
        self.window_kind = kind;
    }

    pub fn build(&self) -> Result<PreprocessRequest, ValidationError> {
        let incomplete = ValidationError::IncompletePreprocessing;
        if self.attributes.is_empty() {
            return Err(incomplete);
        }
        let (year, month) = self.period.period().ok_or(incomplete.clone())?;
        let kind = self.window_kind.ok_or(incomplete.clone())?;
        let raw = self.window_value.trim();
        let window = match kind {
            RollingIntervalType::Count => match raw.parse::<u32>() {
                Ok(points) if points > 0 => RollingWindow::Points(points),
                _ => return Err(incomplete),
            },
            RollingIntervalType::Duration => RollingDuration::from_str(raw)
                .map(RollingWindow::Duration)
                .map_err(|_| incomplete)?,
        };
        Ok(PreprocessRequest {
            year,
            month,
            attr_list: self.attributes.clone(),
            rolling_interval_type: kind,
            rolling_interval: window,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsForm {
    pub columns: Vec<StatColumn>,
}

impl StatsForm {
    pub fn toggle_column(&mut self, column: StatColumn) {
        toggle(&mut self.columns, column);
    }

    pub fn build(&self, selection: &Selection) -> Result<StatsRequest, ValidationError> {
        if self.columns.is_empty() {
            return Err(ValidationError::NoColumns);
        }
        Ok(StatsRequest {
            year: selection.year(),
            month: selection.month(),
            column_list: self.columns.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusteringForm {
    pub dimensionality: Dimensionality,
    pub metrics: Vec<ClusterMetric>,
}

impl ClusteringForm {
    pub fn toggle_metric(&mut self, metric: ClusterMetric) {
        toggle(&mut self.metrics, metric);
    }

    /// Metric warning to show next to the checkboxes, if any.
    pub fn metric_warning(&self) -> Option<ValidationError> {
        let expected = self.dimensionality.count();
        let selected = self.metrics.len();
        if selected > expected {
            Some(ValidationError::TooManyMetrics { expected, selected })
        } else if selected < expected {
            Some(ValidationError::TooFewMetrics { expected, selected })
        } else {
            None
        }
    }

    pub fn check(&self, selection: &Selection) -> Result<(), ValidationError> {
        if let Some(warning) = self.metric_warning() {
            return Err(warning);
        }
        if selection.categories().is_empty() {
            return Err(ValidationError::NoCategories);
        }
        Ok(())
    }

    pub fn build(&self, selection: &Selection) -> Result<ClusteringRequest, ValidationError> {
        self.check(selection)?;
        Ok(ClusteringRequest {
            year: selection.year(),
            month: selection.month(),
            data_types: selection.categories().to_vec(),
            n_metrics: self.dimensionality.count(),
            metrics: self.metrics.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendsForm {
    pub hop_interval: Option<HopInterval>,
    pub hop_value: Option<u32>,
    pub freq: Option<ResampleFreq>,
}

impl TrendsForm {
    /// Zero, negative and non-numeric inputs all leave the hop value unset.
    pub fn set_hop_value_input(&mut self, raw: &str) {
        self.hop_value = raw.trim().parse::<u32>().ok().filter(|v| *v > 0);
    }

    pub fn is_complete(&self) -> bool {
        self.hop_interval.is_some() && self.hop_value.is_some() && self.freq.is_some()
    }

    pub fn build(&self, selection: &Selection) -> Result<TrendsRequest, ValidationError> {
        match (self.hop_interval, self.hop_value, self.freq) {
            (Some(hop_interval), Some(hop_value), Some(freq)) => Ok(TrendsRequest {
                year: selection.year(),
                month: selection.month(),
                categories: selection.categories().to_vec(),
                hop_interval,
                hop_value,
                freq,
            }),
            _ => Err(ValidationError::IncompleteTrends),
        }
    }
}

/// Regression runs per packet type and needs a full period.
pub fn regression_request(
    selection: &Selection,
    data_type: PacketCategory,
) -> Result<RegressionRequest, ValidationError> {
    let (year, month) = selection.period().ok_or(ValidationError::PeriodRequired)?;
    Ok(RegressionRequest { year, month, data_type })
}

/// Raw text of the prediction inputs, prefilled with a typical EU868 uplink.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictForm {
    pub spreading_factor: String,
    pub bandwidth: String,
    pub bit_rate: String,
    pub coding_rate: CodingRate,
    pub airtime: String,
    pub freq: String,
    pub rssi: String,
    pub lsnr: String,
    pub size: String,
    pub packet_type: PacketCategory,
}

impl Default for PredictForm {
    fn default() -> Self {
        Self {
            spreading_factor: "7".into(),
            bandwidth: "125".into(),
            bit_rate: "5468.75".into(),
            coding_rate: CodingRate::FourFifths,
            airtime: "66.816".into(),
            freq: "868.3".into(),
            rssi: "-113".into(),
            lsnr: "-3.8".into(),
            size: "29".into(),
            packet_type: PacketCategory::ConfirmedDataUp,
        }
    }
}

fn number(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::InvalidNumber { field })
}

impl PredictForm {
    pub fn build(&self) -> Result<PredictRequest, ValidationError> {
        Ok(PredictRequest {
            spreading_factor: number(&self.spreading_factor, "SF")?,
            bandwidth: number(&self.bandwidth, "Bandwidth")?,
            bit_rate: number(&self.bit_rate, "BitRate")?,
            coding_rate: self.coding_rate,
            airtime: number(&self.airtime, "Airtime")?,
            freq: number(&self.freq, "Frequency")?,
            rssi: number(&self.rssi, "RSSI")?,
            lsnr: number(&self.lsnr, "LSNR")?,
            size: number(&self.size, "Size")?,
            packet_type: self.packet_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_with(categories: &[PacketCategory]) -> Selection {
        let mut sel = Selection::default();
        for c in categories {
            sel.toggle_category(*c);
        }
        sel
    }

    #[test]
    fn preprocessing_requires_every_field_with_one_message() {
        let mut form = PreprocessForm::default();
        let message = form.build().unwrap_err().to_string();

        form.toggle_attribute(PreprocessAttribute::Rssi);
        assert_eq!(form.build().unwrap_err().to_string(), message);

        form.set_window_kind(Some(RollingIntervalType::Count));
        assert_eq!(form.build().unwrap_err().to_string(), message);

        form.window_value = "0".into();
        assert_eq!(form.build().unwrap_err().to_string(), message);

        form.window_value = "abc".into();
        assert_eq!(form.build().unwrap_err().to_string(), message);

        form.window_value = " 48 ".into();
        assert_eq!(form.build().unwrap_err().to_string(), message);

        form.period.set_year_input("2024").unwrap();
        assert_eq!(form.build().unwrap_err().to_string(), message);

        form.period.set_month_input("2024-03").unwrap();
        let req = form.build().unwrap();
        assert_eq!((req.year, req.month), (2024, 3));
        assert_eq!(req.rolling_interval, RollingWindow::Points(48));
        assert_eq!(req.rolling_interval_type, RollingIntervalType::Count);
    }

    #[test]
    fn duration_window_keeps_token() {
        let mut form = PreprocessForm::default();
        form.period.set_year_input("2023").unwrap();
        form.period.set_month_input("2023-11").unwrap();
        form.toggle_attribute(PreprocessAttribute::Airtime);
        form.set_window_kind(Some(RollingIntervalType::Duration));
        form.window_value = "12h".into();
        let req = form.build().unwrap();
        assert_eq!(req.rolling_interval, RollingWindow::Duration(RollingDuration::HalfDay));
        assert_eq!(req.rolling_interval.kind(), RollingIntervalType::Duration);
    }

    #[test]
    fn preprocessing_body_carries_the_period() {
        let mut form = PreprocessForm::default();
        form.period.set_year_input("2024").unwrap();
        form.period.set_month_input("2024-03").unwrap();
        form.toggle_attribute(PreprocessAttribute::Rssi);
        form.set_window_kind(Some(RollingIntervalType::Count));
        form.window_value = "30".into();
        assert_eq!(
            serde_json::to_value(form.build().unwrap()).unwrap(),
            serde_json::json!({
                "year": 2024,
                "month": 3,
                "attrList": ["rssi"],
                "rollingIntervalType": "nb",
                "rollingInterval": 30
            })
        );
    }

    #[test]
    fn switching_window_kind_clears_value() {
        let mut form = PreprocessForm::default();
        form.set_window_kind(Some(RollingIntervalType::Count));
        form.window_value = "30".into();
        form.set_window_kind(Some(RollingIntervalType::Count));
        assert_eq!(form.window_value, "30");
        form.set_window_kind(Some(RollingIntervalType::Duration));
        assert!(form.window_value.is_empty());
    }

    #[test]
    fn stats_without_columns_is_rejected() {
        let sel = Selection::default();
        let mut form = StatsForm::default();
        assert_eq!(form.build(&sel), Err(ValidationError::NoColumns));
        form.toggle_column(StatColumn::SpreadingFactor);
        form.toggle_column(StatColumn::Adr);
        let req = form.build(&sel).unwrap();
        assert_eq!(req.column_list, vec![StatColumn::SpreadingFactor, StatColumn::Adr]);
    }

    #[test]
    fn clustering_needs_exact_metric_count_and_a_category() {
        let mut form = ClusteringForm {
            dimensionality: Dimensionality::Two,
            metrics: vec![],
        };
        let none = Selection::default();
        let some = selection_with(&[PacketCategory::JoinRequest]);

        form.toggle_metric(ClusterMetric::Rssi);
        assert_eq!(
            form.check(&some),
            Err(ValidationError::TooFewMetrics { expected: 2, selected: 1 })
        );

        form.toggle_metric(ClusterMetric::Lsnr);
        assert_eq!(form.check(&none), Err(ValidationError::NoCategories));
        assert!(form.check(&some).is_ok());

        form.toggle_metric(ClusterMetric::Airtime);
        assert_eq!(
            form.check(&some),
            Err(ValidationError::TooManyMetrics { expected: 2, selected: 3 })
        );

        form.dimensionality = Dimensionality::Three;
        let req = form.build(&some).unwrap();
        assert_eq!(req.n_metrics, 3);
        assert_eq!(req.metrics.len(), 3);
        assert_eq!(req.data_types, vec![PacketCategory::JoinRequest]);
    }

    #[test]
    fn trends_hop_value_must_be_positive() {
        let mut form = TrendsForm {
            hop_interval: Some(HopInterval::Days),
            hop_value: None,
            freq: Some(ResampleFreq::Hour),
        };
        for raw in ["", "0", "-2", "1.5", "x"] {
            form.set_hop_value_input(raw);
            assert!(!form.is_complete(), "{raw:?} should not complete the form");
        }
        form.set_hop_value_input("3");
        assert!(form.is_complete());
        let req = form.build(&Selection::default()).unwrap();
        assert_eq!(req.hop_value, 3);
        assert!(req.categories.is_empty());
    }

    #[test]
    fn incomplete_trends_are_rejected() {
        let form = TrendsForm {
            hop_interval: None,
            hop_value: Some(1),
            freq: Some(ResampleFreq::Day),
        };
        assert_eq!(form.build(&Selection::default()), Err(ValidationError::IncompleteTrends));
    }

    #[test]
    fn regression_requires_full_period() {
        let mut sel = selection_with(&[PacketCategory::Stat]);
        assert_eq!(
            regression_request(&sel, PacketCategory::Stat),
            Err(ValidationError::PeriodRequired)
        );
        sel.set_year(Some(2025)).unwrap();
        sel.set_month(Some(11)).unwrap();
        let req = regression_request(&sel, PacketCategory::Stat).unwrap();
        assert_eq!((req.year, req.month), (2025, 11));
    }

    #[test]
    fn predict_form_defaults_build() {
        let req = PredictForm::default().build().unwrap();
        assert_eq!(req.bit_rate, 5468.75);
        assert_eq!(req.rssi, -113.0);
    }

    #[test]
    fn predict_form_names_the_bad_field() {
        let form = PredictForm {
            lsnr: "n/a".into(),
            ..PredictForm::default()
        };
        assert_eq!(form.build(), Err(ValidationError::InvalidNumber { field: "LSNR" }));
        assert_eq!(form.build().unwrap_err().to_string(), "LSNR must be a number");
    }
}
