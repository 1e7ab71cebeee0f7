//! Closed vocabularies accepted by the analysis backend.
//!
//! Every enum serializes to the exact token the backend expects, and
//! `strum` gives us the same token through `Display`/`FromStr` so `<select>`
//! values round-trip without a separate lookup table.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// LoRaWAN message types as labelled in the parsed datasets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum PacketCategory {
    #[serde(rename = "Confirmed Data Up")]
    #[strum(serialize = "Confirmed Data Up")]
    ConfirmedDataUp,
    #[serde(rename = "Confirmed Data Down")]
    #[strum(serialize = "Confirmed Data Down")]
    ConfirmedDataDown,
    #[serde(rename = "Join Accept")]
    #[strum(serialize = "Join Accept")]
    JoinAccept,
    #[serde(rename = "Join Request")]
    #[strum(serialize = "Join Request")]
    JoinRequest,
    Proprietary,
    #[serde(rename = "RFU")]
    #[strum(serialize = "RFU")]
    Rfu,
    Stat,
    #[serde(rename = "Unconfirmed Data Up")]
    #[strum(serialize = "Unconfirmed Data Up")]
    UnconfirmedDataUp,
    #[serde(rename = "Unconfirmed Data Down")]
    #[strum(serialize = "Unconfirmed Data Down")]
    UnconfirmedDataDown,
}

impl PacketCategory {
    /// Message types a single packet can be submitted as for prediction.
    /// `Stat` frames are gateway reports and never carry a device.
    pub fn predictable() -> impl Iterator<Item = PacketCategory> {
        Self::iter().filter(|c| *c != PacketCategory::Stat)
    }
}

/// Numeric attributes the outlier-smoothing pass can run over.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum PreprocessAttribute {
    Airtime,
    BitRate,
    #[serde(rename = "rssi")]
    #[strum(serialize = "rssi")]
    Rssi,
    #[serde(rename = "lsnr")]
    #[strum(serialize = "lsnr")]
    Lsnr,
    #[serde(rename = "size")]
    #[strum(serialize = "size")]
    Size,
}

/// How the rolling window of the preprocessing pass is expressed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum RollingIntervalType {
    /// Fixed number of data points.
    #[serde(rename = "nb")]
    #[strum(serialize = "nb")]
    Count,
    /// Named time span, see [`RollingDuration`].
    #[serde(rename = "Duree")]
    #[strum(serialize = "Duree")]
    Duration,
}

impl RollingIntervalType {
    pub fn label(&self) -> &'static str {
        match self {
            RollingIntervalType::Count => "Number of points",
            RollingIntervalType::Duration => "Time span",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum RollingDuration {
    #[serde(rename = "30min")]
    #[strum(serialize = "30min")]
    HalfHour,
    #[serde(rename = "12h")]
    #[strum(serialize = "12h")]
    HalfDay,
    #[serde(rename = "1d")]
    #[strum(serialize = "1d")]
    Day,
    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    Week,
    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    Month,
    #[serde(rename = "365d")]
    #[strum(serialize = "365d")]
    Year,
}

impl RollingDuration {
    pub fn label(&self) -> &'static str {
        match self {
            RollingDuration::HalfHour => "30 minutes",
            RollingDuration::HalfDay => "12 hours",
            RollingDuration::Day => "1 day",
            RollingDuration::Week => "7 days",
            RollingDuration::Month => "30 days",
            RollingDuration::Year => "365 days",
        }
    }
}

/// Unit of the sliding window used by trend resampling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HopInterval {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

/// Pandas-style resampling frequency tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum ResampleFreq {
    #[serde(rename = "10s")]
    #[strum(serialize = "10s")]
    TenSeconds,
    #[serde(rename = "30s")]
    #[strum(serialize = "30s")]
    ThirtySeconds,
    #[serde(rename = "min")]
    #[strum(serialize = "min")]
    Minute,
    #[serde(rename = "5min")]
    #[strum(serialize = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    #[strum(serialize = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    #[strum(serialize = "30min")]
    ThirtyMinutes,
    #[serde(rename = "h")]
    #[strum(serialize = "h")]
    Hour,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Day,
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Week,
    #[serde(rename = "M")]
    #[strum(serialize = "M")]
    Month,
    #[serde(rename = "Y")]
    #[strum(serialize = "Y")]
    Year,
}

impl ResampleFreq {
    pub fn label(&self) -> &'static str {
        match self {
            ResampleFreq::TenSeconds => "10 seconds",
            ResampleFreq::ThirtySeconds => "30 seconds",
            ResampleFreq::Minute => "1 minute",
            ResampleFreq::FiveMinutes => "5 minutes",
            ResampleFreq::FifteenMinutes => "15 minutes",
            ResampleFreq::ThirtyMinutes => "30 minutes",
            ResampleFreq::Hour => "1 hour",
            ResampleFreq::Day => "1 day",
            ResampleFreq::Week => "1 week",
            ResampleFreq::Month => "1 month",
            ResampleFreq::Year => "1 year",
        }
    }
}

/// Numeric packet fields the clustering plots can be drawn over.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum ClusterMetric {
    Airtime,
    BitRate,
    #[serde(rename = "rssi")]
    #[strum(serialize = "rssi")]
    Rssi,
    #[serde(rename = "lsnr")]
    #[strum(serialize = "lsnr")]
    Lsnr,
    #[serde(rename = "size")]
    #[strum(serialize = "size")]
    Size,
    #[serde(rename = "freq")]
    #[strum(serialize = "freq")]
    Freq,
    #[serde(rename = "SF")]
    #[strum(serialize = "SF")]
    SpreadingFactor,
    Bandwidth,
}

/// Columns the descriptive statistics endpoint knows how to chart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum StatColumn {
    Bandwidth,
    #[serde(rename = "Coding_rate")]
    #[strum(serialize = "Coding_rate")]
    CodingRate,
    #[serde(rename = "GW_EUI")]
    #[strum(serialize = "GW_EUI")]
    GatewayEui,
    #[serde(rename = "SF")]
    #[strum(serialize = "SF")]
    SpreadingFactor,
    #[serde(rename = "freq")]
    #[strum(serialize = "freq")]
    Freq,
    #[serde(rename = "modu")]
    #[strum(serialize = "modu")]
    Modulation,
    #[serde(rename = "adr")]
    #[strum(serialize = "adr")]
    Adr,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum CodingRate {
    #[default]
    #[serde(rename = "4/5")]
    #[strum(serialize = "4/5")]
    FourFifths,
    #[serde(rename = "4/6")]
    #[strum(serialize = "4/6")]
    FourSixths,
    #[serde(rename = "4/7")]
    #[strum(serialize = "4/7")]
    FourSevenths,
    #[serde(rename = "4/8")]
    #[strum(serialize = "4/8")]
    FourEighths,
}

/// Number of metrics a clustering plot is drawn over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Dimensionality {
    #[default]
    One,
    Two,
    Three,
}

impl Dimensionality {
    pub fn count(&self) -> usize {
        match self {
            Dimensionality::One => 1,
            Dimensionality::Two => 2,
            Dimensionality::Three => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimensionality::One => "1D",
            Dimensionality::Two => "2D",
            Dimensionality::Three => "3D",
        }
    }
}

/// Analysis modes offered once a period or category filter is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AnalysisMode {
    Regression,
    Trends,
    Clustering,
    Statistics,
    /// Slot kept in the menu for an analysis that has no view yet.
    Reserved,
}

impl AnalysisMode {
    pub fn code(&self) -> u8 {
        match self {
            AnalysisMode::Regression => 1,
            AnalysisMode::Trends => 2,
            AnalysisMode::Clustering => 3,
            AnalysisMode::Statistics => 4,
            AnalysisMode::Reserved => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::iter().find(|m| m.code() == code)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AnalysisMode::Regression => "Regression / Prediction",
            AnalysisMode::Trends => "Seasonality analysis",
            AnalysisMode::Clustering => "Clustering",
            AnalysisMode::Statistics => "Statistics",
            AnalysisMode::Reserved => "More analyses",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisMode::Regression => "Fit RSSI and SNR models for one packet type",
            AnalysisMode::Trends => "Packet counts resampled over sliding windows",
            AnalysisMode::Clustering => "Scatter the selected packet types over 1 to 3 metrics",
            AnalysisMode::Statistics => {
                "Distribution of radio parameters, globally and per packet type"
            }
            AnalysisMode::Reserved => "Not available yet",
        }
    }
}

/// Top-level panels of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Panel {
    Upload,
    Process,
    Predict,
}

impl Panel {
    pub fn code(&self) -> u8 {
        match self {
            Panel::Upload => 1,
            Panel::Process => 2,
            Panel::Predict => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Upload => "Upload",
            Panel::Process => "Processing",
            Panel::Predict => "Prediction",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Panel::Upload => "Import a dataset and clean it",
            Panel::Process => "Pick one of several analysis methods",
            Panel::Predict => "Predict the source of a LoRaWAN packet",
        }
    }
}
