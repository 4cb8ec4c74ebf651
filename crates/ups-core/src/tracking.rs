//! Tracking response accessors

use chrono::NaiveDate;
use ups_xml::XmlValue;

use crate::error::UpsError;
use crate::result::UpsResult;

const ACTIVITY_PATH: [&str; 4] = ["TrackResponse", "Shipment", "Package", "Activity"];

/// Status type code of one tracking activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityStatus {
    InTransit,
    Delivered,
    Exception,
    Pickup,
    Manifest,
    /// Pass-through for codes outside the known set
    Other(String),
}

impl ActivityStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "I" => ActivityStatus::InTransit,
            "D" => ActivityStatus::Delivered,
            "X" => ActivityStatus::Exception,
            "P" => ActivityStatus::Pickup,
            "M" => ActivityStatus::Manifest,
            other => ActivityStatus::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ActivityStatus::InTransit => "I",
            ActivityStatus::Delivered => "D",
            ActivityStatus::Exception => "X",
            ActivityStatus::Pickup => "P",
            ActivityStatus::Manifest => "M",
            ActivityStatus::Other(code) => code,
        }
    }
}

/// One tracking event record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub status: ActivityStatus,
    pub status_description: Option<String>,
    /// Carrier date, `YYYYMMDD`
    pub date: String,
    /// Carrier time, `HHMMSS`
    pub time: Option<String>,
}

impl Activity {
    fn from_xml(value: &XmlValue) -> Result<Self, UpsError> {
        let code = value
            .path(&["Status", "StatusType", "Code"])
            .and_then(XmlValue::as_text)
            .ok_or_else(|| UpsError::missing(&["Activity", "Status", "StatusType", "Code"]))?;
        let status_description = value
            .path(&["Status", "StatusType", "Description"])
            .and_then(XmlValue::as_text)
            .map(str::to_string);
        let date = value
            .path(&["Date"])
            .and_then(XmlValue::as_text)
            .ok_or_else(|| UpsError::missing(&["Activity", "Date"]))?;
        let time = value
            .path(&["Time"])
            .and_then(XmlValue::as_text)
            .map(str::to_string);

        Ok(Activity {
            status: ActivityStatus::from_code(code),
            status_description,
            date: date.to_string(),
            time,
        })
    }
}

/// Delivery status derived from one track response.
///
/// Accessors recompute from the stored response on every call; nothing is
/// cached between accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingInfo {
    tracking_number: String,
    result: UpsResult,
}

impl TrackingInfo {
    pub fn new(tracking_number: impl Into<String>, result: UpsResult) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            result,
        }
    }

    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    pub fn result(&self) -> &UpsResult {
        &self.result
    }

    /// The shipment's activity history, newest first as the carrier sends it.
    ///
    /// A response carrying exactly one activity arrives collapsed to a bare
    /// record and is normalized to a one-element list here.
    ///
    /// # Errors
    ///
    /// Returns [`UpsError::MissingField`] when the activity path is absent —
    /// an error or malformed response, never silently "no activity".
    pub fn activities(&self) -> Result<Vec<Activity>, UpsError> {
        let document = self.result.parse()?;
        let activities = document
            .path(&ACTIVITY_PATH)
            .ok_or_else(|| UpsError::missing(&ACTIVITY_PATH))?;
        activities.as_list().into_iter().map(Activity::from_xml).collect()
    }

    /// The delivery date, when a delivered activity exists.
    ///
    /// Returns the date of the first activity with status code `D`, or `None`
    /// when the shipment has not been delivered.
    pub fn delivered(&self) -> Result<Option<NaiveDate>, UpsError> {
        for activity in self.activities()? {
            if activity.status == ActivityStatus::Delivered {
                let date = NaiveDate::parse_from_str(&activity.date, "%Y%m%d").map_err(|e| {
                    UpsError::InvalidValue {
                        field: "Activity/Date".to_string(),
                        reason: e.to_string(),
                    }
                })?;
                return Ok(Some(date));
            }
        }
        Ok(None)
    }

    /// True iff any activity has the in-transit status code
    pub fn in_transit(&self) -> Result<bool, UpsError> {
        Ok(self
            .activities()?
            .iter()
            .any(|activity| activity.status == ActivityStatus::InTransit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        assert_eq!(ActivityStatus::from_code("D"), ActivityStatus::Delivered);
        assert_eq!(ActivityStatus::from_code("I"), ActivityStatus::InTransit);
        assert_eq!(ActivityStatus::from_code("X"), ActivityStatus::Exception);
        assert_eq!(
            ActivityStatus::from_code("Q"),
            ActivityStatus::Other("Q".to_string())
        );
        assert_eq!(ActivityStatus::Other("Q".to_string()).code(), "Q");
    }
}
