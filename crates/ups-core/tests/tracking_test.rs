//! Tracking accessor tests against canned carrier responses

use chrono::NaiveDate;
use ups_core::{ActivityStatus, TrackingInfo, UpsError, UpsResult};

fn tracking(xml: &str) -> TrackingInfo {
    TrackingInfo::new("1Z12345E0291980793", UpsResult::new(xml))
}

const DELIVERED_RESPONSE: &str = "<?xml version=\"1.0\"?>\
<TrackResponse>\
<Response><ResponseStatusCode>1</ResponseStatusCode></Response>\
<Shipment><Package>\
<TrackingNumber>1Z12345E0291980793</TrackingNumber>\
<Activity>\
<Status><StatusType><Code>D</Code><Description>DELIVERED</Description></StatusType></Status>\
<Date>20240318</Date><Time>104500</Time>\
</Activity>\
<Activity>\
<Status><StatusType><Code>I</Code><Description>ARRIVAL SCAN</Description></StatusType></Status>\
<Date>20240317</Date><Time>083000</Time>\
</Activity>\
</Package></Shipment>\
</TrackResponse>";

const SINGLE_ACTIVITY_RESPONSE: &str = "<?xml version=\"1.0\"?>\
<TrackResponse>\
<Shipment><Package>\
<Activity>\
<Status><StatusType><Code>I</Code><Description>ORIGIN SCAN</Description></StatusType></Status>\
<Date>20240316</Date><Time>191200</Time>\
</Activity>\
</Package></Shipment>\
</TrackResponse>";

const ERROR_RESPONSE: &str = "<?xml version=\"1.0\"?>\
<TrackResponse>\
<Response>\
<ResponseStatusCode>0</ResponseStatusCode>\
<Error><ErrorCode>151044</ErrorCode>\
<ErrorDescription>No tracking information available</ErrorDescription></Error>\
</Response>\
</TrackResponse>";

#[test]
fn activities_lists_every_event_in_response_order() {
    let activities = tracking(DELIVERED_RESPONSE).activities().unwrap();
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].status, ActivityStatus::Delivered);
    assert_eq!(activities[0].date, "20240318");
    assert_eq!(activities[0].time.as_deref(), Some("104500"));
    assert_eq!(activities[1].status, ActivityStatus::InTransit);
    assert_eq!(activities[1].status_description.as_deref(), Some("ARRIVAL SCAN"));
}

#[test]
fn single_collapsed_activity_normalizes_to_one_element_list() {
    let activities = tracking(SINGLE_ACTIVITY_RESPONSE).activities().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].status, ActivityStatus::InTransit);
}

#[test]
fn missing_activity_path_is_a_structural_error() {
    let err = tracking(ERROR_RESPONSE).activities().unwrap_err();
    assert!(matches!(err, UpsError::MissingField(path) if path.contains("Activity")));
}

#[test]
fn delivered_returns_date_of_first_delivered_activity() {
    let delivered = tracking(DELIVERED_RESPONSE).delivered().unwrap();
    assert_eq!(delivered, NaiveDate::from_ymd_opt(2024, 3, 18));
}

#[test]
fn delivered_is_none_without_a_delivered_activity() {
    let delivered = tracking(SINGLE_ACTIVITY_RESPONSE).delivered().unwrap();
    assert_eq!(delivered, None);
}

#[test]
fn in_transit_iff_an_in_transit_activity_exists() {
    assert!(tracking(DELIVERED_RESPONSE).in_transit().unwrap());
    assert!(tracking(SINGLE_ACTIVITY_RESPONSE).in_transit().unwrap());

    let delivered_only = "<TrackResponse><Shipment><Package>\
<Activity><Status><StatusType><Code>D</Code></StatusType></Status><Date>20240318</Date></Activity>\
</Package></Shipment></TrackResponse>";
    assert!(!tracking(delivered_only).in_transit().unwrap());
}

#[test]
fn unparseable_delivery_date_is_an_invalid_value() {
    let bad_date = "<TrackResponse><Shipment><Package>\
<Activity><Status><StatusType><Code>D</Code></StatusType></Status><Date>tomorrow</Date></Activity>\
</Package></Shipment></TrackResponse>";
    let err = tracking(bad_date).delivered().unwrap_err();
    assert!(matches!(err, UpsError::InvalidValue { .. }));
}
