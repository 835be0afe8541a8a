use city_registry::domain::city::entity::{City, CityPayload};
use serde_json::{Value, json};

fn payload(value: Value) -> CityPayload {
    value.as_object().cloned().expect("payload must be an object")
}

#[test]
fn city_deserializes_from_flat_json() {
    let city: City = serde_json::from_value(json!({
        "id": 4,
        "name": "Lima",
        "country": "Peru"
    }))
    .expect("flat city should deserialize");

    assert_eq!(city.id, 4);
    assert_eq!(city.name(), Some("Lima"));
    assert_eq!(city.attributes.len(), 2);
}

#[test]
fn city_keeps_non_string_values_verbatim() {
    let city = City::new(1, payload(json!({ "name": "Quito", "population": "2.8M" })));
    assert_eq!(city.attributes["population"], json!("2.8M"));
}

#[test]
fn replacing_with_empty_payload_leaves_only_id() {
    let mut city = City::new(9, payload(json!({ "name": "Bern" })));
    city.replace_attributes(CityPayload::new());
    assert_eq!(serde_json::to_value(&city).unwrap(), json!({ "id": 9 }));
}
