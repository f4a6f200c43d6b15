//! Tests for the user data model.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("1", 1)]
#[case("9999", 9999)]
fn user_id_parses_positive_integers(#[case] raw: &str, #[case] expected: u64) {
    let id: UserId = raw.parse().expect("valid id");
    assert_eq!(id.get(), expected);
}

#[rstest]
#[case("0", UserIdError::Zero)]
#[case("-1", UserIdError::NotANumber)]
#[case("abc", UserIdError::NotANumber)]
#[case("1.5", UserIdError::NotANumber)]
#[case("", UserIdError::NotANumber)]
fn user_id_rejects_invalid_text(#[case] raw: &str, #[case] expected: UserIdError) {
    assert_eq!(raw.parse::<UserId>(), Err(expected));
}

#[test]
fn user_id_successor_stops_at_max() {
    let max = UserId::new(u64::MAX).expect("non-zero");
    assert!(max.successor().is_none());
    assert_eq!(UserId::FIRST.successor().map(UserId::get), Some(2));
}

#[test]
fn user_serialises_with_id_name_age_keys() {
    let user = User::new(UserId::FIRST, "Alice", "30");
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(value, json!({ "id": 1, "name": "Alice", "age": "30" }));
}

#[test]
fn user_preserves_numeric_age() {
    let raw = json!({ "id": 3, "name": "Bob", "age": 41 });
    let user: User = serde_json::from_value(raw.clone()).expect("deserialise user");
    assert_eq!(user.age().as_text().as_deref(), Some("41"));
    assert_eq!(serde_json::to_value(&user).expect("serialise"), raw);
}

#[test]
fn user_rejects_zero_id_on_load() {
    let raw = json!({ "id": 0, "name": "Zed", "age": "1" });
    assert!(serde_json::from_value::<User>(raw).is_err());
}

#[rstest]
#[case(json!(null), true)]
#[case(json!(""), true)]
#[case(json!(false), true)]
#[case(json!(0), true)]
#[case(json!(0.0), true)]
#[case(json!("0"), false)]
#[case(json!(" "), false)]
#[case(json!(true), false)]
#[case(json!(7), false)]
#[case(json!([]), false)]
fn age_blankness(#[case] raw: serde_json::Value, #[case] expected: bool) {
    assert_eq!(Age::new(raw).is_blank(), expected);
}

#[test]
fn age_without_text_form() {
    assert!(Age::new(json!(["30"])).as_text().is_none());
    assert!(Age::new(json!(true)).as_text().is_none());
}

#[test]
fn new_user_into_user_keeps_fields() {
    let id = UserId::new(7).expect("non-zero");
    let user = NewUser::new("Carol Ann", 28_u64).into_user(id);
    assert_eq!(user.id(), id);
    assert_eq!(user.name(), "Carol Ann");
    assert_eq!(user.age(), &Age::from(28_u64));
}
