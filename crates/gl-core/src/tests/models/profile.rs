use crate::Profile;

use std::str::FromStr;

#[test]
fn test_profile_as_str() {
    assert_eq!(Profile::Member.as_str(), "member");
    assert_eq!(Profile::Promoter.as_str(), "promoter");
    assert_eq!(Profile::Staff.as_str(), "staff");
}

#[test]
fn test_profile_from_str() {
    assert_eq!(Profile::from_str("member").unwrap(), Profile::Member);
    assert_eq!(Profile::from_str("promoter").unwrap(), Profile::Promoter);
    assert_eq!(Profile::from_str("staff").unwrap(), Profile::Staff);
    assert!(Profile::from_str("admin").is_err());
}

#[test]
fn test_profile_default_is_member() {
    assert_eq!(Profile::default(), Profile::Member);
}
